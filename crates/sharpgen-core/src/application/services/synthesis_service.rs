//! Synthesis service - text in, edits out.
//!
//! Wraps the domain scanner and synthesis engine into the two use cases the
//! CLI exposes: a constructor built from a class's properties, and a member
//! initialized from a constructor parameter. No I/O; the caller reads the
//! file and applies the returned edits.

use tracing::{debug, instrument};

use crate::{
    domain::{
        ConstructorForm, Document, MemberKind, SynthesisSettings, block_assignment,
        constructor_from_properties, expression_assignment, find_class_from_line,
        find_constructor_body_start, find_constructor_start, find_properties, member_declaration,
        retrieve_ctor_parameters, retrieve_parameter_type,
        scanner::ConstructorInsertionPoint,
    },
    error::SharpgenResult,
};

/// A single text edit against a source document, zero-based lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert `text` (one or more full lines) before `line`.
    InsertAt { line: usize, text: String },
    /// Replace the content of `line` with `text` (no trailing line break).
    ReplaceLine { line: usize, text: String },
}

impl TextEdit {
    fn line(&self) -> usize {
        match self {
            Self::InsertAt { line, .. } | Self::ReplaceLine { line, .. } => *line,
        }
    }
}

/// Apply edits to `source`, returning the new text terminated by `eol`.
///
/// Edits are applied bottom-up so earlier line numbers stay valid; callers
/// must not pass two edits targeting the same line.
pub fn apply_edits(source: &str, edits: &[TextEdit], eol: &str) -> String {
    let mut lines: Vec<String> = source.lines().map(str::to_string).collect();

    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|e| std::cmp::Reverse(e.line()));

    for edit in ordered {
        match edit {
            TextEdit::InsertAt { line, text } => {
                let at = (*line).min(lines.len());
                lines.splice(at..at, text.lines().map(str::to_string));
            }
            TextEdit::ReplaceLine { line, text } => {
                if let Some(slot) = lines.get_mut(*line) {
                    *slot = text.clone();
                }
            }
        }
    }

    let mut out = lines.join(eol);
    out.push_str(eol);
    out
}

/// Stateless facade over the synthesis use cases.
#[derive(Debug, Default)]
pub struct SynthesisService;

impl SynthesisService {
    pub fn new() -> Self {
        Self
    }

    /// Build a constructor from the properties of the class around `line`.
    #[instrument(skip(self, source, settings))]
    pub fn constructor_from_properties(
        &self,
        source: &str,
        line: usize,
        form: ConstructorForm,
        settings: &SynthesisSettings,
    ) -> SharpgenResult<TextEdit> {
        let doc = Document::new(source);
        let class = find_class_from_line(&doc, line)?;
        let properties = find_properties(&doc, &class)?;
        let constructor = constructor_from_properties(&doc, &class, &properties, form, settings)?;

        Ok(TextEdit::InsertAt {
            line: constructor.insert_line,
            text: constructor.text,
        })
    }

    /// Synthesize a member from the constructor parameter `selected_name`.
    ///
    /// Produces up to two edits: the member declaration above the
    /// constructor, and the assignment inside it. Either edit is skipped
    /// when its trimmed text already appears somewhere in the document.
    #[instrument(skip(self, source, settings))]
    pub fn member_from_parameter(
        &self,
        source: &str,
        line: usize,
        selected_name: &str,
        kind: MemberKind,
        settings: &SynthesisSettings,
    ) -> SharpgenResult<Vec<TextEdit>> {
        let doc = Document::new(source);

        let parameter_list = retrieve_ctor_parameters(&doc, line)?;
        let parameter_type = retrieve_parameter_type(&parameter_list, selected_name)?;
        let insertion_point = find_constructor_body_start(&doc, line)?;

        let mut edits = Vec::with_capacity(2);

        let declaration = member_declaration(&doc, kind, &parameter_type, selected_name, settings);
        if doc.contains_trimmed(&declaration) {
            debug!("declaration already present, skipping");
        } else {
            edits.push(TextEdit::InsertAt {
                line: find_constructor_start(&doc, line),
                text: declaration,
            });
        }

        match insertion_point {
            ConstructorInsertionPoint::Block { body_start_line } => {
                let assignment = block_assignment(&doc, kind, selected_name, settings);
                if doc.contains_trimmed(&assignment) {
                    debug!("assignment already present, skipping");
                } else {
                    edits.push(TextEdit::InsertAt {
                        line: body_start_line,
                        text: assignment,
                    });
                }
            }
            ConstructorInsertionPoint::ExpressionBodied { declaration_line } => {
                let (target_line, replacement) =
                    expression_assignment(&doc, declaration_line, kind, selected_name, settings)?;
                if doc.contains_trimmed(&replacement) {
                    debug!("assignment already present, skipping");
                } else {
                    edits.push(TextEdit::ReplaceLine {
                        line: target_line,
                        text: replacement,
                    });
                }
            }
        }

        Ok(edits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
namespace Demo
{
    public class Person
    {
        public string Name { get; }
        public int Age { get; set; }

        public Person(string name, int age)
        {
            Name = name;
        }
    }
}
";

    fn settings() -> SynthesisSettings {
        SynthesisSettings::default()
    }

    #[test]
    fn constructor_edit_inserts_above_first_property() {
        let service = SynthesisService::new();
        let edit = service
            .constructor_from_properties(SOURCE, 4, ConstructorForm::Block, &settings())
            .unwrap();

        let TextEdit::InsertAt { line, text } = edit else {
            panic!("expected an insert edit");
        };
        assert_eq!(line, 4);
        assert!(text.contains("public Person(string name, int age)"));
        assert!(text.contains("this.Age = age;"));
    }

    #[test]
    fn member_edit_adds_declaration_and_assignment() {
        let service = SynthesisService::new();
        let edits = service
            .member_from_parameter(SOURCE, 7, "age", MemberKind::PrivateField, &settings())
            .unwrap();

        assert_eq!(edits.len(), 2);
        assert_eq!(
            edits[0],
            TextEdit::InsertAt {
                line: 6,
                text: "        private readonly int age;\n".to_string(),
            }
        );
        assert_eq!(
            edits[1],
            TextEdit::InsertAt {
                line: 9,
                text: "            this.age = age;\n".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_declaration_is_skipped() {
        let source = SOURCE.replace(
            "        public Person(string name, int age)",
            "        private readonly int age;\n\n        public Person(string name, int age)",
        );
        let service = SynthesisService::new();
        let edits = service
            .member_from_parameter(&source, 9, "age", MemberKind::PrivateField, &settings())
            .unwrap();

        assert_eq!(edits.len(), 1);
        assert!(matches!(&edits[0], TextEdit::InsertAt { text, .. } if text.contains("=")));
    }

    #[test]
    fn member_line_past_end_of_file_is_an_error() {
        let service = SynthesisService::new();
        let result =
            service.member_from_parameter(SOURCE, 100, "age", MemberKind::PrivateField, &settings());
        assert!(result.is_err());
    }

    #[test]
    fn expression_bodied_constructor_gets_a_replace_edit() {
        let source = "\
namespace Demo;

public class Pair
{
    public Pair(int first, int second)
        => First = first;
}
";
        let service = SynthesisService::new();
        let edits = service
            .member_from_parameter(source, 4, "second", MemberKind::Property, &settings())
            .unwrap();

        let replace = edits
            .iter()
            .find(|e| matches!(e, TextEdit::ReplaceLine { .. }))
            .unwrap();
        assert_eq!(
            *replace,
            TextEdit::ReplaceLine {
                line: 5,
                text: "        => (First, this.Second) = (first, second);".to_string(),
            }
        );
    }

    #[test]
    fn apply_edits_bottom_up() {
        let source = "a\nb\nc\n";
        let edits = vec![
            TextEdit::InsertAt {
                line: 1,
                text: "x\n".to_string(),
            },
            TextEdit::ReplaceLine {
                line: 2,
                text: "C".to_string(),
            },
        ];
        assert_eq!(apply_edits(source, &edits, "\n"), "a\nx\nb\nC\n");
    }

    #[test]
    fn apply_edits_clamps_insert_past_end() {
        let edits = vec![TextEdit::InsertAt {
            line: 99,
            text: "tail\n".to_string(),
        }];
        assert_eq!(apply_edits("a\n", &edits, "\n"), "a\ntail\n");
    }
}

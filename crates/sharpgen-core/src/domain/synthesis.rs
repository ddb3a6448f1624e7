//! Constructor and member synthesis.
//!
//! Pure text generation: given scanner results and the caller's formatting
//! settings, produce the statements to insert. Nothing here touches the
//! filesystem; the application layer turns these strings into edits.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::ident::{camel_case, capitalize};
use crate::domain::scanner::{ClassDefinition, Document, PropertyDefinition};

/// Tuple deconstruction assignment, `(A, B) = (a, b);`, optionally with
/// `this.` or underscore prefixes on the left side.
static TUPLE_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\(\s*(this\.)?_?[A-Za-z_]\w*(,\s*(this\.)?_?[A-Za-z_]\w*)*\s*\))(\s*=\s*)(\(\s*[A-Za-z_]\w*(,\s?[A-Za-z_]\w*)*\s*\));$",
    )
    .expect("valid tuple-assignment pattern")
});

/// Single assignment, `A = a;`, with either side optionally parenthesised.
static SINGLE_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\(\s*)?(this\.)?_?[A-Za-z_]\w*(\s*\))?(\s*=\s*)(\(\s*)?[A-Za-z_]\w*(\s*\))?;$")
        .expect("valid single-assignment pattern")
});

/// Formatting knobs shared by all synthesis operations.
#[derive(Debug, Clone)]
pub struct SynthesisSettings {
    pub tab_size: usize,
    pub private_member_prefix: String,
    pub use_this_qualifier: bool,
    pub eol: String,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            tab_size: 4,
            private_member_prefix: String::new(),
            use_this_qualifier: true,
            eol: "\n".to_string(),
        }
    }
}

impl SynthesisSettings {
    fn qualifier(&self) -> &str {
        if self.use_this_qualifier { "this." } else { "" }
    }

    fn indent(&self, level: usize) -> String {
        " ".repeat(self.tab_size * level)
    }
}

/// What kind of member to synthesize from a constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    PrivateField,
    Property,
    ReadonlyProperty,
}

impl MemberKind {
    pub const ALL: [MemberKind; 3] = [
        MemberKind::PrivateField,
        MemberKind::Property,
        MemberKind::ReadonlyProperty,
    ];

    /// Name the synthesized member is addressed by in assignments.
    pub fn target_name(self, selected_name: &str, settings: &SynthesisSettings) -> String {
        match self {
            Self::PrivateField => {
                format!("{}{selected_name}", settings.private_member_prefix)
            }
            Self::Property | Self::ReadonlyProperty => capitalize(selected_name),
        }
    }
}

/// Shape of a synthesized constructor body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorForm {
    Block,
    Expression,
}

/// A constructor ready to be inserted at `insert_line`, column zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedConstructor {
    pub insert_line: usize,
    pub text: String,
}

/// Indentation depth of class members: one level under a file-scoped (or
/// absent) namespace, two under a block-scoped one.
fn member_nesting(doc: &Document) -> usize {
    for line in doc.lines() {
        if let Some(rest) = line.trim_start().strip_prefix("namespace ") {
            return if rest.trim_end().ends_with(';') { 1 } else { 2 };
        }
    }
    1
}

/// Build a constructor taking one parameter per property, assigning each in
/// declaration order. Inserted above the first qualifying property.
pub fn constructor_from_properties(
    doc: &Document,
    class: &ClassDefinition,
    properties: &[PropertyDefinition],
    form: ConstructorForm,
    settings: &SynthesisSettings,
) -> Result<SynthesizedConstructor, DomainError> {
    if properties.is_empty() {
        return Err(DomainError::NotFound(format!(
            "no properties to build a constructor for '{}'",
            class.name
        )));
    }

    let nesting = member_nesting(doc);
    let indent = settings.indent(nesting);
    let body_indent = settings.indent(nesting + 1);
    let eol = &settings.eol;
    let qualifier = settings.qualifier();

    let parameters = properties
        .iter()
        .map(|p| format!("{} {}", p.ty, camel_case(&p.name)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut text = format!(
        "{indent}{} {}({parameters}){eol}",
        class.modifier, class.name
    );

    match form {
        ConstructorForm::Block => {
            text.push_str(&format!("{indent}{{{eol}"));
            for property in properties {
                text.push_str(&format!(
                    "{body_indent}{qualifier}{} = {};{eol}",
                    property.name,
                    camel_case(&property.name)
                ));
            }
            text.push_str(&format!("{indent}}}{eol}{eol}"));
        }
        ConstructorForm::Expression => {
            let assignment = if properties.len() == 1 {
                let p = &properties[0];
                format!("{qualifier}{} = {}", p.name, camel_case(&p.name))
            } else {
                let left = properties
                    .iter()
                    .map(|p| format!("{qualifier}{}", p.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                let right = properties
                    .iter()
                    .map(|p| camel_case(&p.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({left}) = ({right})")
            };
            text.push_str(&format!("{body_indent}=> {assignment};{eol}{eol}"));
        }
    }

    let insert_line = properties.iter().map(|p| p.line).min().unwrap_or(0);
    debug!(class = %class.name, insert_line, ?form, "constructor synthesized");

    Ok(SynthesizedConstructor { insert_line, text })
}

/// Declaration text for a member synthesized from a constructor parameter.
pub fn member_declaration(
    doc: &Document,
    kind: MemberKind,
    parameter_type: &str,
    selected_name: &str,
    settings: &SynthesisSettings,
) -> String {
    let indent = settings.indent(member_nesting(doc));
    let eol = &settings.eol;

    match kind {
        MemberKind::PrivateField => format!(
            "{indent}private readonly {parameter_type} {}{selected_name};{eol}",
            settings.private_member_prefix
        ),
        MemberKind::Property => format!(
            "{indent}public {parameter_type} {} {{ get; set; }}{eol}",
            capitalize(selected_name)
        ),
        MemberKind::ReadonlyProperty => format!(
            "{indent}public {parameter_type} {} {{ get; }}{eol}",
            capitalize(selected_name)
        ),
    }
}

/// Assignment statement for a block-bodied constructor.
pub fn block_assignment(
    doc: &Document,
    kind: MemberKind,
    selected_name: &str,
    settings: &SynthesisSettings,
) -> String {
    let body_indent = settings.indent(member_nesting(doc) + 1);
    format!(
        "{body_indent}{}{} = {selected_name};{}",
        settings.qualifier(),
        kind.target_name(selected_name, settings),
        settings.eol
    )
}

/// Rewrite the tuple assignment of an expression-bodied constructor so it
/// also assigns `selected_name`.
///
/// Scans forward from `declaration_line` (at most half the document) for a
/// line that, with its `=>` removed, is a tuple or single assignment. Fails
/// with `AlreadyAssigned` when the parameter already appears on the right
/// side. Returns the line to replace and its new text, without trailing eol.
pub fn expression_assignment(
    doc: &Document,
    declaration_line: usize,
    kind: MemberKind,
    selected_name: &str,
    settings: &SynthesisSettings,
) -> Result<(usize, String), DomainError> {
    let limit = (declaration_line + doc.line_count() / 2).min(doc.line_count());

    let mut found = None;
    for line_no in declaration_line..limit {
        let stripped = doc.line(line_no).replacen("=>", "", 1);
        let candidate = stripped.trim();
        if TUPLE_ASSIGNMENT.is_match(candidate) || SINGLE_ASSIGNMENT.is_match(candidate) {
            found = Some((line_no, candidate.to_string()));
            break;
        }
    }

    let Some((line_no, assignment)) = found else {
        return Err(DomainError::NotFound(format!(
            "no assignment found in the expression-bodied constructor at line {declaration_line}"
        )));
    };

    let Some((left, right)) = assignment.split_once('=') else {
        return Err(DomainError::UnsupportedConstruct(assignment));
    };

    let mut left_names = tuple_names(left);
    let mut right_names = tuple_names(right);

    if right_names.iter().any(|n| n == selected_name) {
        return Err(DomainError::AlreadyAssigned {
            parameter: selected_name.to_string(),
        });
    }

    left_names.push(format!(
        "{}{}",
        settings.qualifier(),
        kind.target_name(selected_name, settings)
    ));
    right_names.push(selected_name.to_string());

    let body_indent = settings.indent(member_nesting(doc) + 1);
    let replacement = format!(
        "{body_indent}=> ({}) = ({});",
        left_names.join(", "),
        right_names.join(", ")
    );

    Ok((line_no, replacement))
}

fn tuple_names(side: &str) -> Vec<String> {
    side.replace(['(', ')', ';'], "")
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scanner::{find_class_from_line, find_properties};

    const BLOCK_NS: &str = "\
namespace Demo
{
    public class Person
    {
        public string Name { get; }
        public int Age { get; set; }
    }
}
";

    const FILE_SCOPED_NS: &str = "\
namespace Demo;

public class Person
{
    public string Name { get; }
}
";

    fn settings() -> SynthesisSettings {
        SynthesisSettings::default()
    }

    #[test]
    fn block_constructor_from_properties() {
        let doc = Document::new(BLOCK_NS);
        let class = find_class_from_line(&doc, 4).unwrap();
        let props = find_properties(&doc, &class).unwrap();
        let ctor = constructor_from_properties(
            &doc, &class, &props, ConstructorForm::Block, &settings(),
        )
        .unwrap();

        assert_eq!(ctor.insert_line, 4);
        let expected = concat!(
            "        public Person(string name, int age)\n",
            "        {\n",
            "            this.Name = name;\n",
            "            this.Age = age;\n",
            "        }\n",
            "\n",
        );
        assert_eq!(ctor.text, expected);
    }

    #[test]
    fn expression_constructor_with_multiple_properties() {
        let doc = Document::new(BLOCK_NS);
        let class = find_class_from_line(&doc, 4).unwrap();
        let props = find_properties(&doc, &class).unwrap();
        let ctor = constructor_from_properties(
            &doc, &class, &props, ConstructorForm::Expression, &settings(),
        )
        .unwrap();

        assert!(ctor.text.contains("=> (this.Name, this.Age) = (name, age);"));
    }

    #[test]
    fn expression_constructor_with_single_property_omits_parens() {
        let doc = Document::new(FILE_SCOPED_NS);
        let class = find_class_from_line(&doc, 3).unwrap();
        let props = find_properties(&doc, &class).unwrap();
        let ctor = constructor_from_properties(
            &doc, &class, &props, ConstructorForm::Expression, &settings(),
        )
        .unwrap();

        assert!(ctor.text.contains("=> this.Name = name;"));
        assert!(!ctor.text.contains("=> ("));
    }

    #[test]
    fn file_scoped_namespace_indents_one_level() {
        let doc = Document::new(FILE_SCOPED_NS);
        let class = find_class_from_line(&doc, 3).unwrap();
        let props = find_properties(&doc, &class).unwrap();
        let ctor = constructor_from_properties(
            &doc, &class, &props, ConstructorForm::Block, &settings(),
        )
        .unwrap();

        assert!(ctor.text.starts_with("    public Person(string name)\n"));
        assert!(ctor.text.contains("\n        this.Name = name;\n"));
    }

    #[test]
    fn empty_property_list_is_rejected() {
        let doc = Document::new(BLOCK_NS);
        let class = find_class_from_line(&doc, 4).unwrap();
        let err = constructor_from_properties(
            &doc, &class, &[], ConstructorForm::Block, &settings(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn member_declarations_per_kind() {
        let doc = Document::new(BLOCK_NS);
        let mut cfg = settings();
        cfg.private_member_prefix = "_".to_string();

        assert_eq!(
            member_declaration(&doc, MemberKind::PrivateField, "string", "name", &cfg),
            "        private readonly string _name;\n"
        );
        assert_eq!(
            member_declaration(&doc, MemberKind::Property, "string", "name", &cfg),
            "        public string Name { get; set; }\n"
        );
        assert_eq!(
            member_declaration(&doc, MemberKind::ReadonlyProperty, "string", "name", &cfg),
            "        public string Name { get; }\n"
        );
    }

    #[test]
    fn block_assignment_uses_qualifier_and_target() {
        let doc = Document::new(BLOCK_NS);
        let mut cfg = settings();
        cfg.private_member_prefix = "_".to_string();

        assert_eq!(
            block_assignment(&doc, MemberKind::PrivateField, "name", &cfg),
            "            this._name = name;\n"
        );

        cfg.use_this_qualifier = false;
        assert_eq!(
            block_assignment(&doc, MemberKind::Property, "name", &cfg),
            "            Name = name;\n"
        );
    }

    #[test]
    fn splices_parameter_into_tuple_assignment() {
        let doc = Document::new(
            "namespace Demo\n{\n    public class C\n    {\n        public C(int a, int b, int c)\n            => (A, B) = (a, b);\n    }\n}\n",
        );
        let (line, text) = expression_assignment(
            &doc, 5, MemberKind::ReadonlyProperty, "c", &settings(),
        )
        .unwrap();

        assert_eq!(line, 5);
        assert_eq!(text, "            => (A, B, this.C) = (a, b, c);");
    }

    #[test]
    fn splices_into_wide_tuple_assignment() {
        // right side with more than two elements
        let doc = Document::new(
            "namespace Demo\n{\n    public class C\n    {\n        public C(int a, int b, int c, int d)\n            => (A, B, C) = (a, b, c);\n    }\n}\n",
        );
        let (_, text) = expression_assignment(
            &doc, 5, MemberKind::ReadonlyProperty, "d", &settings(),
        )
        .unwrap();

        assert_eq!(text, "            => (A, B, C, this.D) = (a, b, c, d);");
    }

    #[test]
    fn single_assignment_grows_into_tuple() {
        let doc = Document::new(
            "namespace Demo\n{\n    public class C\n    {\n        public C(int a, int b)\n            => A = a;\n    }\n}\n",
        );
        let (_, text) = expression_assignment(
            &doc, 5, MemberKind::ReadonlyProperty, "b", &settings(),
        )
        .unwrap();

        assert_eq!(text, "            => (A, this.B) = (a, b);");
    }

    #[test]
    fn already_assigned_parameter_is_rejected() {
        let doc = Document::new(
            "namespace Demo\n{\n    public class C\n    {\n        public C(int a, int b)\n            => (A, B) = (a, b);\n    }\n}\n",
        );
        let err = expression_assignment(
            &doc, 5, MemberKind::ReadonlyProperty, "b", &settings(),
        )
        .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyAssigned { parameter } if parameter == "b"));
    }

    #[test]
    fn missing_assignment_reports_not_found() {
        let doc = Document::new(
            "namespace Demo\n{\n    public class C\n    {\n        public C(int a) { A = a; }\n    }\n}\n",
        );
        let err = expression_assignment(
            &doc, 4, MemberKind::Property, "a", &settings(),
        )
        .unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
    }
}

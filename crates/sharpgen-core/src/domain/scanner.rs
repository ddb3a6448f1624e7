//! Line-oriented C# source scanning.
//!
//! Everything here works on raw text lines with regular expressions; there
//! is no parsing and no semantic model. Known blind spots are accepted:
//! nested classes resolve to the nearest header above, multi-line
//! signatures may fall outside the scan windows, and matches inside
//! comments are not filtered out.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::error::DomainError;

/// Class header: optional access modifier, optional `static`, then the name.
static CLASS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(private|internal|public|protected)\s?(static)?\sclass\s(\w*)")
        .expect("valid class-header pattern")
});

/// Auto-property on a single line, with optional `private set;`.
static PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(public|private|protected)\s(\w+)\s(\w+)\s?\{\s?(get;)\s?(private\s)?(set;)?\s?\}")
        .expect("valid property pattern")
});

/// Member signature with a parameter list, possibly spanning lines.
static PARAMETER_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(public|private|protected)\s(.*?)\(([\s\S]*?)\)")
        .expect("valid parameter-list pattern")
});

/// Immutable snapshot of a source file, addressed by zero-based line.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> &str {
        &self.lines[index]
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// True when the trimmed needle already appears anywhere in the text.
    pub fn contains_trimmed(&self, needle: &str) -> bool {
        let trimmed = needle.trim();
        !trimmed.is_empty() && self.lines.iter().any(|l| l.contains(trimmed))
    }

    fn window(&self, start: usize, end: usize) -> String {
        self.lines[start..end].join("\n")
    }
}

/// A class header located in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub start_line: usize,
    pub name: String,
    pub modifier: String,
    pub statement: String,
}

/// A single-line auto-property inside a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub line: usize,
    pub modifier: String,
    pub ty: String,
    pub name: String,
    pub statement: String,
}

/// Where a member assignment can be inserted relative to a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorInsertionPoint {
    /// Classic block body; insert at the line after the opening brace.
    Block { body_start_line: usize },
    /// Expression-bodied constructor; the tuple assignment on or after this
    /// line is rewritten instead of inserting a statement.
    ExpressionBodied { declaration_line: usize },
}

/// Find the class enclosing `from_line` by scanning headers upward.
///
/// A `from_line` of zero or past the end restarts the scan from the last
/// line, so the nearest header above the file end wins in those cases.
pub fn find_class_from_line(
    doc: &Document,
    from_line: usize,
) -> Result<ClassDefinition, DomainError> {
    if doc.line_count() == 0 {
        return Err(DomainError::NotFound("document is empty".to_string()));
    }

    let mut line_no = if from_line == 0 || from_line >= doc.line_count() {
        doc.line_count() - 1
    } else {
        from_line
    };

    loop {
        if let Some(captures) = CLASS_HEADER.captures(doc.line(line_no)) {
            return Ok(ClassDefinition {
                start_line: line_no,
                name: captures[3].to_string(),
                modifier: captures[1].to_string(),
                statement: captures[0].to_string(),
            });
        }
        if line_no == 0 {
            break;
        }
        line_no -= 1;
    }

    Err(DomainError::NotFound(format!(
        "no class declaration found above line {from_line}"
    )))
}

/// Collect the auto-properties belonging to `within`.
///
/// Every line of the document is tested; a matching property counts only
/// when its own nearest enclosing class resolves to the same name.
pub fn find_properties(
    doc: &Document,
    within: &ClassDefinition,
) -> Result<Vec<PropertyDefinition>, DomainError> {
    let mut properties = Vec::new();

    for (line_no, text) in doc.lines().enumerate() {
        let Some(captures) = PROPERTY.captures(text) else {
            continue;
        };
        let owner = find_class_from_line(doc, line_no);
        if matches!(owner, Ok(ref class) if class.name == within.name) {
            properties.push(PropertyDefinition {
                line: line_no,
                modifier: captures[1].to_string(),
                ty: captures[2].to_string(),
                name: captures[3].to_string(),
                statement: captures[0].to_string(),
            });
        }
    }

    if properties.is_empty() {
        return Err(DomainError::NotFound(format!(
            "no qualifying properties in class '{}'",
            within.name
        )));
    }

    debug!(class = %within.name, count = properties.len(), "properties collected");
    Ok(properties)
}

/// Locate the insertion point of the constructor at or below `from_line`.
///
/// Scans forward at most half the document. An `=>` seen before any `{`
/// marks an expression-bodied constructor.
pub fn find_constructor_body_start(
    doc: &Document,
    from_line: usize,
) -> Result<ConstructorInsertionPoint, DomainError> {
    let limit = (from_line + doc.line_count() / 2).min(doc.line_count());

    for line_no in from_line..limit {
        let text = doc.line(line_no);
        if text.contains("=>") {
            return Ok(ConstructorInsertionPoint::ExpressionBodied {
                declaration_line: line_no,
            });
        }
        if text.contains('{') {
            return Ok(ConstructorInsertionPoint::Block {
                body_start_line: line_no + 1,
            });
        }
    }

    Err(DomainError::NotFound(format!(
        "no constructor body found at or below line {from_line}"
    )))
}

/// Line where a member declaration can be inserted above the constructor.
///
/// Scans upward from `from_line` for a blank line that is still inside the
/// enclosing class; falls back to `from_line` itself, including when
/// `from_line` is past the end of the document.
pub fn find_constructor_start(doc: &Document, from_line: usize) -> usize {
    if from_line >= doc.line_count() {
        return from_line;
    }
    let Ok(class) = find_class_from_line(doc, from_line) else {
        return from_line;
    };

    let limit = from_line.saturating_sub(doc.line_count() / 2);
    let mut line_no = from_line;
    while line_no > limit {
        if doc.line(line_no).trim().is_empty() && line_no >= class.start_line {
            return line_no;
        }
        line_no -= 1;
    }

    from_line
}

/// Extract the raw parameter-list text of the signature around `line`.
///
/// Looks at a window of two lines above through two below, clamped to the
/// document, and returns the text between the first `(` and its `)`.
/// A line at or past the end of the document is `NotFound`.
pub fn retrieve_ctor_parameters(doc: &Document, line: usize) -> Result<String, DomainError> {
    if line >= doc.line_count() {
        return Err(DomainError::NotFound(format!(
            "line {line} is past the end of the document"
        )));
    }
    let start = line.saturating_sub(2);
    let end = (line + 2).min(doc.line_count());
    let surrounding = doc.window(start, end);

    let captures = PARAMETER_LIST.captures(&surrounding).ok_or_else(|| {
        DomainError::NotFound(format!("no parameter list found around line {line}"))
    })?;

    Ok(captures[3].to_string())
}

/// Look up the declared type of `selected_name` in a raw parameter list.
/// When the name repeats, the last occurrence wins.
pub fn retrieve_parameter_type(
    parameter_list: &str,
    selected_name: &str,
) -> Result<String, DomainError> {
    let mut parameter_type = None;

    for part in parameter_list.split(',') {
        let mut words = part.split_whitespace();
        if let (Some(ty), Some(name)) = (words.next(), words.next()) {
            if name == selected_name {
                parameter_type = Some(ty.to_string());
            }
        }
    }

    parameter_type.ok_or_else(|| {
        DomainError::NotFound(format!("no parameter named '{selected_name}' in the list"))
    })
}

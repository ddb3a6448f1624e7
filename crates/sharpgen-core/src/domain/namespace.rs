//! Block-scoped to file-scoped namespace conversion.
//!
//! Templates are authored in block-scoped form (`namespace X { ... }` with
//! one level of four-space indentation). When a configuration asks for
//! file-scoped namespaces, the template text is rewritten before placeholder
//! substitution.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a line that is exactly an opening or closing namespace brace, or
/// the four-space indentation that the brace level contributed.
static BLOCK_SCOPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(\{|\}|    )").expect("valid block-scope pattern"));

/// Rewrite block-scoped template text into file-scoped form.
///
/// Brace-only lines are emptied, one level of four-space indentation is
/// stripped from every line, and the namespace declaration gains a
/// terminating `;`. The `${namespace}` placeholder must still be present;
/// substitution happens afterwards.
pub fn to_file_scoped(template_text: &str) -> String {
    let stripped = BLOCK_SCOPE.replace_all(template_text, "");
    stripped.replacen("${namespace}", "${namespace};", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_block_to_file_scoped() {
        let block = "namespace ${namespace}\n{\n    public class ${classname}\n    {\n    }\n}\n";
        let converted = to_file_scoped(block);
        assert_eq!(
            converted,
            "namespace ${namespace};\n\npublic class ${classname}\n{\n}\n\n"
        );
    }

    #[test]
    fn only_first_namespace_placeholder_gains_semicolon() {
        let text = "namespace ${namespace}\n// ${namespace}\n";
        let converted = to_file_scoped(text);
        assert_eq!(converted, "namespace ${namespace};\n// ${namespace}\n");
    }

    #[test]
    fn strips_one_indent_level_only() {
        let text = "    {\n        inner\n";
        // brace line keeps nothing, inner line keeps one level
        assert_eq!(to_file_scoped(text), "{\n    inner\n");
    }
}

//! Template rendering.
//!
//! A [`Template`] pairs raw template text with a resolved
//! [`TemplateConfiguration`] and produces final file content. Substitution is
//! ordered: namespace-scope rewriting first, then the `${namespace}`,
//! `${classname}` and `${namespaces}` placeholders, then cursor-marker
//! removal, and finally line-ending normalisation.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::domain::config::TemplateConfiguration;
use crate::domain::namespace::to_file_scoped;

const NAMESPACE_PLACEHOLDER: &str = "${namespace}";
const CLASSNAME_PLACEHOLDER: &str = "${classname}";
const USINGS_PLACEHOLDER: &str = "${namespaces}";
const CURSOR_MARKER: &str = "${cursor}";

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n").expect("valid line-break pattern"));

/// Position the editor caret should land on in a freshly rendered file.
/// Both fields are zero-based; `column` counts from the byte after the
/// preceding line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Raw template text bound to the configuration it renders under.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
    config: TemplateConfiguration,
}

impl Template {
    pub fn new(text: String, config: TemplateConfiguration) -> Self {
        Self { text, config }
    }

    pub fn config(&self) -> &TemplateConfiguration {
        &self.config
    }

    /// Render final file content for the given namespace and type name.
    pub fn build(&self, namespace: &str, classname: &str) -> String {
        let rendered = self.substitute(namespace, classname);
        let rendered = rendered.replacen(CURSOR_MARKER, "", 1);
        self.normalize_eol(&rendered)
    }

    /// Locate the caret marker in the rendered output.
    ///
    /// Returns `None` when the template carries no marker, and also when the
    /// marker sits on the very first line; callers fall back to the file
    /// start in both cases.
    pub fn cursor_position(&self, namespace: &str, classname: &str) -> Option<CursorPosition> {
        let rendered = self.normalize_eol(&self.substitute(namespace, classname));
        let index = rendered.find(CURSOR_MARKER)?;
        let before = &rendered[..index];
        let line = before.matches('\n').count();
        if line == 0 {
            return None;
        }
        let column = before.len() - before.rfind('\n').unwrap_or(0);
        trace!(line, column, "cursor marker located");
        Some(CursorPosition { line, column })
    }

    fn substitute(&self, namespace: &str, classname: &str) -> String {
        let text = if self.config.use_file_scoped_namespace() {
            to_file_scoped(&self.text)
        } else {
            self.text.clone()
        };
        text.replace(NAMESPACE_PLACEHOLDER, namespace)
            .replace(CLASSNAME_PLACEHOLDER, classname)
            .replacen(USINGS_PLACEHOLDER, &self.usings_block(), 1)
    }

    fn normalize_eol(&self, text: &str) -> String {
        LINE_BREAK.replace_all(text, self.config.eol()).into_owned()
    }

    /// Assemble the `using` directive block that replaces `${namespaces}`.
    ///
    /// Required usings always appear; optional ones only when namespace
    /// inclusion is enabled. Duplicates keep their first occurrence, usings
    /// already visible through implicit global usings are dropped, and the
    /// remainder sorts `System*` namespaces ahead of everything else.
    fn usings_block(&self) -> String {
        let mut usings: Vec<&str> = self
            .config
            .required_usings()
            .iter()
            .map(String::as_str)
            .collect();
        if self.config.include_namespaces() {
            usings.extend(self.config.optional_usings().iter().map(String::as_str));
        }

        let mut seen = Vec::with_capacity(usings.len());
        for using in usings {
            if !seen.contains(&using) {
                seen.push(using);
            }
        }
        if self.config.use_implicit_usings() {
            let globals = self.config.global_usings();
            seen.retain(|u| !globals.iter().any(|g| g == u));
        }
        if seen.is_empty() {
            return String::new();
        }

        seen.sort_by_key(|u| (!u.starts_with("System"), u.to_string()));

        let eol = self.config.eol();
        let mut block = String::new();
        for using in seen {
            block.push_str("using ");
            block.push_str(using);
            block.push(';');
            block.push_str(eol);
        }
        block.push_str(eol);
        block
    }
}

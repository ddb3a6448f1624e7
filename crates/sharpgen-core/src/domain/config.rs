//! Template configuration resolution.
//!
//! [`TemplateConfiguration`] is the immutable value object that a
//! [`crate::domain::template::Template`] renders against. It is built once
//! per (kind, settings) pair and validated at construction: an incompatible
//! combination (a version-gated kind against an old target) never produces a
//! configuration.

use crate::domain::TemplateKind;
use crate::domain::error::DomainError;

/// Line ending of the host platform, used when the setting is `auto` or
/// anything unrecognised.
#[cfg(windows)]
pub const PLATFORM_EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const PLATFORM_EOL: &str = "\n";

/// Resolved, validated configuration for rendering one template kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateConfiguration {
    kind: TemplateKind,
    include_namespaces: bool,
    use_file_scoped_namespace: bool,
    eol: String,
    required_usings: Vec<String>,
    optional_usings: Vec<String>,
    use_implicit_usings: bool,
    global_usings: Vec<String>,
}

impl TemplateConfiguration {
    /// Resolve workspace settings into a configuration for `kind`.
    ///
    /// * `eol_setting` — `"\n"` and `"\r\n"` are taken verbatim; any other
    ///   value (including `"auto"`) resolves to [`PLATFORM_EOL`].
    /// * `use_file_scoped_namespace` — honoured only for source-file kinds on
    ///   a .NET 6+ target; silently false otherwise.
    /// * `global_usings` — usings visible project-wide; suppressed from the
    ///   rendered using block when `use_implicit_usings` is set.
    ///
    /// Fails when a version-gated kind (`record`) is requested against a
    /// pre-.NET 6 target.
    pub fn create(
        kind: TemplateKind,
        eol_setting: &str,
        include_namespaces: bool,
        use_file_scoped_namespace: bool,
        target_is_net6_plus: bool,
        use_implicit_usings: bool,
        global_usings: Vec<String>,
    ) -> Result<Self, DomainError> {
        if kind.requires_net6() && !target_is_net6_plus {
            return Err(DomainError::IncompatibleTemplate {
                kind: kind.name().to_string(),
                reason: "the target framework does not support this construct (requires .NET 6+)"
                    .to_string(),
            });
        }

        let eol = resolve_eol(eol_setting);
        let can_use_file_scoped =
            kind.is_source() && use_file_scoped_namespace && target_is_net6_plus;

        Ok(Self {
            kind,
            include_namespaces,
            use_file_scoped_namespace: can_use_file_scoped,
            eol,
            required_usings: kind.required_usings().iter().map(|s| s.to_string()).collect(),
            optional_usings: kind.optional_usings().iter().map(|s| s.to_string()).collect(),
            use_implicit_usings,
            global_usings,
        })
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn include_namespaces(&self) -> bool {
        self.include_namespaces
    }

    pub fn use_file_scoped_namespace(&self) -> bool {
        self.use_file_scoped_namespace
    }

    pub fn eol(&self) -> &str {
        &self.eol
    }

    pub fn required_usings(&self) -> &[String] {
        &self.required_usings
    }

    pub fn optional_usings(&self) -> &[String] {
        &self.optional_usings
    }

    pub fn use_implicit_usings(&self) -> bool {
        self.use_implicit_usings
    }

    pub fn global_usings(&self) -> &[String] {
        &self.global_usings
    }
}

fn resolve_eol(setting: &str) -> String {
    match setting {
        "\n" | "\r\n" => setting.to_string(),
        _ => PLATFORM_EOL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(kind: TemplateKind, net6: bool) -> Result<TemplateConfiguration, DomainError> {
        TemplateConfiguration::create(kind, "\n", true, false, net6, false, Vec::new())
    }

    #[test]
    fn eol_literal_values_are_taken_verbatim() {
        let unix = TemplateConfiguration::create(
            TemplateKind::Class, "\n", true, false, true, false, Vec::new(),
        )
        .unwrap();
        assert_eq!(unix.eol(), "\n");

        let windows = TemplateConfiguration::create(
            TemplateKind::Class, "\r\n", true, false, true, false, Vec::new(),
        )
        .unwrap();
        assert_eq!(windows.eol(), "\r\n");
    }

    #[test]
    fn eol_auto_resolves_to_platform_default() {
        let cfg = TemplateConfiguration::create(
            TemplateKind::Class, "auto", true, false, true, false, Vec::new(),
        )
        .unwrap();
        assert_eq!(cfg.eol(), PLATFORM_EOL);
    }

    #[test]
    fn record_rejected_below_net6() {
        let err = create(TemplateKind::Record, false).unwrap_err();
        assert!(matches!(err, DomainError::IncompatibleTemplate { .. }));
    }

    #[test]
    fn record_accepted_on_net6() {
        assert!(create(TemplateKind::Record, true).is_ok());
    }

    #[test]
    fn file_scoped_requires_all_three_conditions() {
        // requested + net6 + source kind
        let eligible = TemplateConfiguration::create(
            TemplateKind::Class, "\n", true, true, true, false, Vec::new(),
        )
        .unwrap();
        assert!(eligible.use_file_scoped_namespace());

        // not requested
        let not_requested = TemplateConfiguration::create(
            TemplateKind::Class, "\n", true, false, true, false, Vec::new(),
        )
        .unwrap();
        assert!(!not_requested.use_file_scoped_namespace());

        // old target: silently false, never an error
        let old_target = TemplateConfiguration::create(
            TemplateKind::Class, "\n", true, true, false, false, Vec::new(),
        )
        .unwrap();
        assert!(!old_target.use_file_scoped_namespace());

        // markup kind
        let markup = TemplateConfiguration::create(
            TemplateKind::RazorPageTemplate, "\n", true, true, true, false, Vec::new(),
        )
        .unwrap();
        assert!(!markup.use_file_scoped_namespace());
    }

    #[test]
    fn using_lists_come_from_the_kind_table() {
        let cfg = create(TemplateKind::XUnit, true).unwrap();
        assert_eq!(cfg.required_usings(), &["Xunit".to_string()]);
        assert!(cfg.optional_usings().contains(&"System.Linq".to_string()));
    }
}

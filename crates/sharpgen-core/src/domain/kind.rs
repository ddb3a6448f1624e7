//! Template registry: the closed set of scaffoldable artifact kinds.
//!
//! # Design
//!
//! `TemplateKind` is pure constant data — every kind maps 1:1 to one on-disk
//! template resource and one output extension, plus its intrinsic using
//! lists. Because the enum is closed, the per-kind tables below are total
//! `match` expressions; a "kind missing from the table" bug cannot compile.
//!
//! `Artifact` is the user-facing command surface: one artifact expands to
//! one or two template kinds (a razor page is a class file plus a markup
//! file, a UWP page is a class file plus a XAML file).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// A scaffoldable file kind, bound to exactly one template resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Class,
    Interface,
    Enum,
    Struct,
    Record,
    Controller,
    ApiController,
    MsTest,
    NUnit,
    XUnit,
    RazorPageClass,
    RazorPageTemplate,
    UwpPageClass,
    UwpPageXml,
    UwpUserControlClass,
    UwpUserControlXml,
    UwpWindowClass,
    UwpWindowXml,
    UwpResource,
}

impl TemplateKind {
    /// Output file extension, including the leading dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Class
            | Self::Interface
            | Self::Enum
            | Self::Struct
            | Self::Record
            | Self::Controller
            | Self::ApiController
            | Self::MsTest
            | Self::NUnit
            | Self::XUnit
            | Self::RazorPageClass => ".cs",
            Self::UwpPageClass | Self::UwpUserControlClass | Self::UwpWindowClass => ".xaml.cs",
            Self::UwpResource => ".resw",
            Self::RazorPageTemplate => ".cshtml",
            Self::UwpPageXml | Self::UwpUserControlXml | Self::UwpWindowXml => ".xaml",
        }
    }

    /// Canonical resource name, unique per kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::Controller => "controller",
            Self::ApiController => "apicontroller",
            Self::MsTest => "mstest",
            Self::NUnit => "nunit",
            Self::XUnit => "xunit",
            Self::RazorPageClass => "razor_page.cs",
            Self::RazorPageTemplate => "razor_page",
            Self::UwpPageClass => "uwp_page.cs",
            Self::UwpPageXml => "uwp_page",
            Self::UwpUserControlClass => "uwp_usercontrol.cs",
            Self::UwpUserControlXml => "uwp_usercontrol",
            Self::UwpWindowClass => "uwp_window.cs",
            Self::UwpWindowXml => "uwp_window",
            Self::UwpResource => "uwp_resource",
        }
    }

    /// Path of this kind's template resource under a templates directory.
    pub fn template_path(self, templates_dir: &Path) -> PathBuf {
        templates_dir.join(format!("{}.tmpl", self.name()))
    }

    /// Whether this kind produces a C# source file.
    ///
    /// Only source files are eligible for the file-scoped namespace form.
    pub fn is_source(self) -> bool {
        self.extension().ends_with(".cs")
    }

    /// Whether this kind needs .NET 6 or newer.
    pub const fn requires_net6(self) -> bool {
        matches!(self, Self::Record)
    }

    /// Usings that are always emitted for this kind.
    pub const fn required_usings(self) -> &'static [&'static str] {
        match self {
            Self::Class | Self::Interface | Self::Enum | Self::Struct | Self::Record => &[],
            Self::Controller => &[
                "System.Diagnostics",
                "Microsoft.AspNetCore.Mvc",
                "Microsoft.Extensions.Logging",
            ],
            Self::ApiController => &["Microsoft.AspNetCore.Mvc"],
            Self::MsTest => &["Microsoft.VisualStudio.TestTools.UnitTesting"],
            Self::NUnit => &["NUnit.Framework"],
            Self::XUnit => &["Xunit"],
            Self::RazorPageClass => &[
                "Microsoft.AspNetCore.Mvc",
                "Microsoft.AspNetCore.Mvc.RazorPages",
                "Microsoft.Extensions.Logging",
            ],
            Self::UwpPageClass
            | Self::UwpUserControlClass
            | Self::UwpWindowClass
            | Self::UwpPageXml
            | Self::UwpUserControlXml
            | Self::UwpWindowXml
            | Self::RazorPageTemplate
            | Self::UwpResource => &[],
        }
    }

    /// Usings emitted only when namespace inclusion is enabled.
    pub const fn optional_usings(self) -> &'static [&'static str] {
        match self {
            Self::Class
            | Self::Interface
            | Self::Enum
            | Self::Struct
            | Self::Record
            | Self::Controller
            | Self::ApiController
            | Self::MsTest
            | Self::NUnit
            | Self::XUnit
            | Self::RazorPageClass => &[
                "System",
                "System.Collections.Generic",
                "System.Linq",
                "System.Threading.Tasks",
            ],
            Self::UwpPageClass | Self::UwpUserControlClass | Self::UwpWindowClass => &[
                "System",
                "System.Collections.Generic",
                "System.Linq",
                "System.Text",
                "System.Threading.Tasks",
                "System.Windows",
                "System.Windows.Controls",
                "System.Windows.Data",
                "System.Windows.Documents",
                "System.Windows.Input",
                "System.Windows.Media",
                "System.Windows.Media.Imaging",
                "System.Windows.Navigation",
                "System.Windows.Shapes",
            ],
            Self::UwpPageXml
            | Self::UwpUserControlXml
            | Self::UwpWindowXml
            | Self::RazorPageTemplate
            | Self::UwpResource => &[],
        }
    }

    /// Every kind, in declaration order. Used by stores and tests.
    pub const ALL: [TemplateKind; 19] = [
        Self::Class,
        Self::Interface,
        Self::Enum,
        Self::Struct,
        Self::Record,
        Self::Controller,
        Self::ApiController,
        Self::MsTest,
        Self::NUnit,
        Self::XUnit,
        Self::RazorPageClass,
        Self::RazorPageTemplate,
        Self::UwpPageClass,
        Self::UwpPageXml,
        Self::UwpUserControlClass,
        Self::UwpUserControlXml,
        Self::UwpWindowClass,
        Self::UwpWindowXml,
        Self::UwpResource,
    ];
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Artifact ─────────────────────────────────────────────────────────────────

/// A user-invocable scaffolding action, expanding to one or more kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Artifact {
    Class,
    Interface,
    Enum,
    Struct,
    Record,
    Controller,
    ApiController,
    RazorPage,
    XUnit,
    NUnit,
    MsTest,
    UwpPage,
    UwpWindow,
    UwpUserControl,
    UwpResource,
}

impl Artifact {
    /// The template kinds instantiated by this artifact, in write order.
    pub const fn template_kinds(self) -> &'static [TemplateKind] {
        match self {
            Self::Class => &[TemplateKind::Class],
            Self::Interface => &[TemplateKind::Interface],
            Self::Enum => &[TemplateKind::Enum],
            Self::Struct => &[TemplateKind::Struct],
            Self::Record => &[TemplateKind::Record],
            Self::Controller => &[TemplateKind::Controller],
            Self::ApiController => &[TemplateKind::ApiController],
            Self::RazorPage => &[TemplateKind::RazorPageClass, TemplateKind::RazorPageTemplate],
            Self::XUnit => &[TemplateKind::XUnit],
            Self::NUnit => &[TemplateKind::NUnit],
            Self::MsTest => &[TemplateKind::MsTest],
            Self::UwpPage => &[TemplateKind::UwpPageClass, TemplateKind::UwpPageXml],
            Self::UwpWindow => &[TemplateKind::UwpWindowClass, TemplateKind::UwpWindowXml],
            Self::UwpUserControl => &[
                TemplateKind::UwpUserControlClass,
                TemplateKind::UwpUserControlXml,
            ],
            Self::UwpResource => &[TemplateKind::UwpResource],
        }
    }

    /// Stable command identifier, `sharpgen.<action>`.
    pub fn command_id(self) -> String {
        format!("sharpgen.{}", self.action())
    }

    const fn action(self) -> &'static str {
        match self {
            Self::Class => "createClass",
            Self::Interface => "createInterface",
            Self::Enum => "createEnum",
            Self::Struct => "createStruct",
            Self::Record => "createRecord",
            Self::Controller => "createController",
            Self::ApiController => "createApiController",
            Self::RazorPage => "createRazorPage",
            Self::XUnit => "createXUnitTest",
            Self::NUnit => "createNUnitTest",
            Self::MsTest => "createMSTest",
            Self::UwpPage => "createUwpPage",
            Self::UwpWindow => "createUwpWindow",
            Self::UwpUserControl => "createUwpUserControl",
            Self::UwpResource => "createUwpResourceFile",
        }
    }

    /// Default file-name hint offered to the user (`NewClass`, `NewRazorPage`).
    pub fn hint(self) -> String {
        let name = match self {
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::Enum => "Enum",
            Self::Struct => "Struct",
            Self::Record => "Record",
            Self::Controller => "Controller",
            Self::ApiController => "ApiController",
            Self::RazorPage => "RazorPage",
            Self::XUnit => "XUnitTest",
            Self::NUnit => "NUnitTest",
            Self::MsTest => "MsTest",
            Self::UwpPage => "UwpPage",
            Self::UwpWindow => "UwpWindow",
            Self::UwpUserControl => "UwpUserControl",
            Self::UwpResource => "UwpResource",
        };
        format!("New{name}")
    }

    pub const ALL: [Artifact; 15] = [
        Self::Class,
        Self::Interface,
        Self::Enum,
        Self::Struct,
        Self::Record,
        Self::Controller,
        Self::ApiController,
        Self::RazorPage,
        Self::XUnit,
        Self::NUnit,
        Self::MsTest,
        Self::UwpPage,
        Self::UwpWindow,
        Self::UwpUserControl,
        Self::UwpResource,
    ];
}

impl Artifact {
    /// Kebab-case name matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::Controller => "controller",
            Self::ApiController => "api-controller",
            Self::RazorPage => "razor-page",
            Self::XUnit => "xunit",
            Self::NUnit => "nunit",
            Self::MsTest => "mstest",
            Self::UwpPage => "uwp-page",
            Self::UwpWindow => "uwp-window",
            Self::UwpUserControl => "uwp-usercontrol",
            Self::UwpResource => "uwp-resource",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_unique_name() {
        let mut names: Vec<&str> = TemplateKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TemplateKind::ALL.len());
    }

    #[test]
    fn source_kinds_use_cs_extensions() {
        assert_eq!(TemplateKind::Class.extension(), ".cs");
        assert_eq!(TemplateKind::UwpPageClass.extension(), ".xaml.cs");
        assert_eq!(TemplateKind::RazorPageTemplate.extension(), ".cshtml");
        assert_eq!(TemplateKind::UwpPageXml.extension(), ".xaml");
        assert_eq!(TemplateKind::UwpResource.extension(), ".resw");
    }

    #[test]
    fn is_source_covers_both_cs_extensions() {
        assert!(TemplateKind::Class.is_source());
        assert!(TemplateKind::UwpWindowClass.is_source());
        assert!(!TemplateKind::UwpWindowXml.is_source());
        assert!(!TemplateKind::RazorPageTemplate.is_source());
    }

    #[test]
    fn record_is_version_gated() {
        assert!(TemplateKind::Record.requires_net6());
        assert!(!TemplateKind::Class.requires_net6());
    }

    #[test]
    fn template_path_appends_tmpl_suffix() {
        let path = TemplateKind::RazorPageClass.template_path(Path::new("/templates"));
        assert_eq!(path, PathBuf::from("/templates/razor_page.cs.tmpl"));
    }

    #[test]
    fn xunit_requires_xunit_using() {
        assert_eq!(TemplateKind::XUnit.required_usings(), &["Xunit"]);
    }

    #[test]
    fn pair_artifacts_expand_to_class_plus_markup() {
        assert_eq!(
            Artifact::RazorPage.template_kinds(),
            &[TemplateKind::RazorPageClass, TemplateKind::RazorPageTemplate]
        );
        assert_eq!(
            Artifact::UwpPage.template_kinds(),
            &[TemplateKind::UwpPageClass, TemplateKind::UwpPageXml]
        );
        assert_eq!(Artifact::Class.template_kinds(), &[TemplateKind::Class]);
    }

    #[test]
    fn command_ids_are_namespaced() {
        assert_eq!(Artifact::Class.command_id(), "sharpgen.createClass");
        assert_eq!(
            Artifact::UwpResource.command_id(),
            "sharpgen.createUwpResourceFile"
        );
    }

    #[test]
    fn hints_are_prefixed() {
        assert_eq!(Artifact::Class.hint(), "NewClass");
        assert_eq!(Artifact::RazorPage.hint(), "NewRazorPage");
    }
}

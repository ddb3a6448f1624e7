//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use sharpgen_core::domain::{Artifact, ConstructorForm, MemberKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sharpgen",
    bin_name = "sharpgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} C# file scaffolding and member synthesis",
    long_about = "Sharpgen creates C# source files from templates (classes, \
                  controllers, test fixtures, razor pages, UWP views) and \
                  synthesises constructors and members into existing code.",
    after_help = "EXAMPLES:\n\
        \x20 sharpgen new class UserService\n\
        \x20 sharpgen new api-controller Orders --dir src/Controllers\n\
        \x20 sharpgen ctor src/Person.cs --line 5\n\
        \x20 sharpgen member src/Person.cs --line 8 name --kind readonly-property\n\
        \x20 sharpgen completions bash > /usr/share/bash-completion/completions/sharpgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create new C# files from a template.
    #[command(
        visible_alias = "n",
        about = "Create new C# files from a template",
        after_help = "EXAMPLES:\n\
            \x20 sharpgen new class UserService\n\
            \x20 sharpgen new record Money --file-scoped\n\
            \x20 sharpgen new razor-page Index --dir Pages\n\
            \x20 sharpgen new xunit UserServiceTests --namespace My.App.Tests"
    )]
    New(NewArgs),

    /// Insert a constructor built from the class's properties.
    #[command(
        about = "Generate a constructor from class properties",
        after_help = "EXAMPLES:\n\
            \x20 sharpgen ctor src/Person.cs --line 5\n\
            \x20 sharpgen ctor src/Person.cs --line 5 --expression"
    )]
    Ctor(CtorArgs),

    /// Synthesise a field or property from a constructor parameter.
    #[command(
        about = "Initialise a member from a constructor parameter",
        after_help = "EXAMPLES:\n\
            \x20 sharpgen member src/Person.cs --line 8 name\n\
            \x20 sharpgen member src/Person.cs --line 8 age --kind property\n\
            \x20 sharpgen member src/Person.cs --line 8 id --kind private-field"
    )]
    Member(MemberArgs),

    /// List available artifacts and their template kinds.
    #[command(
        visible_alias = "ls",
        about = "List available artifacts",
        after_help = "EXAMPLES:\n\
            \x20 sharpgen list\n\
            \x20 sharpgen list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sharpgen completions bash > ~/.local/share/bash-completion/completions/sharpgen\n\
            \x20 sharpgen completions zsh  > ~/.zfunc/_sharpgen\n\
            \x20 sharpgen completions fish > ~/.config/fish/completions/sharpgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the sharpgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sharpgen config get generation.eol\n\
            \x20 sharpgen config set synthesis.tab_size 2\n\
            \x20 sharpgen config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sharpgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// What to create.
    #[arg(value_name = "ARTIFACT", value_enum, help = "Artifact to create")]
    pub artifact: CliArtifact,

    /// File name without extension.  A trailing `.cs` is tolerated and
    /// stripped.
    #[arg(value_name = "NAME", help = "File name (without extension)")]
    pub name: String,

    /// Destination directory.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        help = "Destination directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Explicit namespace, skipping project detection.
    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "NAMESPACE",
        help = "Namespace for the new file (default: detected from .csproj)"
    )]
    pub namespace: Option<String>,

    /// Prefer the file-scoped namespace form (`namespace X;`).
    ///
    /// Only honoured for C# source files in .NET 6+ projects.
    #[arg(long = "file-scoped", help = "Use a file-scoped namespace declaration")]
    pub file_scoped: bool,

    /// Skip the optional `using` directives.
    #[arg(long = "no-usings", help = "Omit the optional using directives")]
    pub no_usings: bool,

    /// Line ending for generated files.
    #[arg(
        long = "eol",
        value_enum,
        value_name = "EOL",
        help = "Line ending style (default: from config)"
    )]
    pub eol: Option<EolStyle>,

    /// Directory of custom `.tmpl` files overriding the built-in templates.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Custom template directory"
    )]
    pub templates: Option<PathBuf>,
}

/// Line-ending styles selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EolStyle {
    /// Unix line feeds.
    Lf,
    /// Windows carriage-return line feeds.
    Crlf,
    /// Platform default.
    Auto,
}

impl EolStyle {
    /// The setting string understood by the template configuration.
    pub fn as_setting(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
            Self::Auto => "auto",
        }
    }
}

// ── ctor ──────────────────────────────────────────────────────────────────────

/// Arguments for `sharpgen ctor`.
#[derive(Debug, Args)]
pub struct CtorArgs {
    /// The C# source file to modify in place.
    #[arg(value_name = "FILE", help = "C# source file")]
    pub file: PathBuf,

    /// 1-based line inside (or on) the target class declaration.
    #[arg(
        short = 'l',
        long = "line",
        value_name = "LINE",
        help = "Line number inside the target class (1-based)"
    )]
    pub line: usize,

    /// Emit `=> (..) = (..);` instead of a block body.
    #[arg(long = "expression", help = "Generate an expression-bodied constructor")]
    pub expression: bool,
}

// ── member ────────────────────────────────────────────────────────────────────

/// Arguments for `sharpgen member`.
#[derive(Debug, Args)]
pub struct MemberArgs {
    /// The C# source file to modify in place.
    #[arg(value_name = "FILE", help = "C# source file")]
    pub file: PathBuf,

    /// Constructor parameter to materialise as a member.
    #[arg(value_name = "PARAMETER", help = "Constructor parameter name")]
    pub parameter: String,

    /// 1-based line of the constructor declaration.
    #[arg(
        short = 'l',
        long = "line",
        value_name = "LINE",
        help = "Line number of the constructor (1-based)"
    )]
    pub line: usize,

    /// What kind of member to synthesise.
    #[arg(
        short = 'k',
        long = "kind",
        value_enum,
        default_value = "private-field",
        help = "Member kind to generate"
    )]
    pub kind: CliMemberKind,
}

/// Member kinds selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliMemberKind {
    /// `private readonly T name;` initialised in the constructor.
    PrivateField,
    /// `public T Name { get; set; }`.
    Property,
    /// `public T Name { get; }`.
    ReadonlyProperty,
}

impl CliMemberKind {
    pub fn into_core(self) -> MemberKind {
        match self {
            Self::PrivateField => MemberKind::PrivateField,
            Self::Property => MemberKind::Property,
            Self::ReadonlyProperty => MemberKind::ReadonlyProperty,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `sharpgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sharpgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sharpgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.eol`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Artifacts creatable via `sharpgen new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliArtifact {
    Class,
    Interface,
    Enum,
    Struct,
    Record,
    Controller,
    #[value(alias = "api")]
    ApiController,
    #[value(alias = "razor")]
    RazorPage,
    Xunit,
    Nunit,
    Mstest,
    UwpPage,
    UwpWindow,
    UwpUsercontrol,
    UwpResource,
}

impl CliArtifact {
    pub fn into_core(self) -> Artifact {
        match self {
            Self::Class => Artifact::Class,
            Self::Interface => Artifact::Interface,
            Self::Enum => Artifact::Enum,
            Self::Struct => Artifact::Struct,
            Self::Record => Artifact::Record,
            Self::Controller => Artifact::Controller,
            Self::ApiController => Artifact::ApiController,
            Self::RazorPage => Artifact::RazorPage,
            Self::Xunit => Artifact::XUnit,
            Self::Nunit => Artifact::NUnit,
            Self::Mstest => Artifact::MsTest,
            Self::UwpPage => Artifact::UwpPage,
            Self::UwpWindow => Artifact::UwpWindow,
            Self::UwpUsercontrol => Artifact::UwpUserControl,
            Self::UwpResource => Artifact::UwpResource,
        }
    }
}

impl std::fmt::Display for CliArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_core())
    }
}

/// The constructor form implied by `--expression`.
pub fn constructor_form(expression: bool) -> ConstructorForm {
    if expression {
        ConstructorForm::Expression
    } else {
        ConstructorForm::Block
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

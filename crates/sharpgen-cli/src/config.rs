//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Settings for `sharpgen new`.
    pub generation: GenerationConfig,
    /// Settings for `sharpgen ctor` / `sharpgen member`.
    pub synthesis: SynthesisConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Line ending for generated files: `lf`, `crlf`, or `auto`.
    pub eol: String,
    /// Emit the optional `using` directives in new files.
    pub include_namespaces: bool,
    /// Prefer file-scoped namespace declarations where the project allows.
    pub use_file_scoped_namespace: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            eol: "auto".into(),
            include_namespaces: true,
            use_file_scoped_namespace: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Spaces per indentation level in synthesised code.
    pub tab_size: usize,
    /// Prefix for synthesised private fields, e.g. `_`.
    pub private_member_prefix: String,
    /// Qualify assignments with `this.` where names would collide.
    pub use_this_qualifier: bool,
    /// Run `dotnet format` on the file after applying edits (best effort).
    pub reformat_after_change: bool,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            private_member_prefix: String::new(),
            use_this_qualifier: true,
            reformat_after_change: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory of `.tmpl` files overriding the built-in templates.
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from `config_file`, or the default location.
    ///
    /// A missing file at the *default* location is fine (defaults apply);
    /// a missing file passed explicitly via `--config` is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("configuration file not found: {}", path.display());
                }
                path.clone()
            }
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Write this configuration to `path` as pretty TOML.
    pub fn save(&self, path: &PathBuf) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self).context("failed to serialise configuration")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sharpgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "sharpgen", "sharpgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".sharpgen.toml"))
    }
}

//! Command handlers.
//!
//! Each submodule implements one subcommand. Shared plumbing (settings
//! construction, line-ending resolution, the post-edit reformat hook) lives
//! here so the handlers stay thin.

use std::path::Path;

use tracing::{debug, warn};

use sharpgen_core::domain::{PLATFORM_EOL, SynthesisSettings};

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

pub mod completions;
pub mod config;
pub mod ctor;
pub mod list;
pub mod member;
pub mod new;

/// Resolve a config/flag line-ending setting to a concrete sequence.
///
/// `lf` / `crlf` (and the raw sequences) are taken verbatim; anything else
/// means the platform default.
pub(crate) fn resolve_eol(setting: &str) -> &'static str {
    match setting {
        "lf" | "\n" => "\n",
        "crlf" | "\r\n" => "\r\n",
        _ => PLATFORM_EOL,
    }
}

/// Synthesis settings assembled from the loaded configuration.
pub(crate) fn synthesis_settings(config: &AppConfig) -> SynthesisSettings {
    SynthesisSettings {
        tab_size: config.synthesis.tab_size,
        private_member_prefix: config.synthesis.private_member_prefix.clone(),
        use_this_qualifier: config.synthesis.use_this_qualifier,
        eol: resolve_eol(&config.generation.eol).to_string(),
    }
}

/// Read a source file named on the command line.
pub(crate) fn read_source(path: &Path) -> CliResult<String> {
    if !path.exists() {
        return Err(CliError::SourceFileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(CliError::from)
}

/// Best-effort `dotnet format` pass over a just-edited file.
///
/// Synthesis produces correct but unformatted code; when the user opted in,
/// hand the file to the formatter. A missing or failing `dotnet` binary is
/// warned about and otherwise ignored — the edit itself already succeeded.
pub(crate) fn reformat(path: &Path, config: &AppConfig, output: &OutputManager) {
    if !config.synthesis.reformat_after_change {
        return;
    }
    match std::process::Command::new("dotnet")
        .args(["format", "--include"])
        .arg(path)
        .output()
    {
        Ok(result) if result.status.success() => {
            debug!(path = %path.display(), "reformatted");
        }
        Ok(result) => {
            warn!(path = %path.display(), status = %result.status, "dotnet format failed");
            let _ = output.warning("dotnet format failed, leaving the file unformatted");
        }
        Err(error) => {
            warn!(%error, "could not run dotnet format");
            let _ = output.warning("could not run dotnet format, leaving the file unformatted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eol_names_and_sequences_both_resolve() {
        assert_eq!(resolve_eol("lf"), "\n");
        assert_eq!(resolve_eol("\n"), "\n");
        assert_eq!(resolve_eol("crlf"), "\r\n");
        assert_eq!(resolve_eol("\r\n"), "\r\n");
        assert_eq!(resolve_eol("auto"), PLATFORM_EOL);
        assert_eq!(resolve_eol("anything"), PLATFORM_EOL);
    }

    #[test]
    fn settings_come_from_config() {
        let mut config = AppConfig::default();
        config.synthesis.tab_size = 2;
        config.synthesis.private_member_prefix = "_".into();
        config.generation.eol = "lf".into();

        let settings = synthesis_settings(&config);
        assert_eq!(settings.tab_size, 2);
        assert_eq!(settings.private_member_prefix, "_");
        assert_eq!(settings.eol, "\n");
    }
}

//! `sharpgen config` — read and write configuration values.

use crate::{
    cli::{ConfigCommands, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    mut config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&mut config, &key, &value)?;
            let path = global.config.clone().unwrap_or_else(AppConfig::config_path);
            config.save(&path).map_err(|e| CliError::ConfigError {
                message: format!("failed to save configuration: {e:#}"),
                source: None,
            })?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "generation.eol" => Ok(config.generation.eol.clone()),
        "generation.include_namespaces" => Ok(config.generation.include_namespaces.to_string()),
        "generation.use_file_scoped_namespace" => {
            Ok(config.generation.use_file_scoped_namespace.to_string())
        }
        "synthesis.tab_size" => Ok(config.synthesis.tab_size.to_string()),
        "synthesis.private_member_prefix" => Ok(config.synthesis.private_member_prefix.clone()),
        "synthesis.use_this_qualifier" => Ok(config.synthesis.use_this_qualifier.to_string()),
        "synthesis.reformat_after_change" => Ok(config.synthesis.reformat_after_change.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "templates.directory" => Ok(config
            .templates
            .directory
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        _ => Err(unknown_key(key)),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "generation.eol" => config.generation.eol = value.to_string(),
        "generation.include_namespaces" => {
            config.generation.include_namespaces = parse_bool(key, value)?;
        }
        "generation.use_file_scoped_namespace" => {
            config.generation.use_file_scoped_namespace = parse_bool(key, value)?;
        }
        "synthesis.tab_size" => {
            config.synthesis.tab_size = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("'{value}' is not a valid number for {key}"),
                source: None,
            })?;
        }
        "synthesis.private_member_prefix" => {
            config.synthesis.private_member_prefix = value.to_string();
        }
        "synthesis.use_this_qualifier" => {
            config.synthesis.use_this_qualifier = parse_bool(key, value)?;
        }
        "synthesis.reformat_after_change" => {
            config.synthesis.reformat_after_change = parse_bool(key, value)?;
        }
        "output.no_color" => config.output.no_color = parse_bool(key, value)?,
        "templates.directory" => config.templates.directory = Some(value.into()),
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    value.parse().map_err(|_| CliError::ConfigError {
        message: format!("'{value}' is not a valid boolean for {key}"),
        source: None,
    })
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "generation.eol").unwrap(), "auto");
        assert_eq!(get_config_value(&cfg, "synthesis.tab_size").unwrap(), "4");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn set_and_read_back() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "synthesis.private_member_prefix", "_").unwrap();
        assert_eq!(cfg.synthesis.private_member_prefix, "_");

        set_config_value(&mut cfg, "generation.use_file_scoped_namespace", "true").unwrap();
        assert!(cfg.generation.use_file_scoped_namespace);
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "synthesis.tab_size", "wide").is_err());
        assert!(set_config_value(&mut cfg, "output.no_color", "maybe").is_err());
    }
}

//! Implementation of the `sharpgen new` command.
//!
//! Responsibility: translate CLI arguments into creation options, call the
//! core file creation service, and display results. No business logic lives
//! here.

use tracing::{debug, info, instrument};

use sharpgen_adapters::{
    BuiltinStore, CsprojNamespaceDetector, CsprojReader, DirStore, LocalFilesystem,
};
use sharpgen_core::application::{
    CreationOptions, FileCreationService, ports::TemplateStore,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sharpgen new` command.
///
/// Dispatch sequence:
/// 1. Validate the file name
/// 2. Resolve the destination directory and template store
/// 3. Assemble creation options from flags and config
/// 4. Execute via `FileCreationService`
/// 5. Report created files and caret positions
#[instrument(skip_all, fields(artifact = %args.artifact, name = %args.name))]
pub fn execute(
    args: NewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    validate_file_name(&args.name)?;

    // Absolute destination so the .csproj walk-up can climb past the cwd.
    let destination = match &args.dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => std::env::current_dir()?.join(dir),
        None => std::env::current_dir()?,
    };

    let template_dir = args
        .templates
        .clone()
        .or_else(|| config.templates.directory.clone());
    let store: Box<dyn TemplateStore> = match template_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "using template overrides");
            Box::new(DirStore::new(dir))
        }
        None => Box::new(BuiltinStore::new()),
    };

    let options = CreationOptions {
        namespace_override: args.namespace.clone(),
        eol_setting: args
            .eol
            .map(|e| e.as_setting().to_string())
            .unwrap_or_else(|| super::resolve_eol(&config.generation.eol).to_string()),
        include_namespaces: config.generation.include_namespaces && !args.no_usings,
        use_file_scoped_namespace: args.file_scoped
            || config.generation.use_file_scoped_namespace,
    };

    let artifact = args.artifact.into_core();
    let service = FileCreationService::new(
        store,
        Box::new(LocalFilesystem::new()),
        Box::new(CsprojNamespaceDetector::new()),
        Box::new(CsprojReader::new()),
    );

    output.header(&format!("Creating {artifact} '{}'...", args.name))?;
    info!(dir = %destination.display(), "creation started");

    let created = service.create(artifact, &destination, &args.name, &options)?;

    for file in &created {
        output.success(&format!("Created {}", file.path.display()))?;
        if let Some(cursor) = &file.cursor {
            debug!(line = cursor.line, column = cursor.column, "caret position");
        }
    }

    if !output.is_quiet() {
        if let Some(cursor) = created.iter().find_map(|f| f.cursor.as_ref()) {
            output.print(&format!(
                "Caret position: line {}, column {}",
                cursor.line + 1,
                cursor.column + 1
            ))?;
        }
    }

    Ok(())
}

/// Reject names the filesystem or the C# compiler would choke on.
fn validate_file_name(name: &str) -> CliResult<()> {
    let bare = name.strip_suffix(".cs").unwrap_or(name);
    if bare.is_empty() {
        return Err(CliError::InvalidFileName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if bare.contains('/') || bare.contains('\\') {
        return Err(CliError::InvalidFileName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    if bare.starts_with('.') {
        return Err(CliError::InvalidFileName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_valid() {
        assert!(validate_file_name("UserService").is_ok());
        assert!(validate_file_name("UserService.cs").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name(".cs").is_err());
    }

    #[test]
    fn path_separators_rejected() {
        assert!(validate_file_name("a/b").is_err());
        assert!(validate_file_name("a\\b").is_err());
    }

    #[test]
    fn hidden_names_rejected() {
        assert!(validate_file_name(".hidden").is_err());
    }
}

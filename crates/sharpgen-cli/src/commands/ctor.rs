//! Implementation of the `sharpgen ctor` command.
//!
//! Reads the file, asks the synthesis service for a constructor edit, applies
//! it, and writes the file back in place.

use tracing::{info, instrument};

use sharpgen_core::application::{SynthesisService, apply_edits};

use crate::{
    cli::{CtorArgs, constructor_form, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `sharpgen ctor` command.
#[instrument(skip_all, fields(file = %args.file.display(), line = args.line))]
pub fn execute(
    args: CtorArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let source = super::read_source(&args.file)?;
    let settings = super::synthesis_settings(&config);

    // CLI lines are 1-based; the scanner is 0-based.
    let line = args.line.saturating_sub(1);
    let form = constructor_form(args.expression);

    let edit = SynthesisService::new().constructor_from_properties(&source, line, form, &settings)?;
    let updated = apply_edits(&source, std::slice::from_ref(&edit), &settings.eol);
    std::fs::write(&args.file, updated)?;

    info!("constructor inserted");
    output.success(&format!("Constructor added to {}", args.file.display()))?;

    super::reformat(&args.file, &config, &output);
    Ok(())
}

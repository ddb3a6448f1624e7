//! Implementation of the `sharpgen member` command.
//!
//! Reads the file, asks the synthesis service for the declaration and
//! assignment edits, applies them, and writes the file back in place.

use tracing::{info, instrument};

use sharpgen_core::application::{SynthesisService, apply_edits};

use crate::{
    cli::{MemberArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `sharpgen member` command.
#[instrument(
    skip_all,
    fields(file = %args.file.display(), line = args.line, parameter = %args.parameter)
)]
pub fn execute(
    args: MemberArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let source = super::read_source(&args.file)?;
    let settings = super::synthesis_settings(&config);

    // CLI lines are 1-based; the scanner is 0-based.
    let line = args.line.saturating_sub(1);

    let edits = SynthesisService::new().member_from_parameter(
        &source,
        line,
        &args.parameter,
        args.kind.into_core(),
        &settings,
    )?;

    if edits.is_empty() {
        output.info(&format!(
            "'{}' is already declared and assigned, nothing to do",
            args.parameter
        ))?;
        return Ok(());
    }

    let updated = apply_edits(&source, &edits, &settings.eol);
    std::fs::write(&args.file, updated)?;

    info!(edits = edits.len(), "member synthesised");
    output.success(&format!(
        "Member for '{}' added to {}",
        args.parameter,
        args.file.display()
    ))?;

    super::reformat(&args.file, &config, &output);
    Ok(())
}

//! Implementation of the `sharpgen list` command.

use serde::Serialize;

use sharpgen_core::domain::Artifact;

use crate::{
    cli::{
        ListArgs, ListFormat,
        global::{GlobalArgs, OutputFormat},
    },
    error::CliResult,
    output::OutputManager,
};

/// One row of the artifact table, also the JSON shape.
#[derive(Debug, Serialize)]
struct ArtifactRow {
    name: &'static str,
    files: Vec<String>,
    hint: String,
}

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<ArtifactRow> = Artifact::ALL
        .iter()
        .map(|artifact| ArtifactRow {
            name: artifact.as_str(),
            files: artifact
                .template_kinds()
                .iter()
                .map(|k| format!("Name{}", k.extension()))
                .collect(),
            hint: artifact.hint(),
        })
        .collect();

    // A global `--output-format json` wins over the table default, so
    // scripted callers need only the one flag.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available artifacts:")?;
            for row in &rows {
                output.print(&format!(
                    "  {:<16} -> {}",
                    row.name,
                    row.files.join(", ")
                ))?;
            }
        }

        ListFormat::List => {
            for row in &rows {
                println!("{}", row.name);
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name,files,hint");
            for row in &rows {
                println!("{},{},{}", row.name, row.files.join(";"), row.hint);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_artifact_has_at_least_one_file() {
        for artifact in Artifact::ALL {
            assert!(!artifact.template_kinds().is_empty(), "{artifact}");
        }
    }

    #[test]
    fn rows_serialise_to_json() {
        let row = ArtifactRow {
            name: "class",
            files: vec!["Name.cs".into()],
            hint: "NewClass".into(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"name\":\"class\""));
    }
}

//! Project manifest (.csproj) discovery and parsing.

use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use sharpgen_core::{application::ApplicationError, error::SharpgenResult};

/// The parts of a .csproj this tool cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsprojData {
    pub root_namespace: Option<String>,
    pub target_framework: Option<String>,
    pub implicit_usings: bool,
    pub included_usings: Vec<String>,
    pub excluded_usings: Vec<String>,
}

impl CsprojData {
    /// Whether the target framework is .NET 6 or later.
    ///
    /// Modern TFMs look like `net6.0` or `net8.0-windows`; the dot is what
    /// separates them from classic ones like `net48`.
    pub fn is_net6_plus(&self) -> bool {
        let Some(tfm) = &self.target_framework else {
            return false;
        };
        let Some(version) = tfm.strip_prefix("net") else {
            return false;
        };
        if version.starts_with("coreapp") || version.starts_with("standard") {
            return false;
        }
        let numeric = version.split('-').next().unwrap_or(version);
        if !numeric.contains('.') {
            return false;
        }
        numeric
            .split('.')
            .next()
            .and_then(|major| major.parse::<u32>().ok())
            .is_some_and(|major| major >= 6)
    }
}

/// Walk up from `start` to the nearest directory containing a `.csproj`.
pub fn find_project_file(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_dir() { start } else { start.parent()? };
    loop {
        if let Ok(entries) = std::fs::read_dir(dir) {
            let mut candidates: Vec<PathBuf> = entries
                .flatten()
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "csproj"))
                .collect();
            candidates.sort();
            if let Some(found) = candidates.into_iter().next() {
                debug!(path = %found.display(), "project file located");
                return Some(found);
            }
        }
        dir = dir.parent()?;
    }
}

/// Parse the interesting properties out of csproj XML text.
pub fn parse_csproj(xml: &str) -> SharpgenResult<CsprojData> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut data = CsprojData::default();
    let mut current: Option<Field> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                current = match e.name().as_ref() {
                    b"RootNamespace" => Some(Field::RootNamespace),
                    b"TargetFramework" => Some(Field::TargetFramework),
                    b"ImplicitUsings" => Some(Field::ImplicitUsings),
                    b"Using" => {
                        collect_using(&e, &mut data)?;
                        None
                    }
                    _ => None,
                };
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"Using" {
                    collect_using(&e, &mut data)?;
                }
            }
            Ok(Event::Text(text)) => {
                if let Some(field) = current {
                    let value = text
                        .unescape()
                        .map_err(|e| parse_error(e.to_string()))?
                        .trim()
                        .to_string();
                    match field {
                        Field::RootNamespace => data.root_namespace = Some(value),
                        Field::TargetFramework => data.target_framework = Some(value),
                        Field::ImplicitUsings => {
                            data.implicit_usings =
                                value.eq_ignore_ascii_case("enable")
                                    || value.eq_ignore_ascii_case("true");
                        }
                    }
                }
            }
            Ok(Event::End(_)) => current = None,
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(e.to_string())),
            Ok(_) => {}
        }
    }

    Ok(data)
}

#[derive(Clone, Copy)]
enum Field {
    RootNamespace,
    TargetFramework,
    ImplicitUsings,
}

fn collect_using(
    element: &quick_xml::events::BytesStart<'_>,
    data: &mut CsprojData,
) -> SharpgenResult<()> {
    for attribute in element.attributes().flatten() {
        let value = attribute
            .unescape_value()
            .map_err(|e| parse_error(e.to_string()))?
            .to_string();
        match attribute.key.as_ref() {
            b"Include" => data.included_usings.push(value),
            b"Remove" => data.excluded_usings.push(value),
            _ => {}
        }
    }
    Ok(())
}

fn parse_error(reason: String) -> sharpgen_core::error::SharpgenError {
    ApplicationError::ProjectMetadata {
        path: PathBuf::from("<csproj>"),
        reason,
    }
    .into()
}

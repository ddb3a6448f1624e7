//! Project metadata adapters.

pub mod csproj;
pub mod global_usings;

use std::path::Path;

use tracing::instrument;

use sharpgen_core::{
    application::{
        ApplicationError,
        ports::{ProjectInfo, ProjectReader},
    },
    error::SharpgenResult,
};

pub use csproj::{CsprojData, find_project_file, parse_csproj};
pub use global_usings::find_global_usings;

/// [`ProjectReader`] backed by the nearest `.csproj` on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsprojReader;

impl CsprojReader {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectReader for CsprojReader {
    #[instrument(skip(self), fields(destination = %destination.display()))]
    fn project_for(&self, destination: &Path) -> SharpgenResult<ProjectInfo> {
        let project_file = find_project_file(destination).ok_or_else(|| {
            sharpgen_core::error::SharpgenError::from(ApplicationError::ProjectMetadata {
                path: destination.to_path_buf(),
                reason: "no .csproj found in this or any parent directory".to_string(),
            })
        })?;

        let xml = std::fs::read_to_string(&project_file).map_err(|e| {
            ApplicationError::ProjectMetadata {
                path: project_file.clone(),
                reason: e.to_string(),
            }
        })?;
        let data = parse_csproj(&xml)?;

        let global_usings = match &data.target_framework {
            Some(tfm) if data.is_net6_plus() => find_global_usings(&project_file, tfm),
            _ => Vec::new(),
        };

        Ok(ProjectInfo {
            is_net6_plus: data.is_net6_plus(),
            implicit_usings: data.implicit_usings,
            target_framework: data.target_framework,
            included_usings: data.included_usings,
            excluded_usings: data.excluded_usings,
            global_usings,
        })
    }
}

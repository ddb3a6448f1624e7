//! Namespace detection from the project layout.
//!
//! The namespace of a new file is the project root namespace (explicit
//! `<RootNamespace>`, or the project file stem) followed by the folder chain
//! from the project directory down to the destination, dot-joined.

use std::path::Path;

use tracing::instrument;

use sharpgen_core::{
    application::{
        ApplicationError,
        ports::NamespaceDetector,
    },
    error::SharpgenResult,
};

use crate::project::{find_project_file, parse_csproj};

/// [`NamespaceDetector`] derived from the nearest `.csproj`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsprojNamespaceDetector;

impl CsprojNamespaceDetector {
    pub fn new() -> Self {
        Self
    }
}

impl NamespaceDetector for CsprojNamespaceDetector {
    #[instrument(skip(self), fields(destination = %destination.display()))]
    fn namespace_for(&self, destination: &Path) -> SharpgenResult<String> {
        let project_file = find_project_file(destination).ok_or_else(|| {
            sharpgen_core::error::SharpgenError::from(ApplicationError::NamespaceDetection {
                path: destination.to_path_buf(),
                reason: "no .csproj found in this or any parent directory".to_string(),
            })
        })?;

        let xml = std::fs::read_to_string(&project_file).map_err(|e| {
            ApplicationError::NamespaceDetection {
                path: project_file.clone(),
                reason: e.to_string(),
            }
        })?;
        let root = parse_csproj(&xml)?
            .root_namespace
            .or_else(|| {
                project_file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_default();

        let project_dir = project_file.parent().unwrap_or(Path::new(""));
        Ok(join_namespace(&root, project_dir, destination))
    }
}

/// Append the folder chain below `project_dir` to the root namespace.
fn join_namespace(root: &str, project_dir: &Path, destination: &Path) -> String {
    let mut namespace = root.to_string();
    if let Ok(relative) = destination.strip_prefix(project_dir) {
        for component in relative.components() {
            let part = component.as_os_str().to_string_lossy();
            let part = sanitize(&part);
            if !part.is_empty() {
                namespace.push('.');
                namespace.push_str(&part);
            }
        }
    }
    namespace
}

/// Folder names are not always valid C# identifiers; spaces and dashes
/// become underscores.
fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSPROJ: &str = "<Project><PropertyGroup><RootNamespace>My.App</RootNamespace></PropertyGroup></Project>";

    #[test]
    fn combines_root_namespace_with_folders() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("App.csproj"), CSPROJ).unwrap();
        let destination = dir.path().join("Models/Domain");
        std::fs::create_dir_all(&destination).unwrap();

        let detector = CsprojNamespaceDetector::new();
        let namespace = detector.namespace_for(&destination).unwrap();
        assert_eq!(namespace, "My.App.Models.Domain");
    }

    #[test]
    fn falls_back_to_project_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Frontend.csproj"), "<Project/>").unwrap();

        let detector = CsprojNamespaceDetector::new();
        let namespace = detector.namespace_for(dir.path()).unwrap();
        assert_eq!(namespace, "Frontend");
    }

    #[test]
    fn sanitizes_awkward_folder_names() {
        assert_eq!(
            join_namespace("App", Path::new("/p"), Path::new("/p/my models/v2-beta")),
            "App.my_models.v2_beta"
        );
    }

    #[test]
    fn missing_project_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let detector = CsprojNamespaceDetector::new();
        assert!(detector.namespace_for(dir.path()).is_err());
    }
}

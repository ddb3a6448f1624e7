//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sharpgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TemplateKind;
use crate::error::SharpgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sharpgen_adapters::filesystem::LocalFilesystem` (production)
/// - `sharpgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> SharpgenResult<String>;

    /// Write content to a file, creating parent directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> SharpgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template resource retrieval.
///
/// Implemented by:
/// - `sharpgen_adapters::template_store::BuiltinStore` (embedded defaults)
/// - `sharpgen_adapters::template_store::DirStore` (user template directory)
pub trait TemplateStore: Send + Sync {
    /// Raw template text for a kind, placeholders intact.
    fn content(&self, kind: TemplateKind) -> SharpgenResult<String>;
}

/// Port for deriving the namespace of a destination path.
///
/// Implemented by `sharpgen_adapters::namespace_detector::CsprojNamespaceDetector`,
/// which combines the project root namespace with the relative folder chain.
pub trait NamespaceDetector: Send + Sync {
    fn namespace_for(&self, destination: &Path) -> SharpgenResult<String>;
}

/// Metadata extracted from the project manifest nearest to a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Raw `<TargetFramework>` value, when present.
    pub target_framework: Option<String>,
    /// Whether the target framework is .NET 6 or later.
    pub is_net6_plus: bool,
    /// Whether `<ImplicitUsings>` is enabled.
    pub implicit_usings: bool,
    /// `<Using Include="..">` items.
    pub included_usings: Vec<String>,
    /// `<Using Remove="..">` items.
    pub excluded_usings: Vec<String>,
    /// Namespaces from the generated GlobalUsings file under `obj/`.
    pub global_usings: Vec<String>,
}

impl ProjectInfo {
    /// The usings a new file can rely on without declaring them, when
    /// implicit usings are enabled.
    pub fn effective_global_usings(&self) -> Vec<String> {
        let mut usings = self.global_usings.clone();
        for included in &self.included_usings {
            if !usings.contains(included) {
                usings.push(included.clone());
            }
        }
        usings.retain(|u| !self.excluded_usings.contains(u));
        usings
    }
}

/// Port for reading project metadata.
///
/// Implemented by `sharpgen_adapters::project::CsprojReader`, which walks up
/// from the destination to the nearest `.csproj`.
pub trait ProjectReader: Send + Sync {
    fn project_for(&self, destination: &Path) -> SharpgenResult<ProjectInfo>;
}

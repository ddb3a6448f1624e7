//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in text
//! transformation. Scanning and rendering failures are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating file creation or edit application.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A destination file already exists; nothing was written.
    #[error("file already exists: {path}")]
    FileExists { path: PathBuf },

    /// A template resource could not be read.
    #[error("failed to read template '{kind}': {reason}")]
    TemplateRead { kind: String, reason: String },

    /// Writing a rendered file failed.
    #[error("failed to write {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    /// The namespace of the destination could not be determined.
    #[error("failed to detect a namespace for {path}: {reason}")]
    NamespaceDetection { path: PathBuf, reason: String },

    /// Project manifest discovery or parsing failed.
    #[error("failed to read project metadata near {path}: {reason}")]
    ProjectMetadata { path: PathBuf, reason: String },

    /// A generic filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileExists { path } => vec![
                format!("A file already exists at: {}", path.display()),
                "Choose a different name or remove the existing file".into(),
            ],
            Self::TemplateRead { kind, .. } => vec![
                format!("Could not load the '{}' template", kind),
                "Run: sharpgen list to see the available kinds".into(),
                "When using --template-dir, check that <name>.tmpl exists there".into(),
            ],
            Self::FileWrite { path, .. } | Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::NamespaceDetection { .. } => vec![
                "No .csproj was found above the destination".into(),
                "Pass --namespace to set the namespace explicitly".into(),
            ],
            Self::ProjectMetadata { path, .. } => vec![
                format!("Problem reading the project file near: {}", path.display()),
                "Check that the .csproj is well-formed XML".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileExists { .. } => ErrorCategory::Validation,
            Self::TemplateRead { .. } => ErrorCategory::NotFound,
            Self::FileWrite { .. } | Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::NamespaceDetection { .. } | Self::ProjectMetadata { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

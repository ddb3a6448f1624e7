//! Application layer for sharpgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FileCreationService, SynthesisService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! transformation logic itself. All scanning, rendering, and synthesis rules
//! live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CreatedFile, CreationOptions, FileCreationService, SynthesisService, TextEdit, apply_edits,
};

pub use ports::{Filesystem, NamespaceDetector, ProjectInfo, ProjectReader, TemplateStore};

pub use error::ApplicationError;

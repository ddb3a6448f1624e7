//! Application services.

pub mod file_creation;
pub mod synthesis_service;

pub use file_creation::{CreatedFile, CreationOptions, FileCreationService};
pub use synthesis_service::{SynthesisService, TextEdit, apply_edits};

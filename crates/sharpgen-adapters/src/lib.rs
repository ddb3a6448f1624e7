//! Infrastructure adapters for sharpgen.
//!
//! This crate implements the ports defined in
//! `sharpgen_core::application::ports`. It contains all external
//! dependencies and I/O operations: the local and in-memory filesystems,
//! the embedded and directory-backed template stores, the `.csproj` reader
//! and the namespace detector.

pub mod builtin_templates;
pub mod filesystem;
pub mod namespace_detector;
pub mod project;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use namespace_detector::CsprojNamespaceDetector;
pub use project::CsprojReader;
pub use template_store::{BuiltinStore, DirStore};

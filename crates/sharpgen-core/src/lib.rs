//! Sharpgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the sharpgen
//! C# scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          sharpgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (FileCreationService, SynthesisService) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Namespace-  │
//! │      Detector, ProjectReader)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sharpgen-adapters (Infrastructure)   │
//! │  (LocalFilesystem, BuiltinStore, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (TemplateKind, Template, Scanner,      │
//! │   Synthesis - text in, text out)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sharpgen_core::{
//!     application::{CreationOptions, FileCreationService},
//!     domain::Artifact,
//! };
//!
//! // Wire a service with injected adapters, then create files.
//! let service = FileCreationService::new(store, filesystem, detector, reader);
//! let created = service.create(
//!     Artifact::Class,
//!     "./src/Models".as_ref(),
//!     "Person",
//!     &CreationOptions::default(),
//! )?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreatedFile, CreationOptions, FileCreationService, SynthesisService, TextEdit,
        ports::{Filesystem, NamespaceDetector, ProjectInfo, ProjectReader, TemplateStore},
    };
    pub use crate::domain::{
        Artifact, ConstructorForm, CursorPosition, Document, MemberKind, SynthesisSettings,
        Template, TemplateConfiguration, TemplateKind,
    };
    pub use crate::error::{SharpgenError, SharpgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Core domain layer for sharpgen.
//!
//! Pure text transformation logic with no I/O: template kinds and their
//! constant tables, configuration resolution, the renderer, the namespace
//! style converter, the line-oriented source scanner and the synthesis
//! engine. Everything here is synchronous and operates on values; reading
//! templates and writing files happens behind the application ports.

pub mod config;
pub mod error;
pub mod ident;
pub mod kind;
pub mod namespace;
pub mod scanner;
pub mod synthesis;
pub mod template;

pub use config::{PLATFORM_EOL, TemplateConfiguration};
pub use error::{DomainError, ErrorCategory};
pub use ident::{camel_case, capitalize};
pub use kind::{Artifact, TemplateKind};
pub use namespace::to_file_scoped;
pub use scanner::{
    ClassDefinition, ConstructorInsertionPoint, Document, PropertyDefinition,
    find_class_from_line, find_constructor_body_start, find_constructor_start, find_properties,
    retrieve_ctor_parameters, retrieve_parameter_type,
};
pub use synthesis::{
    ConstructorForm, MemberKind, SynthesisSettings, SynthesizedConstructor, block_assignment,
    constructor_from_properties, expression_assignment, member_declaration,
};
pub use template::{CursorPosition, Template};

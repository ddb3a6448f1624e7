//! Domain error types.
//!
//! Every fallible scanning or configuration step returns one of these as a
//! value; nothing in the domain layer panics or throws. A `NotFound` from a
//! single discovery step usually just means a quick-fix is not offered — the
//! caller decides whether it is fatal.

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A discovery scan came up empty: no enclosing class, no qualifying
    /// properties, no constructor body, no parameter of the given name.
    #[error("not found: {0}")]
    NotFound(String),

    /// The selected parameter already appears on the right-hand side of the
    /// expression-bodied constructor's tuple assignment.
    #[error("'{parameter}' is already assigned in the constructor body")]
    AlreadyAssigned { parameter: String },

    /// A source construct the synthesis engine does not handle.
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(String),

    /// The requested template kind is incompatible with the detected target
    /// framework (e.g. `record` below .NET 6).
    #[error("template '{kind}' is not available: {reason}")]
    IncompatibleTemplate { kind: String, reason: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound(what) => vec![
                format!("Nothing matched: {}", what),
                "Check that the line number points inside the construct".into(),
            ],
            Self::AlreadyAssigned { parameter } => vec![
                format!("'{}' is already handled by the constructor", parameter),
                "Pick a different parameter".into(),
            ],
            Self::UnsupportedConstruct(_) => vec![
                "Only single-line declarations and tuple assignments are recognized".into(),
            ],
            Self::IncompatibleTemplate { kind, .. } => vec![
                format!("'{}' needs a newer target framework", kind),
                "Update <TargetFramework> in the .csproj to net6.0 or later".into(),
                "Or pick a different template kind".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::AlreadyAssigned { .. } | Self::UnsupportedConstruct(_) => {
                ErrorCategory::Validation
            }
            Self::IncompatibleTemplate { .. } => ErrorCategory::Compatibility,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}

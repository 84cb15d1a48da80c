//! Error types for fluent wrapper generation.
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! is the single [`Error`] enum below. Variants follow the failure taxonomy of
//! the generator:
//!
//! - `Configuration`: invalid generator settings, detected before any type is processed
//! - `TypeResolution`: a type name the metadata provider cannot locate
//! - `GenerationConflict` / `InvalidIdentifier`: a plan that cannot be declared;
//!   aborts only the affected type
//! - `EmissionIo`: failure while writing generated sources
//! - `NotRegistered`: post-hoc lookup of a type that was never added
//! - `Metadata`: an unreadable or malformed metadata manifest
//!
//! No error is retried by the library. Retrying is the caller's decision.
//!
//! # Example
//!
//! ```rust
//! use fluentgen::errors::{Error, ErrorCode};
//!
//! let err = Error::type_resolution("com.example.Missing");
//! assert_eq!(err.code(), ErrorCode::TYPE_RESOLUTION);
//! assert!(err.is_user_fixable());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
///
/// Codes are grouped by category:
/// - E001-E009: I/O and emission errors
/// - E010-E019: Metadata errors
/// - E020-E029: Configuration errors
/// - E030-E039: Type resolution errors
/// - E040-E049: Generation errors
/// - E050-E059: Lookup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// Writing generated sources failed
    pub const EMISSION_IO: ErrorCode = ErrorCode("E001");
    /// Metadata manifest could not be read or parsed
    pub const METADATA: ErrorCode = ErrorCode("E010");
    /// Invalid generator configuration
    pub const CONFIGURATION: ErrorCode = ErrorCode("E020");
    /// Named type could not be located
    pub const TYPE_RESOLUTION: ErrorCode = ErrorCode("E030");
    /// Two generated members (or classes) collide
    pub const GENERATION_CONFLICT: ErrorCode = ErrorCode("E040");
    /// A derived identifier is not usable in generated source
    pub const INVALID_IDENTIFIER: ErrorCode = ErrorCode("E041");
    /// Lookup of a type that was never added
    pub const NOT_REGISTERED: ErrorCode = ErrorCode("E050");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Main error type for generator operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration; the generator was not constructed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A type name could not be resolved to metadata
    #[error("Cannot resolve type '{name}'")]
    TypeResolution {
        name: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Two members of one generated class share name and signature
    #[error("Generation conflict in {class}: {member} is already declared")]
    GenerationConflict { class: String, member: String },

    /// A derived name cannot be used as an identifier
    #[error("Invalid identifier '{identifier}' in {class} (derived from {origin})")]
    InvalidIdentifier {
        class: String,
        identifier: String,
        origin: String,
    },

    /// Writing generated sources failed
    #[error("Failed to write {}: {source}", path.display())]
    EmissionIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The type was never added to the generator
    #[error("Type '{0}' was not added to the generator")]
    NotRegistered(String),

    /// A metadata manifest could not be read or parsed
    #[error("Metadata error{}: {message}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Metadata {
        path: Option<PathBuf>,
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a type resolution error without an underlying cause
    pub fn type_resolution(name: impl Into<String>) -> Self {
        Self::TypeResolution {
            name: name.into(),
            source: None,
        }
    }

    /// Create a type resolution error wrapping its cause
    pub fn type_resolution_caused_by(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::TypeResolution {
            name: name.into(),
            source: Some(source.into()),
        }
    }

    /// Create a conflict error for a class member
    pub fn conflict(class: impl Into<String>, member: impl Into<String>) -> Self {
        Self::GenerationConflict {
            class: class.into(),
            member: member.into(),
        }
    }

    /// Create an invalid identifier error for a derived name
    pub fn invalid_identifier(
        class: impl Into<String>,
        identifier: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            class: class.into(),
            identifier: identifier.into(),
            origin: origin.into(),
        }
    }

    /// Create an emission error for a path
    pub fn emission_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::EmissionIo {
            path: path.into(),
            source,
        }
    }

    /// Create a metadata error with optional path context
    pub fn metadata(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Metadata {
            path,
            message: message.into(),
        }
    }

    /// Get the structured error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Configuration(_) => ErrorCode::CONFIGURATION,
            Self::TypeResolution { .. } => ErrorCode::TYPE_RESOLUTION,
            Self::GenerationConflict { .. } => ErrorCode::GENERATION_CONFLICT,
            Self::InvalidIdentifier { .. } => ErrorCode::INVALID_IDENTIFIER,
            Self::EmissionIo { .. } => ErrorCode::EMISSION_IO,
            Self::NotRegistered(_) => ErrorCode::NOT_REGISTERED,
            Self::Metadata { .. } => ErrorCode::METADATA,
        }
    }

    /// Whether the user can fix the problem by changing input or configuration.
    ///
    /// I/O failures are environmental; everything else traces back to a setting,
    /// a manifest or the shape of the source type.
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::EmissionIo { .. })
    }

    /// Whether the error aborted a single type rather than the whole run
    pub fn is_type_scoped(&self) -> bool {
        matches!(
            self,
            Self::GenerationConflict { .. } | Self::InvalidIdentifier { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

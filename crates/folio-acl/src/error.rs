//! Error types for folio-acl

use thiserror::Error;

/// Result type alias for folio-acl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or mutating an access control list
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A malformed entry was passed to a constructor or mutator.
    ///
    /// Nothing was mutated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Stored state is corrupt (e.g. an entry without a principal).
    #[error("ACL invariant violated: {0}")]
    InvariantViolation(String),

    /// The mutation lock could not be acquired within the configured timeout.
    #[error("Timed out after {waited_ms}ms waiting for the ACL lock")]
    LockTimeout {
        /// How long the caller waited
        waited_ms: u64,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error means the resource's ACL is misconfigured.
    ///
    /// Resource setup must fail on these instead of granting or denying
    /// access.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_) | Error::InvariantViolation(_) | Error::Core(_)
        )
    }
}

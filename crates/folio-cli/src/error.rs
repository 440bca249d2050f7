//! Error types for folio-cli

use thiserror::Error;

/// Result type alias for folio-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folio-acl
    #[error("ACL error: {0}")]
    Acl(#[from] folio_acl::Error),

    /// Error from folio-core
    #[error("Core error: {0}")]
    Core(#[from] folio_core::Error),

    /// A `--grant` argument that cannot be parsed
    #[error("Invalid grant '{grant}': expected <principal>=<wiki:page>:<actions>")]
    InvalidGrant {
        /// The offending argument
        grant: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid grant error.
    pub fn invalid_grant(grant: impl Into<String>) -> Self {
        Self::InvalidGrant {
            grant: grant.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

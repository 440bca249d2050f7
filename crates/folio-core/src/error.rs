//! Error types for folio-core

use thiserror::Error;

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building principals and permissions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An action name that is not part of the page action vocabulary
    #[error("invalid page action: '{action}'")]
    InvalidAction {
        /// The offending action string
        action: String,
    },

    /// A permission target that cannot be parsed
    #[error("invalid permission target '{target}': {reason}")]
    InvalidTarget {
        /// The offending target string
        target: String,
        /// What is wrong with it
        reason: String,
    },
}

impl Error {
    /// Create an invalid action error.
    pub fn invalid_action(action: impl Into<String>) -> Self {
        Self::InvalidAction {
            action: action.into(),
        }
    }

    /// Create an invalid target error.
    pub fn invalid_target(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

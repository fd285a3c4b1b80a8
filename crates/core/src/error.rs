//! Error types for docledger
//!
//! This module defines the error type shared by the store binding, the
//! engine, and the key codec. We use `thiserror` for automatic `Display`
//! and `Error` trait implementations.

use crate::key::KeyError;
use thiserror::Error;

/// Result type alias for docledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the document layer
///
/// None of these are retried internally. Every variant is surfaced to the
/// caller of the current operation as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Creation attempted for a key that already holds a document
    #[error("document already exists: {key}")]
    AlreadyExists {
        /// Composite key that was already present
        key: String,
    },

    /// Point lookup for an absent key
    #[error("document not found: {key}")]
    NotFound {
        /// Composite key that was looked up
        key: String,
    },

    /// A referenced document does not exist
    #[error("referenced {doc_type} does not exist: {identity}")]
    ReferenceNotFound {
        /// Document type of the missing reference
        doc_type: String,
        /// Identity of the missing reference
        identity: String,
    },

    /// Query issued without a resolvable document type
    #[error("invalid selector: {reason}")]
    InvalidSelector {
        /// Why no key range could be computed
        reason: String,
    },

    /// Document type or identity rejected by the key codec
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    /// Malformed request arguments
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable reason
        reason: String,
    },

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Underlying store failure
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Build an `InvalidInput` error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Build an `InvalidSelector` error
    pub fn invalid_selector(reason: impl Into<String>) -> Self {
        Error::InvalidSelector {
            reason: reason.into(),
        }
    }

    /// Build a `ReferenceNotFound` error
    pub fn reference_not_found(doc_type: impl Into<String>, identity: impl Into<String>) -> Self {
        Error::ReferenceNotFound {
            doc_type: doc_type.into(),
            identity: identity.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

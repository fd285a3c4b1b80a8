//! Error types for operation execution.
//!
//! All errors from [`Executor::invoke`](crate::Executor::invoke) are
//! represented by the [`Error`] enum. These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON for a transport envelope
//! - **Lossless**: The message of the underlying core error is kept intact

use serde::{Deserialize, Serialize};

/// Operation execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Conflict | `AlreadyExists` | Write-once violation |
/// | Not Found | `NotFound`, `ReferenceNotFound` | Document or reference absent |
/// | Validation | `InvalidSelector`, `InvalidKey`, `InvalidInput` | Bad request |
/// | Dispatch | `UnknownOperation` | No handler registered under the name |
/// | System | `Serialization`, `Storage` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use docledger_executor::{Error, Executor};
///
/// match executor.invoke("queryCarrier", r#"{"carrierNumber":"6322"}"#) {
///     Ok(bytes) => { /* handle success */ }
///     Err(Error::NotFound { key }) => {
///         println!("'{}' not found", key);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Conflict ====================
    /// Document already exists
    #[error("document already exists: {key}")]
    AlreadyExists { key: String },

    // ==================== Not Found ====================
    /// Document not found
    #[error("document not found: {key}")]
    NotFound { key: String },

    /// A referenced document does not exist
    #[error("referenced {doc_type} does not exist: {identity}")]
    ReferenceNotFound { doc_type: String, identity: String },

    // ==================== Validation Errors ====================
    /// Selector without a usable docType
    #[error("invalid selector: {reason}")]
    InvalidSelector { reason: String },

    /// Doc type or identity rejected by the key codec
    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },

    /// Malformed arguments
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    // ==================== Dispatch Errors ====================
    /// No handler is registered under this operation name
    #[error("unknown operation: {name}")]
    UnknownOperation { name: String },

    // ==================== System Errors ====================
    /// Serialization error
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Store failure
    #[error("storage error: {reason}")]
    Storage { reason: String },
}

impl Error {
    /// Stable machine-readable name of the variant
    pub fn code(&self) -> &'static str {
        match self {
            Error::AlreadyExists { .. } => "AlreadyExists",
            Error::NotFound { .. } => "NotFound",
            Error::ReferenceNotFound { .. } => "ReferenceNotFound",
            Error::InvalidSelector { .. } => "InvalidSelector",
            Error::InvalidKey { .. } => "InvalidKey",
            Error::InvalidInput { .. } => "InvalidInput",
            Error::UnknownOperation { .. } => "UnknownOperation",
            Error::Serialization { .. } => "Serialization",
            Error::Storage { .. } => "Storage",
        }
    }
}

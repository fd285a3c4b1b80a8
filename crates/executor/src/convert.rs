//! Error conversion from the document layer.
//!
//! This module maps `docledger_core::Error` onto the executor's [`Error`],
//! keeping every detail the caller might match on.

use crate::Error;
use docledger_core::Error as CoreError;

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AlreadyExists { key } => Error::AlreadyExists { key },
            CoreError::NotFound { key } => Error::NotFound { key },
            CoreError::ReferenceNotFound { doc_type, identity } => {
                Error::ReferenceNotFound { doc_type, identity }
            }
            CoreError::InvalidSelector { reason } => Error::InvalidSelector { reason },
            CoreError::InvalidKey(key_err) => Error::InvalidKey {
                reason: key_err.to_string(),
            },
            CoreError::InvalidInput { reason } => Error::InvalidInput { reason },
            CoreError::Serialization(reason) => Error::Serialization { reason },
            CoreError::Storage(reason) => Error::Storage { reason },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Convert a document-layer result into an executor result.
pub fn convert_result<T>(result: docledger_core::Result<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}

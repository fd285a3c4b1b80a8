//! Key codec for docledger
//!
//! Every document is stored under `<docType><identity>` with no separator.
//! Prefixing keys with the document type turns "all documents of type T"
//! into a contiguous lexicographic range of the ordered store.
//!
//! ## Range bounds
//!
//! Two bound strategies exist:
//! - [`RangeMode::Heuristic`]: `[docType + "0", docType + "z")`. Identities
//!   whose first character sorts before `'0'`, or at/after `'z'`, fall
//!   outside the range even though point lookups still find them.
//! - [`RangeMode::Prefix`]: `[docType, successor(docType))`, the true prefix
//!   range. Every identity is included.
//!
//! ## Validation
//!
//! - Document types must be non-empty ASCII alphanumeric
//! - Identities must be non-empty and must not contain NUL bytes
//! - Encoded keys must not exceed [`MAX_KEY_BYTES`]

use std::fmt;
use thiserror::Error;

/// Maximum encoded key length in bytes
pub const MAX_KEY_BYTES: usize = 1024;

/// Suffix appended to the doc type for the heuristic range start
pub const RANGE_START_SUFFIX: char = '0';

/// Suffix appended to the doc type for the heuristic range end (exclusive)
pub const RANGE_END_SUFFIX: char = 'z';

/// How the key codec brackets "all documents of type T"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeMode {
    /// `[docType0, docTypez)`: the ledger's historical bounds
    #[default]
    Heuristic,
    /// `[docType, successor(docType))`: every key with the type prefix
    Prefix,
}

impl RangeMode {
    /// Parse a mode name as written in configuration
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "heuristic" => Some(RangeMode::Heuristic),
            "prefix" => Some(RangeMode::Prefix),
            _ => None,
        }
    }

    /// Configuration name of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeMode::Heuristic => "heuristic",
            RangeMode::Prefix => "prefix",
        }
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open key interval `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyRange {
    /// Inclusive lower bound
    pub start: String,
    /// Exclusive upper bound
    pub end: String,
}

impl KeyRange {
    /// Whether `key` lies inside the interval
    pub fn contains(&self, key: &str) -> bool {
        key >= self.start.as_str() && key < self.end.as_str()
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Validate a document type name
pub fn validate_doc_type(doc_type: &str) -> Result<(), KeyError> {
    if doc_type.is_empty() {
        return Err(KeyError::EmptyDocType);
    }

    if !doc_type.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(KeyError::InvalidDocType {
            doc_type: doc_type.to_string(),
        });
    }

    Ok(())
}

/// Validate a document identity
pub fn validate_identity(identity: &str) -> Result<(), KeyError> {
    if identity.is_empty() {
        return Err(KeyError::EmptyIdentity);
    }

    if identity.contains('\x00') {
        return Err(KeyError::IdentityContainsNul);
    }

    Ok(())
}

/// Build the composite key `<docType><identity>`
///
/// # Examples
///
/// ```
/// use docledger_core::key::encode_key;
///
/// assert_eq!(encode_key("policy", "2211").unwrap(), "policy2211");
/// assert!(encode_key("", "2211").is_err());
/// assert!(encode_key("policy", "").is_err());
/// ```
pub fn encode_key(doc_type: &str, identity: &str) -> Result<String, KeyError> {
    validate_doc_type(doc_type)?;
    validate_identity(identity)?;

    let len = doc_type.len() + identity.len();
    if len > MAX_KEY_BYTES {
        return Err(KeyError::TooLong {
            actual: len,
            max: MAX_KEY_BYTES,
        });
    }

    let mut key = String::with_capacity(len);
    key.push_str(doc_type);
    key.push_str(identity);
    Ok(key)
}

/// Strip the doc type prefix from a composite key
///
/// Returns `None` if `key` was not built from `doc_type`, or carries an
/// empty identity.
pub fn decode_key<'a>(doc_type: &str, key: &'a str) -> Option<&'a str> {
    key.strip_prefix(doc_type).filter(|id| !id.is_empty())
}

/// Heuristic bounds `[docType0, docTypez)` for all documents of a type
///
/// # Examples
///
/// ```
/// use docledger_core::key::range_bounds;
///
/// let range = range_bounds("carrier").unwrap();
/// assert_eq!(range.start, "carrier0");
/// assert_eq!(range.end, "carrierz");
/// ```
pub fn range_bounds(doc_type: &str) -> Result<KeyRange, KeyError> {
    validate_doc_type(doc_type)?;

    let mut start = String::with_capacity(doc_type.len() + 1);
    start.push_str(doc_type);
    start.push(RANGE_START_SUFFIX);

    let mut end = String::with_capacity(doc_type.len() + 1);
    end.push_str(doc_type);
    end.push(RANGE_END_SUFFIX);

    Ok(KeyRange { start, end })
}

/// True prefix bounds `[docType, successor(docType))`
///
/// The successor increments the last byte of the doc type. Doc types are
/// ASCII alphanumeric, so the incremented byte is always a valid ASCII char.
pub fn prefix_bounds(doc_type: &str) -> Result<KeyRange, KeyError> {
    validate_doc_type(doc_type)?;

    let mut end = doc_type.as_bytes().to_vec();
    if let Some(last) = end.last_mut() {
        *last += 1;
    }
    let end = String::from_utf8(end).map_err(|_| KeyError::InvalidDocType {
        doc_type: doc_type.to_string(),
    })?;

    Ok(KeyRange {
        start: doc_type.to_string(),
        end,
    })
}

/// Bounds for a doc type under the given mode
pub fn bounds_for(doc_type: &str, mode: RangeMode) -> Result<KeyRange, KeyError> {
    match mode {
        RangeMode::Heuristic => range_bounds(doc_type),
        RangeMode::Prefix => prefix_bounds(doc_type),
    }
}

/// Key codec errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Doc type is empty
    #[error("doc type cannot be empty")]
    EmptyDocType,

    /// Doc type contains characters other than ASCII letters and digits
    #[error("doc type must be ASCII alphanumeric: {doc_type:?}")]
    InvalidDocType {
        /// The rejected doc type
        doc_type: String,
    },

    /// Identity is empty
    #[error("identity cannot be empty")]
    EmptyIdentity,

    /// Identity contains NUL byte (\0)
    #[error("identity cannot contain NUL bytes")]
    IdentityContainsNul,

    /// Encoded key exceeds maximum length
    #[error("key too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Actual key length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl KeyError {
    /// Short reason code for error envelopes
    pub fn reason_code(&self) -> &'static str {
        match self {
            KeyError::EmptyDocType => "empty_doc_type",
            KeyError::InvalidDocType { .. } => "invalid_doc_type",
            KeyError::EmptyIdentity => "empty_identity",
            KeyError::IdentityContainsNul => "contains_nul",
            KeyError::TooLong { .. } => "key_too_long",
        }
    }
}

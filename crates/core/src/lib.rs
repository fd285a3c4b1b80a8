//! Core types and traits for docledger
//!
//! This crate defines the foundational types used throughout the system:
//! - Key codec: `<docType><identity>` keys and per-type range bounds
//! - Document: JSON object documents with a `docType` discriminator
//! - Record/Entry: tolerant scan results and `{Key, Record}` list items
//! - Error: error type hierarchy
//! - Traits: the ordered store abstraction (OrderedStore, RangeScan)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod error;
pub mod key;
pub mod traits;

pub use document::{Document, Entry, Record, DOC_TYPE_FIELD};
pub use error::{Error, Result};
pub use key::{
    bounds_for, decode_key, encode_key, prefix_bounds, range_bounds, KeyError, KeyRange,
    RangeMode, MAX_KEY_BYTES,
};
pub use traits::{ConditionalPut, OrderedStore, RangeScan, RawEntry};

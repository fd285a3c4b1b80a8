//! docledger - document-style data layer over an ordered key-value ledger
//!
//! Documents of several types share one ordered store that only offers get,
//! put, and range scans. Keys are `<docType><identity>`, so every document of
//! a type sits in one contiguous key range, and "all documents of type T
//! whose fields equal ..." becomes a range scan plus an in-memory filter.
//!
//! # Quick Start
//!
//! ```ignore
//! use docledger::{Executor, Ledger};
//! use std::sync::Arc;
//!
//! let executor = Executor::new(Arc::new(Ledger::ephemeral()));
//!
//! executor.invoke("createCarrier", r#"{"carrierNumber":"6322"}"#)?;
//! let carriers = executor.invoke("queryAllCarriers", "{}")?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which dispatches a named
//! operation with raw JSON arguments to its handler. The [`Ledger`] composes
//! the write-once entity store, the selector query engine, and the
//! reference validator over any [`OrderedStore`].

// Re-export the public API from docledger-executor
pub use docledger_executor::*;

// Key layout and document types
pub use docledger_core::{
    bounds_for, decode_key, encode_key, Document, Entry, KeyRange, OrderedStore, RangeMode,
    Record,
};

// In-memory store
pub use docledger_storage::UnifiedStore;

//! Storage layer for docledger
//!
//! This crate provides an in-process binding of the ordered store
//! abstraction defined in `docledger-core`:
//! - UnifiedStore: BTreeMap-based storage with RwLock
//! - Lazy cursor-based range scans with explicit close
//! - Atomic `put_if_absent` for write-once creation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod unified;

pub use unified::UnifiedStore;

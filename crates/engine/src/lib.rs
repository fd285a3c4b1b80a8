//! Document engine for docledger
//!
//! This crate composes the key codec and an ordered store into a document
//! layer:
//! - EntityStore: write-once create, existence check, point lookup
//! - QueryEngine: range scan by doc type plus selector filtering
//! - ReferenceValidator: existence checks for foreign references
//! - Ledger: the three above bound to one store and one config
//! - LedgerConfig: `docledger.toml` settings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod entity_store;
pub mod ledger;
pub mod query;
pub mod references;

pub use config::{LedgerConfig, CONFIG_FILE_NAME};
pub use entity_store::EntityStore;
pub use ledger::Ledger;
pub use query::{QueryEngine, Selector};
pub use references::{Reference, ReferenceValidator};

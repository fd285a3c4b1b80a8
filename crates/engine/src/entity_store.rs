//! EntityStore: write-once document storage over an ordered store
//!
//! ## Design
//!
//! EntityStore is a stateless facade over the store. It holds no in-memory
//! state beyond an `Arc<dyn OrderedStore>` reference, and every read goes to
//! the store.
//!
//! ## Write-once
//!
//! `create` never overwrites. When the store offers `put_if_absent` and
//! conditional creates are enabled, the existence check and the write are a
//! single atomic store call. Otherwise `create` checks and then writes, and
//! two concurrent creates of the same key can both succeed at the store
//! level (single-writer assumption).
//!
//! ## Absent values
//!
//! The ledger reports a missing key as an empty value. An empty stored value
//! is therefore treated exactly like a missing key.

use std::sync::Arc;

use tracing::{debug, info, warn};

use docledger_core::{decode_key, Document, Error, OrderedStore, Result};

/// Write-once document store
#[derive(Clone)]
pub struct EntityStore {
    store: Arc<dyn OrderedStore>,
    conditional_create: bool,
}

impl EntityStore {
    /// Create a new EntityStore
    pub fn new(store: Arc<dyn OrderedStore>, conditional_create: bool) -> Self {
        Self {
            store,
            conditional_create,
        }
    }

    /// Whether a non-empty value is stored under `key`
    pub fn exists(&self, key: &str) -> Result<bool> {
        Ok(self
            .store
            .get(key)?
            .map_or(false, |value| !value.is_empty()))
    }

    /// Store `document` under `key` with `docType` set to `doc_type`
    ///
    /// Returns the document as stored.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if `key` already holds a document
    /// - `InvalidInput` if `key` was not built from `doc_type`
    pub fn create(&self, key: &str, doc_type: &str, mut document: Document) -> Result<Document> {
        if decode_key(doc_type, key).is_none() {
            return Err(Error::invalid_input(format!(
                "key '{}' does not belong to doc type '{}'",
                key, doc_type
            )));
        }

        document.set_doc_type(doc_type);
        let bytes = document.to_bytes()?;

        let written = match self.store.conditional().filter(|_| self.conditional_create) {
            Some(conditional) => conditional.put_if_absent(key, bytes)?,
            None => {
                if self.exists(key)? {
                    false
                } else {
                    self.store.put(key, bytes)?;
                    true
                }
            }
        };

        if !written {
            warn!(target: "docledger::entity", key, "create rejected: document already exists");
            return Err(Error::AlreadyExists {
                key: key.to_string(),
            });
        }

        info!(target: "docledger::entity", key, doc_type, "document created");
        Ok(document)
    }

    /// Point lookup
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing (or an empty value) is stored under `key`
    /// - `Serialization` if the stored value is not a JSON object
    pub fn get_by_key(&self, key: &str) -> Result<Document> {
        debug!(target: "docledger::entity", key, "get_by_key");
        match self.store.get(key)? {
            Some(bytes) if !bytes.is_empty() => Document::from_bytes(&bytes),
            _ => Err(Error::NotFound {
                key: key.to_string(),
            }),
        }
    }
}

//! Referential validation
//!
//! Before a document that points at other documents is written, every
//! referenced document must exist. Checks run in the order given and stop at
//! the first missing reference.
//!
//! The checks and the dependent write are separate store calls, so a
//! reference could in principle disappear in between. Documents are never
//! deleted by this layer, which makes that window harmless here.

use tracing::debug;

use docledger_core::{encode_key, Error, Result};

use crate::entity_store::EntityStore;

/// A foreign reference: the doc type and identity of the target document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Doc type of the referenced document
    pub doc_type: String,
    /// Identity of the referenced document
    pub identity: String,
}

impl Reference {
    /// Create a reference
    pub fn new(doc_type: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
            identity: identity.into(),
        }
    }
}

/// Existence checks for foreign references
#[derive(Clone)]
pub struct ReferenceValidator {
    entities: EntityStore,
}

impl ReferenceValidator {
    /// Create a validator reading through `entities`
    pub fn new(entities: EntityStore) -> Self {
        Self { entities }
    }

    /// Fail unless a `doc_type` document with `identity` exists
    ///
    /// # Errors
    ///
    /// - `ReferenceNotFound` if the document is absent
    /// - `InvalidKey` if the reference cannot be encoded as a key
    pub fn require_exists(&self, doc_type: &str, identity: &str) -> Result<()> {
        let key = encode_key(doc_type, identity)?;
        debug!(target: "docledger::references", key = %key, "checking reference");
        if self.entities.exists(&key)? {
            Ok(())
        } else {
            Err(Error::reference_not_found(doc_type, identity))
        }
    }

    /// Check every reference in order
    pub fn require_all(&self, references: &[Reference]) -> Result<()> {
        references
            .iter()
            .try_for_each(|r| self.require_exists(&r.doc_type, &r.identity))
    }
}

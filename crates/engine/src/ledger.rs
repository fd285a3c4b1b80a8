//! Ledger: the document layer bound to one ordered store
//!
//! A `Ledger` wires the entity store, the query engine, and the reference
//! validator to a single `OrderedStore` under one `LedgerConfig`, and offers
//! the composite operations the entity handlers are built from.

use std::sync::Arc;

use tracing::info;

use docledger_core::{encode_key, Document, Entry, OrderedStore, RangeMode, Result};
use docledger_storage::UnifiedStore;

use crate::config::LedgerConfig;
use crate::entity_store::EntityStore;
use crate::query::{QueryEngine, Selector};
use crate::references::{Reference, ReferenceValidator};

/// Document layer over an ordered store
///
/// `Ledger` is `Send + Sync`; share it behind an `Arc`.
///
/// # Example
///
/// ```ignore
/// let ledger = Ledger::ephemeral();
/// ledger.create_document("carrier", "6322", doc, &[])?;
/// let all = ledger.list_documents("carrier")?;
/// ```
pub struct Ledger {
    store: Arc<dyn OrderedStore>,
    config: LedgerConfig,
    entities: EntityStore,
    queries: QueryEngine,
    references: ReferenceValidator,
}

impl Ledger {
    /// Bind the document layer to `store`
    ///
    /// # Errors
    ///
    /// Returns an error if the config names an unknown range mode.
    pub fn open(store: Arc<dyn OrderedStore>, config: LedgerConfig) -> Result<Self> {
        let mode = config.range_mode()?;

        info!(
            target: "docledger::ledger",
            range_bounds = %mode,
            conditional_create = config.conditional_create,
            conditional_available = store.conditional().is_some(),
            "ledger opened"
        );

        Ok(Self::assemble(store, config, mode))
    }

    /// Ledger over a fresh in-memory store with default config
    pub fn ephemeral() -> Self {
        Self::assemble(
            Arc::new(UnifiedStore::new()),
            LedgerConfig::default(),
            RangeMode::default(),
        )
    }

    fn assemble(store: Arc<dyn OrderedStore>, config: LedgerConfig, mode: RangeMode) -> Self {
        let entities = EntityStore::new(Arc::clone(&store), config.conditional_create);
        let queries = QueryEngine::new(Arc::clone(&store), mode);
        let references = ReferenceValidator::new(entities.clone());
        Self {
            store,
            config,
            entities,
            queries,
            references,
        }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn OrderedStore> {
        &self.store
    }

    /// Active configuration
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Write-once document storage
    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    /// Selector query engine
    pub fn queries(&self) -> &QueryEngine {
        &self.queries
    }

    /// Foreign reference checks
    pub fn references(&self) -> &ReferenceValidator {
        &self.references
    }

    /// Validate `references`, then store `document` as `<doc_type><identity>`
    ///
    /// Nothing is written unless every reference exists and the key is free.
    pub fn create_document(
        &self,
        doc_type: &str,
        identity: &str,
        document: Document,
        references: &[Reference],
    ) -> Result<Document> {
        let key = encode_key(doc_type, identity)?;
        self.references.require_all(references)?;
        self.entities.create(&key, doc_type, document)
    }

    /// Point lookup by doc type and identity
    pub fn get_document(&self, doc_type: &str, identity: &str) -> Result<Document> {
        let key = encode_key(doc_type, identity)?;
        self.entities.get_by_key(&key)
    }

    /// Every document of `doc_type` in key order
    pub fn list_documents(&self, doc_type: &str) -> Result<Vec<Entry>> {
        self.queries.query_by_type(doc_type, None)
    }

    /// Execute a selector
    pub fn find(&self, selector: &Selector) -> Result<Vec<Entry>> {
        self.queries.query(selector)
    }
}

//! Selector query engine
//!
//! The store has no secondary indexes, so a selector query is answered with
//! one range scan over the selector's doc type and an in-memory predicate:
//!
//! 1. Bounds come from the key codec (heuristic or prefix, per config)
//! 2. The scan is consumed lazily in ascending key order
//! 3. Each value is decoded tolerantly (see [`Record`])
//! 4. Every non-`docType` selector field must be present and equal
//! 5. The scan is closed and the materialized result returned
//!
//! Zero matches is an empty result, never `NotFound`.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use docledger_core::{
    bounds_for, Document, Entry, Error, KeyRange, OrderedStore, RangeMode, RangeScan, Record, Result,
    DOC_TYPE_FIELD,
};

/// Field equality selector
///
/// A selector is a JSON object of field -> required value that must name a
/// `docType`. The `docType` picks the key range; the remaining fields filter
/// the decoded documents conjunctively.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selector {
    fields: Map<String, Value>,
}

impl Selector {
    /// Selector matching every document of `doc_type`
    pub fn for_type(doc_type: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(
            DOC_TYPE_FIELD.to_string(),
            Value::String(doc_type.to_string()),
        );
        Self { fields }
    }

    /// Wrap a selector object as given by the caller
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Add a required field value
    pub fn with_field(mut self, field: impl Into<String>, value: Value) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    /// Parse a `{"selector": {...}}` query string
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the text is not a JSON object
    /// - `InvalidSelector` if there is no `selector` object
    pub fn parse(query: &str) -> Result<Self> {
        let root = Document::from_json_str(query)?;
        match root.get("selector") {
            Some(Value::Object(fields)) => Ok(Self::from_map(fields.clone())),
            Some(_) => Err(Error::invalid_selector("\"selector\" must be a JSON object")),
            None => Err(Error::invalid_selector(format!(
                "query has no \"selector\": {}",
                query
            ))),
        }
    }

    /// The selector's doc type
    ///
    /// # Errors
    ///
    /// Returns `InvalidSelector` if `docType` is missing or not a string.
    pub fn doc_type(&self) -> Result<&str> {
        match self.fields.get(DOC_TYPE_FIELD) {
            Some(Value::String(doc_type)) => Ok(doc_type.as_str()),
            Some(_) => Err(Error::invalid_selector("docType must be a string")),
            None => Err(Error::invalid_selector(
                "cannot query without a docType element",
            )),
        }
    }

    /// Filter fields, `docType` excluded
    pub fn filters(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter().filter(|(k, _)| k.as_str() != DOC_TYPE_FIELD)
    }

    /// Whether the selector filters on anything beyond `docType`
    pub fn has_filters(&self) -> bool {
        self.filters().next().is_some()
    }

    /// Conjunctive match
    ///
    /// A bare doc type selector matches every record, opaque ones included.
    /// Opaque records never match a field filter.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.has_filters() {
            return true;
        }
        match record {
            Record::Document(doc) => self
                .filters()
                .all(|(field, required)| doc.get(field) == Some(required)),
            Record::Opaque(_) => false,
        }
    }
}

/// Range-scan + filter query engine
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn OrderedStore>,
    mode: RangeMode,
}

impl QueryEngine {
    /// Create a new engine scanning with the given bounds strategy
    pub fn new(store: Arc<dyn OrderedStore>, mode: RangeMode) -> Self {
        Self { store, mode }
    }

    /// Range bound strategy in use
    pub fn range_mode(&self) -> RangeMode {
        self.mode
    }

    /// All documents of `doc_type`, optionally filtered by field equality
    ///
    /// A `docType` entry inside `filter` is ignored; the range already
    /// implies it.
    pub fn query_by_type(
        &self,
        doc_type: &str,
        filter: Option<&Map<String, Value>>,
    ) -> Result<Vec<Entry>> {
        let mut selector = Selector::for_type(doc_type);
        if let Some(filter) = filter {
            for (field, value) in filter {
                if field != DOC_TYPE_FIELD {
                    selector = selector.with_field(field.clone(), value.clone());
                }
            }
        }
        self.query(&selector)
    }

    /// Execute a selector
    ///
    /// # Errors
    ///
    /// - `InvalidSelector` if the selector has no usable doc type
    /// - store errors from opening, stepping, or closing the scan
    pub fn query(&self, selector: &Selector) -> Result<Vec<Entry>> {
        let doc_type = selector.doc_type()?;
        let range = bounds_for(doc_type, self.mode)
            .map_err(|e| Error::invalid_selector(format!("no key range for docType: {}", e)))?;

        debug!(target: "docledger::query", doc_type, range = %range, mode = %self.mode, "query");

        let mut scan = self.store.range_scan(&range.start, &range.end)?;
        let collected = collect_matches(scan.as_mut(), &range, selector);
        let closed = scan.close();

        let entries = collected?;
        closed?;

        debug!(target: "docledger::query", doc_type, matches = entries.len(), "query complete");
        Ok(entries)
    }
}

fn collect_matches<S>(
    scan: &mut S,
    range: &KeyRange,
    selector: &Selector,
) -> Result<Vec<Entry>>
where
    S: RangeScan + ?Sized,
{
    let mut entries = Vec::new();
    for item in scan {
        let (key, raw) = item?;
        // Stores must honour the bounds; a stray key belongs to another type
        if !range.contains(&key) {
            warn!(
                target: "docledger::query",
                key = %key,
                range = %range,
                "store yielded key outside scan range, skipping"
            );
            continue;
        }
        // Empty value = absent key
        if raw.is_empty() {
            continue;
        }

        let record = Record::decode(&raw);
        if record.is_opaque() {
            warn!(target: "docledger::query", key = %key, "stored value is not a JSON object, passing through");
        }

        if selector.matches(&record) {
            entries.push(Entry::new(key, record));
        }
    }
    Ok(entries)
}

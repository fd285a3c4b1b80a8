//! UnifiedStore: in-memory ordered store backed by a BTreeMap
//!
//! This module implements the OrderedStore trait using:
//! - `BTreeMap<String, Vec<u8>>` for byte-ordered key storage
//! - `parking_lot::RwLock` for thread-safe access
//! - `AtomicU64` counters for writes and open scans
//!
//! # Design Notes
//!
//! - **No version history**: each key stores only its latest value
//! - **No deletes**: documents are write-once in this layer
//! - **Lazy scans**: a range scan holds a cursor, not a cloned map; each
//!   `next()` takes the read lock for one step, so writes are never blocked
//!   for the lifetime of a scan

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use docledger_core::{ConditionalPut, OrderedStore, RangeScan, RawEntry, Result};

/// Unified storage backend using BTreeMap with RwLock
///
/// Keys are compared as byte strings (`String` ordering), which is the
/// ordering the key codec's range bounds assume.
#[derive(Debug, Default)]
pub struct UnifiedStore {
    /// The main data store: ordered map from key to raw value
    data: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    /// Number of successful writes since creation
    writes: AtomicU64,
    /// Number of scans opened and not yet closed or dropped
    open_scans: Arc<AtomicU64>,
}

impl UnifiedStore {
    /// Create a new empty UnifiedStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether no key has been written yet
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// All stored keys in ascending order
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }

    /// Number of successful writes (`put` and accepted `put_if_absent`)
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of range scans currently open
    pub fn open_scans(&self) -> u64 {
        self.open_scans.load(Ordering::SeqCst)
    }
}

impl OrderedStore for UnifiedStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let data = self.data.read();
        Ok(data.get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        debug!(target: "docledger::store", key, bytes = value.len(), "put");
        let mut data = self.data.write();
        data.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn range_scan<'a>(&'a self, start: &str, end: &str) -> Result<Box<dyn RangeScan + 'a>> {
        debug!(target: "docledger::store", start, end, "range scan opened");
        self.open_scans.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(UnifiedRangeScan {
            data: Arc::clone(&self.data),
            cursor: Some(start.to_string()),
            started: false,
            end: end.to_string(),
            open_scans: Arc::clone(&self.open_scans),
            closed: false,
        }))
    }

    fn conditional(&self) -> Option<&dyn ConditionalPut> {
        Some(self)
    }
}

impl ConditionalPut for UnifiedStore {
    fn put_if_absent(&self, key: &str, value: Vec<u8>) -> Result<bool> {
        // Check and insert under one write lock
        let mut data = self.data.write();
        let occupied = data.get(key).map_or(false, |v| !v.is_empty());
        if occupied {
            debug!(target: "docledger::store", key, "put_if_absent rejected");
            return Ok(false);
        }
        debug!(target: "docledger::store", key, bytes = value.len(), "put_if_absent");
        data.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

/// Cursor over `[start, end)` of a [`UnifiedStore`]
struct UnifiedRangeScan {
    data: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    /// Start key before the first step, last yielded key afterwards
    cursor: Option<String>,
    started: bool,
    end: String,
    open_scans: Arc<AtomicU64>,
    closed: bool,
}

impl UnifiedRangeScan {
    fn release(&mut self) {
        if !self.closed {
            self.closed = true;
            self.cursor = None;
            self.open_scans.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

impl Iterator for UnifiedRangeScan {
    type Item = Result<RawEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        // BTreeMap::range panics on inverted bounds
        if cursor.as_str() >= self.end.as_str() {
            return None;
        }

        let lower = if self.started {
            Bound::Excluded(cursor.as_str())
        } else {
            Bound::Included(cursor.as_str())
        };
        let upper = Bound::Excluded(self.end.as_str());

        let data = self.data.read();
        let (key, value) = data.range::<str, _>((lower, upper)).next()?;
        let entry = (key.clone(), value.clone());
        drop(data);

        self.started = true;
        self.cursor = Some(entry.0.clone());
        Some(Ok(entry))
    }
}

impl RangeScan for UnifiedRangeScan {
    fn close(&mut self) -> Result<()> {
        self.release();
        Ok(())
    }
}

impl Drop for UnifiedRangeScan {
    fn drop(&mut self) {
        if !self.closed {
            warn!(target: "docledger::store", end = %self.end, "range scan dropped without close");
            self.release();
        }
    }
}

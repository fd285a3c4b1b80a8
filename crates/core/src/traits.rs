//! Store abstraction
//!
//! The document layer consumes an ordered key-value store through these
//! traits only. Any binding (an in-memory map, a ledger client, an embedded
//! engine) that can serve point reads, blind writes, and ascending range
//! scans can back it.

use crate::error::Result;

/// A raw `(key, value)` pair yielded by a range scan
pub type RawEntry = (String, Vec<u8>);

/// Lazy, forward-only, non-restartable scan over `[start, end)`
///
/// Entries are yielded in ascending byte order of their keys. A scan must be
/// closed once the caller is done with it; an error from `close` is a store
/// failure.
pub trait RangeScan: Iterator<Item = Result<RawEntry>> + Send {
    /// Release the scan. Further calls to `next` return `None`.
    fn close(&mut self) -> Result<()>;
}

/// Atomic write-if-absent
///
/// Stores that can offer it let the entity store make `create` atomic.
pub trait ConditionalPut: Send + Sync {
    /// Write `value` under `key` only if nothing is stored there yet
    ///
    /// Returns `true` if the write happened. An empty stored value counts as
    /// absent.
    fn put_if_absent(&self, key: &str, value: Vec<u8>) -> Result<bool>;
}

/// Ordered key-value store
///
/// Thread safety: implementations must be safe to call from multiple
/// threads (`Send + Sync`).
pub trait OrderedStore: Send + Sync {
    /// Get the value stored under `key`
    ///
    /// Returns `None` if the key was never written. Callers treat an empty
    /// value the same way.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value
    fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Open a scan over the half-open interval `[start, end)`
    fn range_scan<'a>(&'a self, start: &str, end: &str) -> Result<Box<dyn RangeScan + 'a>>;

    /// Conditional write support, if the store has it
    fn conditional(&self) -> Option<&dyn ConditionalPut> {
        None
    }
}

//! The Executor - single entry point to the document layer.
//!
//! The Executor is a stateless dispatcher that routes named operations to
//! their handlers and returns the handlers' JSON bytes.

use std::sync::Arc;

use tracing::{debug, warn};

use docledger_engine::Ledger;

use crate::registry::Registry;
use crate::{Error, Result};

/// The operation executor - single entry point to the document layer.
///
/// The Executor is **stateless**: it holds a reference to the ledger and a
/// fixed operation table but maintains no state of its own. All state lives
/// in the store.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use docledger_executor::Executor;
///
/// let executor = Executor::new(Arc::new(Ledger::ephemeral()));
///
/// executor.invoke("createCarrier", r#"{"carrierNumber":"6322"}"#)?;
/// let all = executor.invoke("queryAllCarriers", "{}")?;
/// ```
pub struct Executor {
    ledger: Arc<Ledger>,
    registry: Registry,
}

impl Executor {
    /// Create an executor with the standard operations.
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self::with_registry(ledger, Registry::standard())
    }

    /// Create an executor with a custom operation table.
    pub fn with_registry(ledger: Arc<Ledger>, registry: Registry) -> Self {
        debug!(
            target: "docledger::executor",
            operations = registry.len(),
            "executor ready"
        );
        Self { ledger, registry }
    }

    /// The ledger operations run against.
    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }

    /// Names of every operation, sorted.
    pub fn operations(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Execute one operation.
    ///
    /// Returns the UTF-8 JSON response, or an error whose message is fit to
    /// hand back to the caller.
    pub fn invoke(&self, operation: &str, args: &str) -> Result<Vec<u8>> {
        let handler = match self.registry.get(operation) {
            Some(handler) => handler,
            None => {
                warn!(target: "docledger::executor", operation, "unknown operation");
                return Err(Error::UnknownOperation {
                    name: operation.to_string(),
                });
            }
        };

        debug!(target: "docledger::executor", operation, args, "invoke");
        let result = handler(&self.ledger, args);
        match &result {
            Ok(bytes) => {
                debug!(target: "docledger::executor", operation, bytes = bytes.len(), "ok")
            }
            Err(e) => debug!(
                target: "docledger::executor",
                operation,
                code = e.code(),
                error = %e,
                "failed"
            ),
        }
        result
    }

    /// Execute several operations in order.
    ///
    /// Each operation runs independently; a failure does not stop later ones.
    pub fn invoke_many<'a, I>(&self, calls: I) -> Vec<Result<Vec<u8>>>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        calls
            .into_iter()
            .map(|(operation, args)| self.invoke(operation, args))
            .collect()
    }
}

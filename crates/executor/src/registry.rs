//! Operation registry.
//!
//! Maps operation names to handler functions. The standard registry is
//! built once when an [`Executor`](crate::Executor) is constructed; lookups
//! afterwards are plain map reads.

use std::collections::BTreeMap;

use docledger_engine::Ledger;

use crate::handlers::{carrier, insured, policy, selector};
use crate::Result;

/// A named operation: raw JSON arguments in, UTF-8 JSON out
pub type Handler = fn(&Ledger, &str) -> Result<Vec<u8>>;

/// Name -> handler table
#[derive(Clone, Default)]
pub struct Registry {
    handlers: BTreeMap<&'static str, Handler>,
}

impl Registry {
    /// A registry with no operations
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every built-in operation
    pub fn standard() -> Self {
        let mut registry = Self::empty();

        // Insured parties
        registry.register("createInsured", insured::create_insured);
        registry.register("queryInsured", insured::query_insured);
        registry.register("queryAllInsureds", insured::query_all_insureds);

        // Carriers
        registry.register("createCarrier", carrier::create_carrier);
        registry.register("queryCarrier", carrier::query_carrier);
        registry.register("queryAllCarriers", carrier::query_all_carriers);

        // Policies
        registry.register("createPolicy", policy::create_policy);
        registry.register("queryPolicy", policy::query_policy);
        registry.register("queryAllPolicies", policy::query_all_policies);

        // Any doc type
        registry.register("queryBySelector", selector::query_by_selector);

        registry
    }

    /// Register `handler` under `name`, returning the handler it replaced
    pub fn register(&mut self, name: &'static str, handler: Handler) -> Option<Handler> {
        self.handlers.insert(name, handler)
    }

    /// Look up a handler
    pub fn get(&self, name: &str) -> Option<Handler> {
        self.handlers.get(name).copied()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }

    /// Number of registered operations
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no operations are registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("operations", &self.names())
            .finish()
    }
}

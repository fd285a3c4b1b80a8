//! Common test utilities for executor tests

use std::sync::Arc;

use docledger::{Executor, Ledger, LedgerConfig, RangeMode, UnifiedStore};
use serde_json::Value;

/// Create an executor over a fresh in-memory store
pub fn create_executor() -> Executor {
    Executor::new(Arc::new(Ledger::ephemeral()))
}

/// Create an executor with the given range mode, sharing `store` with the caller
pub fn create_executor_with(mode: RangeMode) -> (Arc<UnifiedStore>, Executor) {
    let store = Arc::new(UnifiedStore::new());
    let ledger = Ledger::open(store.clone(), LedgerConfig::with_range_mode(mode)).unwrap();
    (store, Executor::new(Arc::new(ledger)))
}

/// Invoke and parse the JSON response
pub fn invoke_json(executor: &Executor, operation: &str, args: &str) -> Value {
    let bytes = executor
        .invoke(operation, args)
        .unwrap_or_else(|e| panic!("{} failed: {}", operation, e));
    serde_json::from_slice(&bytes).unwrap()
}

/// Keys of a `[{Key, Record}]` response
#[allow(dead_code)]
pub fn keys_of(list: &Value) -> Vec<String> {
    match list {
        Value::Array(entries) => entries
            .iter()
            .map(|e| e["Key"].as_str().unwrap().to_string())
            .collect(),
        _ => panic!("Expected a JSON array, got {}", list),
    }
}

/// Seed the carrier, insured party, and policy used across tests
#[allow(dead_code)]
pub fn seed_policy(executor: &Executor) {
    invoke_json(
        executor,
        "createCarrier",
        r#"{"carrierNumber":"6322","carrierName":"InsurTech","address":"1 Main St"}"#,
    );
    invoke_json(
        executor,
        "createInsured",
        r#"{"insuredUserName":"edge","email":"edge@abc.com","company":"ABC"}"#,
    );
    invoke_json(
        executor,
        "createPolicy",
        r#"{"policyId":"2211","carrierNumber":"6322","insuredUserName":"edge","policyPayout":100,"rainfallAmount":40}"#,
    );
}

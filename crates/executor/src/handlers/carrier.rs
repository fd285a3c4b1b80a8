//! Carrier handlers.

use docledger_engine::Ledger;

use super::EntityKind;
use crate::Result;

/// Carriers are keyed by carrier number and reference nothing.
pub const CARRIER: EntityKind = EntityKind {
    doc_type: "carrier",
    identity_field: "carrierNumber",
    references: &[],
};

/// Handle createCarrier.
pub fn create_carrier(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    super::create(&CARRIER, ledger, args)
}

/// Handle queryCarrier.
pub fn query_carrier(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    super::query(&CARRIER, ledger, args)
}

/// Handle queryAllCarriers.
pub fn query_all_carriers(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    super::query_all(&CARRIER, ledger, args)
}

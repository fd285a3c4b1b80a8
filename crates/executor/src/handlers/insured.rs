//! Insured party handlers.
//!
//! Arguments for `createInsured`:
//!
//! ```text
//! {"insuredUserName": "edge", "email": "edge@abc.com", "company": "ABC", "registeredDate": "2018-10-22T11:52:20.182Z"}
//! ```

use docledger_engine::Ledger;

use super::EntityKind;
use crate::Result;

/// Insured parties are keyed by user name and reference nothing.
pub const INSURED: EntityKind = EntityKind {
    doc_type: "insured",
    identity_field: "insuredUserName",
    references: &[],
};

/// Handle createInsured.
pub fn create_insured(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    super::create(&INSURED, ledger, args)
}

/// Handle queryInsured.
pub fn query_insured(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    super::query(&INSURED, ledger, args)
}

/// Handle queryAllInsureds.
pub fn query_all_insureds(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    super::query_all(&INSURED, ledger, args)
}

//! Policy handlers.
//!
//! A policy names its carrier and insured party. Both must already exist:
//! the carrier is checked first, then the insured party, and only then is
//! the policy itself written.
//!
//! Arguments for `createPolicy`:
//!
//! ```text
//! {"policyId": "2211", "carrierNumber": "6322", "insuredUserName": "edge", "policyPayout": 100, "rainfallAmount": 40}
//! ```

use docledger_engine::Ledger;

use super::EntityKind;
use crate::Result;

/// Policies are keyed by policy id and reference a carrier and an insured party.
pub const POLICY: EntityKind = EntityKind {
    doc_type: "policy",
    identity_field: "policyId",
    references: &[("carrierNumber", "carrier"), ("insuredUserName", "insured")],
};

/// Handle createPolicy.
pub fn create_policy(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    super::create(&POLICY, ledger, args)
}

/// Handle queryPolicy.
pub fn query_policy(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    super::query(&POLICY, ledger, args)
}

/// Handle queryAllPolicies.
pub fn query_all_policies(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    super::query_all(&POLICY, ledger, args)
}

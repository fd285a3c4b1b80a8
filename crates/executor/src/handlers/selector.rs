//! Generic selector query.
//!
//! The arguments are a query string of the form
//! `{"selector": {"docType": "policy", "carrierNumber": "6322"}}`.

use docledger_engine::{Ledger, Selector};

use crate::convert::convert_result;
use crate::Result;

/// Handle queryBySelector.
pub fn query_by_selector(ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    let selector = convert_result(Selector::parse(args))?;
    let entries = convert_result(ledger.find(&selector))?;
    super::render(&entries)
}

//! Operation handlers organized by entity kind.
//!
//! | Module | Operations | docType |
//! |--------|------------|---------|
//! | `insured` | createInsured, queryInsured, queryAllInsureds | `insured` |
//! | `carrier` | createCarrier, queryCarrier, queryAllCarriers | `carrier` |
//! | `policy` | createPolicy, queryPolicy, queryAllPolicies | `policy` |
//! | `selector` | queryBySelector | any |
//!
//! Every handler has the signature `fn(&Ledger, &str) -> Result<Vec<u8>>`:
//! it receives the raw JSON arguments of one call and returns UTF-8 JSON.
//! The per-kind modules only describe their [`EntityKind`]; the shared
//! create/query/queryAll flow lives here.

pub mod carrier;
pub mod insured;
pub mod policy;
pub mod selector;

use serde::Serialize;
use serde_json::Value;

use docledger_core::Document;
use docledger_engine::{Ledger, Reference};

use crate::convert::convert_result;
use crate::{Error, Result};

/// Shape of one entity kind
#[derive(Debug, Clone, Copy)]
pub struct EntityKind {
    /// Value of the `docType` discriminator and the key prefix
    pub doc_type: &'static str,
    /// Argument field holding the identity
    pub identity_field: &'static str,
    /// `(argument field, referenced doc type)` pairs, checked in order
    pub references: &'static [(&'static str, &'static str)],
}

// =============================================================================
// Shared flows
// =============================================================================

/// Extract identity, validate references, then write-once store the arguments.
pub fn create(kind: &EntityKind, ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    let document = parse_document(args)?;
    let identity = identity_field(&document, kind.identity_field)?;

    let references = kind
        .references
        .iter()
        .map(|(field, doc_type)| {
            identity_field(&document, field).map(|identity| Reference::new(*doc_type, identity))
        })
        .collect::<Result<Vec<_>>>()?;

    let stored = convert_result(ledger.create_document(
        kind.doc_type,
        &identity,
        document,
        &references,
    ))?;
    render(&stored)
}

/// Point lookup by the identity field of the arguments.
pub fn query(kind: &EntityKind, ledger: &Ledger, args: &str) -> Result<Vec<u8>> {
    let document = parse_document(args)?;
    let identity = identity_field(&document, kind.identity_field)?;
    let stored = convert_result(ledger.get_document(kind.doc_type, &identity))?;
    render(&stored)
}

/// Every document of the kind. Arguments are ignored.
pub fn query_all(kind: &EntityKind, ledger: &Ledger, _args: &str) -> Result<Vec<u8>> {
    let entries = convert_result(ledger.list_documents(kind.doc_type))?;
    render(&entries)
}

// =============================================================================
// Argument helpers
// =============================================================================

/// Parse call arguments as a JSON object.
pub fn parse_document(args: &str) -> Result<Document> {
    convert_result(Document::from_json_str(args))
}

/// Read an identity-like field: strings as-is, integers in decimal.
pub fn identity_field(document: &Document, field: &str) -> Result<String> {
    match document.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        Some(other) => Err(Error::InvalidInput {
            reason: format!(
                "field '{}' must be a string or an integer, got {}",
                field, other
            ),
        }),
        None => Err(Error::InvalidInput {
            reason: format!("missing required field '{}'", field),
        }),
    }
}

/// Encode a response as UTF-8 JSON.
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

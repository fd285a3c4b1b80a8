//! # docledger executor
//!
//! Named-operation dispatch over the document layer.
//!
//! It provides:
//! - [`Executor`] - invoke an operation by name with raw JSON arguments
//! - [`Registry`] - the operation name -> handler table
//! - [`Error`] - the serializable error returned to callers
//!
//! ## Quick Start
//!
//! ```text
//! use docledger_executor::{Executor, Ledger};
//!
//! let executor = Executor::new(Arc::new(Ledger::ephemeral()));
//! executor.invoke("createCarrier", r#"{"carrierNumber":"6322"}"#)?;
//! executor.invoke("createInsured", r#"{"insuredUserName":"edge"}"#)?;
//! executor.invoke(
//!     "createPolicy",
//!     r#"{"policyId":"2211","carrierNumber":"6322","insuredUserName":"edge"}"#,
//! )?;
//! let policies = executor.invoke("queryAllPolicies", "{}")?;
//! ```
//!
//! ## Operations
//!
//! | Entity | Create | Point query | Scan |
//! |--------|--------|-------------|------|
//! | Insured party | `createInsured` | `queryInsured` | `queryAllInsureds` |
//! | Carrier | `createCarrier` | `queryCarrier` | `queryAllCarriers` |
//! | Policy | `createPolicy` | `queryPolicy` | `queryAllPolicies` |
//! | Any | | | `queryBySelector` |

#![warn(missing_docs)]

mod convert;
mod error;
mod executor;
pub mod handlers;
mod registry;

// =============================================================================
// Public API
// =============================================================================

pub use convert::convert_result;
pub use error::Error;
pub use executor::Executor;
pub use registry::{Handler, Registry};

// Re-export the document layer so users don't need docledger-engine directly
pub use docledger_engine::{Ledger, LedgerConfig, Selector, CONFIG_FILE_NAME};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;

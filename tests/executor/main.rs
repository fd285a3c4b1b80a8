//! Executor Layer Tests
//!
//! Tests for the docledger executor, which provides:
//! - Executor - stateless dispatch of named operations
//! - Registry - the operation name -> handler table
//! - Error - structured, serializable failures

mod common;

mod command_dispatch;
mod concurrency;
mod policy_lifecycle;
mod properties;

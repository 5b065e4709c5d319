//! # Feebank Reports
//!
//! Renders account outcomes for people and machines.
//!
//! Account operations return receipts; this crate decides how they look:
//! - [`TextExporter`] - status messages, one block per outcome
//! - [`JsonExporter`] - JSON array of outcomes
//! - [`summary`] - closing balance table for a set of accounts

pub mod exporters;
pub mod summary;

pub use exporters::{format_amount, JsonExporter, OutcomeExporter, TextExporter};
pub use summary::account_summary;

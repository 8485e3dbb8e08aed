//! Charge transactions: lifecycle engine, store, and statistics.
//!
//! This module implements the four-state charge-transaction workflow:
//! a charge is created `pending`, is approved, is posted (committing the
//! double-entry pair to the journal), or is rejected before posting;
//! a posted charge may be reversed exactly once. Transactions are never
//! physically deleted.
//!
//! # Modules
//!
//! - `types` - Charge domain types (ChargeTransaction, ChargeState)
//! - `error` - Charge-specific error types
//! - `transition` - Pure state transition logic
//! - `store` - Owner of identity, uniqueness, and query access
//! - `engine` - Lifecycle engine wiring store, directory, and journal
//! - `stats` - Read-side aggregate statistics

pub mod engine;
pub mod error;
pub mod stats;
pub mod store;
pub mod transition;
pub mod types;

#[cfg(test)]
mod stats_props;
#[cfg(test)]
mod transition_props;

pub use engine::ChargeEngine;
pub use error::ChargeError;
pub use stats::ChargeStats;
pub use store::{ChargeFilter, ChargeStore};
pub use transition::ChargeWorkflow;
pub use types::{
    Approval, ChargeState, ChargeStatus, ChargeTransaction, CreateChargeInput, MaterialSnapshot,
    Posting, Rejection, Reversal,
};

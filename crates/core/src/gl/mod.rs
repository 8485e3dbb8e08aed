//! G/L account pair resolution.
//!
//! Given an issuing department, a receiving department, and a charge
//! type, the resolver deterministically computes the debit and credit
//! accounts for the double-entry pair.

pub mod error;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod resolver_props;

pub use error::GlResolutionError;
pub use resolver::GlResolver;
pub use types::{ChargeType, GlPair};

//! G/L resolution domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::directory::GlAccount;

/// Classification of a chargeable-material movement.
///
/// The charge type selects which of the receiving department's cost
/// absorption accounts is debited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeType {
    /// Consumable issued to the receiving department (debits expense).
    ConsumableIssue,
    /// Cost charged back to the receiving department (debits chargeback).
    Chargeback,
    /// Interdepartmental transfer of consumables (debits consumable).
    Interdepartmental,
}

impl ChargeType {
    /// Returns the string representation of the charge type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConsumableIssue => "consumable_issue",
            Self::Chargeback => "chargeback",
            Self::Interdepartmental => "interdepartmental",
        }
    }

    /// Parses a charge type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "consumable_issue" => Some(Self::ConsumableIssue),
            "chargeback" => Some(Self::Chargeback),
            "interdepartmental" => Some(Self::Interdepartmental),
            _ => None,
        }
    }
}

impl fmt::Display for ChargeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved double-entry account pair, frozen onto the transaction at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlPair {
    /// The receiving department's cost absorption account.
    pub debit: GlAccount,
    /// The issuing department's inventory asset account.
    pub credit: GlAccount,
}

//! Directory domain types.

use chargeledger_shared::types::DepartmentCode;
use serde::{Deserialize, Serialize};

/// A department in the organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Department code (unique small positive integer).
    pub code: DepartmentCode,
    /// Full department name.
    pub name: String,
    /// Short display name.
    pub short_name: String,
    /// Display color (presentation only).
    pub color: Option<String>,
}

/// A G/L account reference: identifier plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlAccount {
    /// Account identifier (e.g., "5100-200").
    pub code: String,
    /// Human-readable account name.
    pub name: String,
}

/// The four G/L accounts a department uses for chargeable-material
/// movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentGlAccounts {
    /// The department these accounts belong to.
    pub department: DepartmentCode,
    /// Expense account, debited on consumable issues.
    pub expense: GlAccount,
    /// Inventory asset account, credited whenever material leaves.
    pub inventory: GlAccount,
    /// Chargeback account, debited on chargebacks.
    pub chargeback: GlAccount,
    /// Consumable account, debited on interdepartmental charges.
    pub consumable: GlAccount,
}

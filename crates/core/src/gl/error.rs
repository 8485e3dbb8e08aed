//! G/L resolution error types.

use chargeledger_shared::types::DepartmentCode;
use thiserror::Error;

/// Errors from resolving a debit/credit account pair.
#[derive(Debug, Error)]
pub enum GlResolutionError {
    /// The department has no configured G/L accounts. No transaction may
    /// be created until the directory configuration is fixed.
    #[error("G/L accounts are not configured for department {0}")]
    AccountsNotConfigured(DepartmentCode),

    /// Issuing and receiving department are the same.
    #[error("Cannot resolve a charge from department {0} to itself")]
    SameDepartment(DepartmentCode),
}

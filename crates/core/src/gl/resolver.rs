//! Deterministic debit/credit account pair resolution.

use chargeledger_shared::types::DepartmentCode;

use crate::directory::Directory;
use crate::gl::error::GlResolutionError;
use crate::gl::types::{ChargeType, GlPair};

/// Stateless resolver for debit/credit account pairs.
pub struct GlResolver;

impl GlResolver {
    /// Resolves the account pair for a charge.
    ///
    /// The debit side is always the receiving department's cost
    /// absorption account, selected by charge type:
    /// - `ConsumableIssue` → expense account
    /// - `Chargeback` → chargeback account
    /// - `Interdepartmental` → consumable account
    ///
    /// The credit side is always the issuing department's inventory
    /// asset account, regardless of charge type.
    ///
    /// Pure: no side effects, identical inputs give identical output.
    ///
    /// # Errors
    ///
    /// Returns `GlResolutionError::SameDepartment` when `from == to`, or
    /// `GlResolutionError::AccountsNotConfigured` when either department
    /// lacks configured accounts.
    pub fn resolve(
        directory: &Directory,
        from: DepartmentCode,
        to: DepartmentCode,
        charge_type: ChargeType,
    ) -> Result<GlPair, GlResolutionError> {
        if from == to {
            return Err(GlResolutionError::SameDepartment(from));
        }

        let issuing = directory
            .gl_accounts(from)
            .map_err(|_| GlResolutionError::AccountsNotConfigured(from))?;
        let receiving = directory
            .gl_accounts(to)
            .map_err(|_| GlResolutionError::AccountsNotConfigured(to))?;

        let debit = match charge_type {
            ChargeType::ConsumableIssue => receiving.expense.clone(),
            ChargeType::Chargeback => receiving.chargeback.clone(),
            ChargeType::Interdepartmental => receiving.consumable.clone(),
        };

        Ok(GlPair {
            debit,
            credit: issuing.inventory.clone(),
        })
    }
}

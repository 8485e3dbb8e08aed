//! Read-only directory built from configuration.

use std::collections::HashMap;

use chargeledger_shared::config::{DepartmentEntry, DirectoryConfig, GlAccountEntry};
use chargeledger_shared::types::DepartmentCode;

use crate::directory::error::DirectoryError;
use crate::directory::types::{Department, DepartmentGlAccounts, GlAccount};

/// The department and G/L account directory.
///
/// Built once from `DirectoryConfig` and injected wherever department
/// lookups are needed.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    departments: HashMap<DepartmentCode, Department>,
    accounts: HashMap<DepartmentCode, DepartmentGlAccounts>,
}

fn gl_account(entry: &GlAccountEntry) -> GlAccount {
    GlAccount {
        code: entry.account.clone(),
        name: entry.name.clone(),
    }
}

impl Directory {
    /// Builds a directory from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::DuplicateDepartment` if a code appears
    /// twice, or `DirectoryError::ZeroDepartmentCode` for a zero code.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        let mut directory = Self::default();
        for entry in &config.departments {
            directory.add_entry(entry)?;
        }
        Ok(directory)
    }

    fn add_entry(&mut self, entry: &DepartmentEntry) -> Result<(), DirectoryError> {
        if entry.code == 0 {
            return Err(DirectoryError::ZeroDepartmentCode);
        }

        let code = DepartmentCode(entry.code);
        if self.departments.contains_key(&code) {
            return Err(DirectoryError::DuplicateDepartment(code));
        }

        self.departments.insert(
            code,
            Department {
                code,
                name: entry.name.clone(),
                short_name: entry.short_name.clone(),
                color: entry.color.clone(),
            },
        );
        self.accounts.insert(
            code,
            DepartmentGlAccounts {
                department: code,
                expense: gl_account(&entry.gl_accounts.expense),
                inventory: gl_account(&entry.gl_accounts.inventory),
                chargeback: gl_account(&entry.gl_accounts.chargeback),
                consumable: gl_account(&entry.gl_accounts.consumable),
            },
        );
        Ok(())
    }

    /// Looks up a department by code.
    pub fn department(&self, code: DepartmentCode) -> Result<&Department, DirectoryError> {
        self.departments
            .get(&code)
            .ok_or(DirectoryError::UnknownDepartment(code))
    }

    /// Looks up a department's G/L accounts by code.
    pub fn gl_accounts(&self, code: DepartmentCode) -> Result<&DepartmentGlAccounts, DirectoryError> {
        self.accounts
            .get(&code)
            .ok_or(DirectoryError::UnknownDepartment(code))
    }

    /// Returns all configured department codes, sorted.
    #[must_use]
    pub fn codes(&self) -> Vec<DepartmentCode> {
        let mut codes: Vec<_> = self.departments.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Number of configured departments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    /// Returns true if no departments are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

//! Directory error types.

use chargeledger_shared::types::DepartmentCode;
use thiserror::Error;

/// Errors from directory construction and lookups.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No department is configured under this code.
    #[error("Department {0} is not configured")]
    UnknownDepartment(DepartmentCode),

    /// Two configuration entries carry the same department code.
    #[error("Department code {0} is configured more than once")]
    DuplicateDepartment(DepartmentCode),

    /// A department code of zero is not a valid small positive integer.
    #[error("Department code 0 is not allowed")]
    ZeroDepartmentCode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DirectoryError::UnknownDepartment(DepartmentCode(999));
        assert_eq!(err.to_string(), "Department 999 is not configured");

        let err = DirectoryError::DuplicateDepartment(DepartmentCode(100));
        assert_eq!(
            err.to_string(),
            "Department code 100 is configured more than once"
        );
    }
}

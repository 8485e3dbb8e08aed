//! Department and G/L account reference data.
//!
//! The directory is immutable reference data loaded once at process
//! start from configuration. There is no mutation API; unknown codes
//! are configuration errors, never silently defaulted.

pub mod error;
pub mod service;
pub mod types;

pub use error::DirectoryError;
pub use service::Directory;
pub use types::{Department, DepartmentGlAccounts, GlAccount};

//! Application configuration management.
//!
//! The department/G-L-account directory is versioned configuration data:
//! it is loaded once at process start and injected into the core, never
//! mutated at runtime.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Transaction numbering configuration.
    #[serde(default)]
    pub numbering: NumberingConfig,
    /// Department and G/L account directory.
    pub directory: DirectoryConfig,
}

/// Transaction numbering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NumberingConfig {
    /// Prefix for generated transaction numbers (e.g., "CHG").
    #[serde(default = "default_number_prefix")]
    pub prefix: String,
}

fn default_number_prefix() -> String {
    "CHG".to_string()
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            prefix: default_number_prefix(),
        }
    }
}

/// Department and G/L account directory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// All configured departments.
    pub departments: Vec<DepartmentEntry>,
}

/// A single department entry in the directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentEntry {
    /// Department code (small positive integer, unique).
    pub code: u16,
    /// Full department name.
    pub name: String,
    /// Short display name.
    pub short_name: String,
    /// Display color (presentation only, carried through untouched).
    #[serde(default)]
    pub color: Option<String>,
    /// The four G/L accounts used for chargeable-material movement.
    pub gl_accounts: GlAccountsEntry,
}

/// The four G/L accounts configured for a department.
#[derive(Debug, Clone, Deserialize)]
pub struct GlAccountsEntry {
    /// Expense account (debited on consumable issues).
    pub expense: GlAccountEntry,
    /// Inventory asset account (credited on every issue).
    pub inventory: GlAccountEntry,
    /// Chargeback account (debited on chargebacks).
    pub chargeback: GlAccountEntry,
    /// Consumable account (debited on interdepartmental charges).
    pub consumable: GlAccountEntry,
}

/// A single G/L account reference: identifier plus display name.
#[derive(Debug, Clone, Deserialize)]
pub struct GlAccountEntry {
    /// Account identifier (e.g., "5100-200").
    pub account: String,
    /// Human-readable account name.
    pub name: String,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CHARGELEDGER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

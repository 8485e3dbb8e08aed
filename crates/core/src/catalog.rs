//! Material catalog seam.
//!
//! The ledger core never manages inventory; it only reads a point-in-time
//! snapshot of a material at issue time. The external inventory system is
//! responsible for on-hand decrements.

use chargeledger_shared::types::MaterialId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A material as seen by the ledger at issue time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Unique identifier in the catalog.
    pub id: MaterialId,
    /// Material number (human-readable catalog key).
    pub number: String,
    /// Display name.
    pub name: String,
    /// Stock-keeping unit.
    pub sku: String,
    /// Catalog classification (free-form).
    pub classification: String,
    /// On-hand quantity at the time of the snapshot.
    pub on_hand: u32,
    /// Unit price at the time of the snapshot.
    pub unit_price: Decimal,
}

/// Errors from catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The requested material is not in the catalog.
    #[error("Material {0} not found")]
    MaterialNotFound(MaterialId),
}

/// Read-only access to the material catalog.
pub trait MaterialCatalog: Send + Sync {
    /// Returns a snapshot of the material, or an error if unknown.
    fn material(&self, id: &MaterialId) -> Result<Material, CatalogError>;
}

/// Fixed in-memory catalog for tests and seeded environments.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    materials: HashMap<MaterialId, Material>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material to the catalog, replacing any previous entry.
    pub fn insert(&mut self, material: Material) {
        self.materials.insert(material.id, material);
    }
}

impl FromIterator<Material> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
        Self {
            materials: iter.into_iter().map(|m| (m.id, m)).collect(),
        }
    }
}

impl MaterialCatalog for StaticCatalog {
    fn material(&self, id: &MaterialId) -> Result<Material, CatalogError> {
        self.materials
            .get(id)
            .cloned()
            .ok_or(CatalogError::MaterialNotFound(*id))
    }
}

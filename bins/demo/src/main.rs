//! Seeded walkthrough of the charge transaction lifecycle.
//!
//! Loads the department directory from `config/`, seeds a small material
//! catalog, and drives a handful of charges through create, approve,
//! post, reject, and reverse, logging the ledger state along the way.

use std::sync::Arc;

use anyhow::Context;
use chargeledger_core::catalog::{Material, StaticCatalog};
use chargeledger_core::charge::types::CreateChargeInput;
use chargeledger_core::charge::{ChargeEngine, ChargeFilter, ChargeStore};
use chargeledger_core::clock::SystemClock;
use chargeledger_core::directory::Directory;
use chargeledger_core::gl::ChargeType;
use chargeledger_core::journal::InMemoryJournal;
use chargeledger_shared::AppConfig;
use chargeledger_shared::types::{DepartmentCode, MaterialId, PageRequest};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn seed_catalog() -> (StaticCatalog, MaterialId, MaterialId) {
    let discs = MaterialId::new();
    let gloves = MaterialId::new();
    let catalog = [
        Material {
            id: discs,
            number: "M-40021".to_string(),
            name: "Cutting disc 125mm".to_string(),
            sku: "DSC-125".to_string(),
            classification: "Abrasives".to_string(),
            on_hand: 200,
            unit_price: dec!(5.00),
        },
        Material {
            id: gloves,
            number: "M-40022".to_string(),
            name: "Nitrile gloves, box of 100".to_string(),
            sku: "GLV-NTR-100".to_string(),
            classification: "PPE".to_string(),
            on_hand: 48,
            unit_price: dec!(12.50),
        },
    ]
    .into_iter()
    .collect();
    (catalog, discs, gloves)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    let directory =
        Directory::from_config(&config.directory).context("invalid department directory")?;
    tracing::info!(departments = directory.len(), "directory loaded");

    let (catalog, discs, gloves) = seed_catalog();
    let engine = ChargeEngine::new(
        directory,
        ChargeStore::new(config.numbering.prefix),
        Arc::new(catalog),
        Arc::new(InMemoryJournal::new()),
        Arc::new(SystemClock),
    );

    let maintenance = DepartmentCode(100);
    let production = DepartmentCode(200);

    // A consumable issue that runs the full happy path.
    let issued = engine.create(CreateChargeInput {
        from_department: maintenance,
        to_department: production,
        material_id: discs,
        quantity: 10,
        charge_type: ChargeType::ConsumableIssue,
        issued_by: "storekeeper".to_string(),
        work_order_id: Some("WO-2026-0451".to_string()),
        cost_center: None,
        notes: Some("line 3 grinder".to_string()),
    })?;
    engine.approve(issued.id, "supervisor")?;
    let posted = engine.post(issued.id, "clerk")?;
    tracing::info!(
        number = %posted.transaction_number,
        debit = %posted.gl.debit.code,
        credit = %posted.gl.credit.code,
        total = %posted.total_cost,
        "charge posted to the journal"
    );

    // A charge rejected before posting.
    let rejected = engine.create(CreateChargeInput {
        from_department: maintenance,
        to_department: production,
        material_id: gloves,
        quantity: 2,
        charge_type: ChargeType::Chargeback,
        issued_by: "storekeeper".to_string(),
        work_order_id: None,
        cost_center: Some("CC-PROD-01".to_string()),
        notes: None,
    })?;
    engine.reject(rejected.id, Some("wrong work order".to_string()))?;

    // A posted charge reversed with an equal-and-opposite entry.
    let mistaken = engine.create(CreateChargeInput {
        from_department: maintenance,
        to_department: production,
        material_id: gloves,
        quantity: 4,
        charge_type: ChargeType::ConsumableIssue,
        issued_by: "storekeeper".to_string(),
        work_order_id: None,
        cost_center: None,
        notes: None,
    })?;
    engine.approve(mistaken.id, "supervisor")?;
    engine.post(mistaken.id, "clerk")?;
    engine.reverse(mistaken.id, "auditor", "duplicate issue")?;

    let page = engine.list(&ChargeFilter::default(), &PageRequest::default());
    for tx in &page.data {
        tracing::info!(
            number = %tx.transaction_number,
            status = %tx.status(),
            material = %tx.material.name,
            total = %tx.total_cost,
            "ledger entry"
        );
    }

    let stats = engine.stats();
    tracing::info!(
        pending = stats.pending_count,
        posted = stats.posted_count,
        total_posted = %stats.total_posted,
        monthly_posted = %stats.monthly_posted,
        "aggregate statistics"
    );

    Ok(())
}

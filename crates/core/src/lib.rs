//! Core business logic for the consumable charge transaction ledger.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and the lifecycle
//! state machine live here.
//!
//! # Modules
//!
//! - `directory` - Department and G/L account reference data
//! - `gl` - Debit/credit account pair resolution
//! - `charge` - Charge transactions: store, lifecycle engine, statistics
//! - `journal` - External journal sink seam and in-memory implementation
//! - `catalog` - Material catalog seam (read-only inventory snapshots)
//! - `clock` - Injectable time source for deterministic testing

pub mod catalog;
pub mod charge;
pub mod clock;
pub mod directory;
pub mod gl;
pub mod journal;

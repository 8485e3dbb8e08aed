//! Charge lifecycle engine.
//!
//! The engine wires the directory, material catalog, charge store,
//! journal sink, and clock together. Every transition runs inside
//! `ChargeStore::update`, which holds the entry's shard write lock, so
//! two concurrent transitions against the same transaction serialize
//! and the loser fails with `InvalidTransition` against the state the
//! winner left behind.

use std::sync::Arc;

use chargeledger_shared::types::{ChargeId, DepartmentCode};
use chargeledger_shared::types::{PageRequest, PageResponse};
#[cfg(test)]
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::catalog::MaterialCatalog;
use crate::charge::error::ChargeError;
use crate::charge::stats::ChargeStats;
use crate::charge::store::{ChargeFilter, ChargeStore};
use crate::charge::transition::ChargeWorkflow;
use crate::charge::types::{
    ChargeState, ChargeStatus, ChargeTransaction, CreateChargeInput, MaterialSnapshot,
};
use crate::clock::Clock;
use crate::directory::Directory;
use crate::gl::GlResolver;
use crate::journal::{JournalLine, JournalSink};

/// Orchestrates charge transactions through their lifecycle.
pub struct ChargeEngine {
    directory: Directory,
    store: ChargeStore,
    catalog: Arc<dyn MaterialCatalog>,
    journal: Arc<dyn JournalSink>,
    clock: Arc<dyn Clock>,
}

impl ChargeEngine {
    /// Creates an engine over the given collaborators.
    #[must_use]
    pub fn new(
        directory: Directory,
        store: ChargeStore,
        catalog: Arc<dyn MaterialCatalog>,
        journal: Arc<dyn JournalSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory,
            store,
            catalog,
            journal,
            clock,
        }
    }

    /// The department directory this engine resolves against.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Creates a new pending charge transaction.
    ///
    /// Validates departments and quantity, snapshots the material, and
    /// resolves the debit/credit pair once. The pair and the cost fields
    /// are frozen from here on.
    ///
    /// # Errors
    ///
    /// `SameDepartment`, `ZeroQuantity`, `Material`, `InsufficientOnHand`,
    /// `NegativeUnitCost`, or `Resolution` when validation fails.
    pub fn create(&self, input: CreateChargeInput) -> Result<ChargeTransaction, ChargeError> {
        if input.from_department == input.to_department {
            return Err(ChargeError::SameDepartment(input.from_department));
        }
        if input.quantity == 0 {
            return Err(ChargeError::ZeroQuantity);
        }

        let material = self.catalog.material(&input.material_id)?;
        if input.quantity > material.on_hand {
            return Err(ChargeError::InsufficientOnHand {
                requested: input.quantity,
                on_hand: material.on_hand,
            });
        }
        if material.unit_price < Decimal::ZERO {
            return Err(ChargeError::NegativeUnitCost);
        }

        let gl = GlResolver::resolve(
            &self.directory,
            input.from_department,
            input.to_department,
            input.charge_type,
        )?;

        let unit_cost = material.unit_price;
        let total_cost = unit_cost * Decimal::from(input.quantity);

        let tx = ChargeTransaction {
            id: ChargeId::new(),
            transaction_number: self.store.next_transaction_number(),
            from_department: input.from_department,
            to_department: input.to_department,
            material: MaterialSnapshot {
                material_id: material.id,
                number: material.number,
                name: material.name,
                sku: material.sku,
            },
            quantity: input.quantity,
            unit_cost,
            total_cost,
            charge_type: input.charge_type,
            gl,
            issued_by: input.issued_by,
            created_at: self.clock.now(),
            work_order_id: input.work_order_id,
            cost_center: input.cost_center,
            notes: input.notes,
            received_by: None,
            state: ChargeState::Pending,
        };

        self.store.insert(tx.clone())?;
        tracing::info!(
            charge_id = %tx.id,
            number = %tx.transaction_number,
            from = %tx.from_department,
            to = %tx.to_department,
            total = %tx.total_cost,
            "charge created"
        );
        Ok(tx)
    }

    /// Approves a pending charge.
    pub fn approve(
        &self,
        id: ChargeId,
        approved_by: &str,
    ) -> Result<ChargeTransaction, ChargeError> {
        let now = self.clock.now();
        let tx = self.store.update(id, |tx| {
            tx.state = ChargeWorkflow::approve(&tx.state, approved_by, now)?;
            Ok(tx.clone())
        })?;
        tracing::info!(charge_id = %id, approved_by, "charge approved");
        Ok(tx)
    }

    /// Rejects a pending charge. The reason is optional.
    pub fn reject(
        &self,
        id: ChargeId,
        reason: Option<String>,
    ) -> Result<ChargeTransaction, ChargeError> {
        let now = self.clock.now();
        let tx = self.store.update(id, |tx| {
            tx.state = ChargeWorkflow::reject(&tx.state, now, reason)?;
            Ok(tx.clone())
        })?;
        tracing::info!(charge_id = %id, "charge rejected");
        Ok(tx)
    }

    /// Posts an approved charge, committing the debit/credit pair to
    /// the journal.
    ///
    /// The journal write happens inside the transaction's lock, after
    /// the precondition check, so the journal entry and the status flip
    /// are observed together by any concurrent caller. The journal sink
    /// is idempotent per charge, so a retry after a crash between write
    /// and flip lands on the original entry.
    pub fn post(&self, id: ChargeId, posted_by: &str) -> Result<ChargeTransaction, ChargeError> {
        let now = self.clock.now();
        let tx = self.store.update(id, |tx| {
            // Fail the transition before touching the journal.
            if tx.status() != ChargeStatus::Approved {
                return Err(ChargeError::InvalidTransition {
                    from: tx.status(),
                    to: ChargeStatus::Posted,
                });
            }

            let lines = vec![
                JournalLine::debit(tx.gl.debit.code.clone(), tx.total_cost),
                JournalLine::credit(tx.gl.credit.code.clone(), tx.total_cost),
            ];
            let description = format!(
                "{} charge {} to department {}",
                tx.charge_type, tx.transaction_number, tx.to_department
            );
            let entry_id = self.journal.post_entry(tx.id, lines, description, now)?;

            tx.state = ChargeWorkflow::post(&tx.state, posted_by, now, entry_id)?;
            Ok(tx.clone())
        })?;
        tracing::info!(
            charge_id = %id,
            posted_by,
            journal_entry = ?tx.journal_entry_id(),
            "charge posted"
        );
        Ok(tx)
    }

    /// Reverses a posted charge with an equal-and-opposite journal entry.
    ///
    /// The original transaction is never edited or deleted; its status
    /// moves to `reversed` and the reversal entry references the
    /// original journal entry.
    ///
    /// # Errors
    ///
    /// `ReasonRequired` if the reason is blank, `InvalidTransition`
    /// unless the charge is `posted`.
    pub fn reverse(
        &self,
        id: ChargeId,
        reversed_by: &str,
        reason: &str,
    ) -> Result<ChargeTransaction, ChargeError> {
        let now = self.clock.now();
        let tx = self.store.update(id, |tx| {
            // Validates the reason and the posted precondition.
            let next = ChargeWorkflow::reverse(&tx.state, reversed_by, now, reason)?;

            let original = tx
                .journal_entry_id()
                .ok_or(ChargeError::InvalidTransition {
                    from: tx.status(),
                    to: ChargeStatus::Reversed,
                })?;

            // Equal and opposite: debit and credit sides swap.
            let lines = vec![
                JournalLine::debit(tx.gl.credit.code.clone(), tx.total_cost),
                JournalLine::credit(tx.gl.debit.code.clone(), tx.total_cost),
            ];
            let description = format!(
                "Reversal of {}. Reason: {}",
                tx.transaction_number,
                reason.trim()
            );
            self.journal
                .reverse_entry(tx.id, original, lines, description, now)?;

            tx.state = next;
            Ok(tx.clone())
        })?;
        tracing::info!(charge_id = %id, reversed_by, reason, "charge reversed");
        Ok(tx)
    }

    /// Records the receiving party's acknowledgement.
    ///
    /// Allowed in any non-terminal state; a rejected or reversed charge
    /// no longer accepts one.
    pub fn acknowledge(
        &self,
        id: ChargeId,
        received_by: &str,
    ) -> Result<ChargeTransaction, ChargeError> {
        self.store.update(id, |tx| {
            if tx.status().is_terminal() {
                return Err(ChargeError::InvalidTransition {
                    from: tx.status(),
                    to: tx.status(),
                });
            }
            tx.received_by = Some(received_by.to_string());
            Ok(tx.clone())
        })
    }

    /// Fetches a transaction by id.
    pub fn get(&self, id: ChargeId) -> Result<ChargeTransaction, ChargeError> {
        self.store.get(id)
    }

    /// Lists transactions matching the filter, most-recent-first.
    #[must_use]
    pub fn list(
        &self,
        filter: &ChargeFilter,
        page: &PageRequest,
    ) -> PageResponse<ChargeTransaction> {
        self.store.list(filter, page)
    }

    /// Computes aggregate statistics over the full transaction set.
    #[must_use]
    pub fn stats(&self) -> ChargeStats {
        ChargeStats::compute(&self.store.snapshot(), self.clock.now())
    }

    /// Returns true if the department code is configured.
    #[must_use]
    pub fn department_exists(&self, code: DepartmentCode) -> bool {
        self.directory.department(code).is_ok()
    }

    #[cfg(test)]
    pub(crate) fn clock_now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

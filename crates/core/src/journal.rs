//! External journal sink seam.
//!
//! Posting a charge commits its debit/credit pair to the journal; reversal
//! records an equal-and-opposite entry referencing the original. The sink
//! is idempotent per charge: re-posting the same charge returns the
//! original entry id instead of writing a second entry, so a crash between
//! "journal written" and "status updated" is safe to retry.

use chargeledger_shared::types::{ChargeId, JournalEntryId};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One side of a journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// G/L account identifier.
    pub account: String,
    /// Debit amount (zero on the credit line).
    pub debit: Decimal,
    /// Credit amount (zero on the debit line).
    pub credit: Decimal,
}

impl JournalLine {
    /// A debit line against the given account.
    #[must_use]
    pub fn debit(account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            debit: amount,
            credit: Decimal::ZERO,
        }
    }

    /// A credit line against the given account.
    #[must_use]
    pub fn credit(account: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            debit: Decimal::ZERO,
            credit: amount,
        }
    }
}

/// A recorded journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier of this entry.
    pub id: JournalEntryId,
    /// The charge transaction this entry was written for.
    pub charge_id: ChargeId,
    /// Entry description.
    pub description: String,
    /// The balanced debit/credit lines.
    pub lines: Vec<JournalLine>,
    /// For reversal entries, the entry being reversed.
    pub reverses: Option<JournalEntryId>,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// Errors from the journal sink.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Entry lines do not balance.
    #[error("Journal entry is unbalanced: debits ({debits}) != credits ({credits})")]
    Unbalanced {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },

    /// Entry has no lines.
    #[error("Journal entry must have at least one line")]
    NoLines,

    /// A reversal referenced an entry that was never recorded.
    #[error("Original journal entry {0} not found")]
    UnknownOriginal(JournalEntryId),
}

/// Validates that a set of journal lines balances.
fn validate_lines(lines: &[JournalLine]) -> Result<(), JournalError> {
    if lines.is_empty() {
        return Err(JournalError::NoLines);
    }

    let debits: Decimal = lines.iter().map(|l| l.debit).sum();
    let credits: Decimal = lines.iter().map(|l| l.credit).sum();
    if debits != credits {
        return Err(JournalError::Unbalanced { debits, credits });
    }

    Ok(())
}

/// Destination for committed debit/credit pairs.
pub trait JournalSink: Send + Sync {
    /// Records the posting entry for a charge.
    ///
    /// Must be idempotent per charge: posting the same charge twice
    /// returns the id of the first entry and records nothing new.
    fn post_entry(
        &self,
        charge_id: ChargeId,
        lines: Vec<JournalLine>,
        description: String,
        recorded_at: DateTime<Utc>,
    ) -> Result<JournalEntryId, JournalError>;

    /// Records the equal-and-opposite entry for a reversed charge,
    /// referencing the original posting entry.
    fn reverse_entry(
        &self,
        charge_id: ChargeId,
        original: JournalEntryId,
        lines: Vec<JournalLine>,
        description: String,
        recorded_at: DateTime<Utc>,
    ) -> Result<JournalEntryId, JournalError>;
}

/// In-memory journal used in tests and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryJournal {
    entries: DashMap<JournalEntryId, JournalEntry>,
    posted_by_charge: DashMap<ChargeId, JournalEntryId>,
}

impl InMemoryJournal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a recorded entry by id.
    #[must_use]
    pub fn entry(&self, id: &JournalEntryId) -> Option<JournalEntry> {
        self.entries.get(id).map(|e| e.clone())
    }

    /// Returns the posting entry recorded for a charge, if any.
    #[must_use]
    pub fn posting_for(&self, charge_id: &ChargeId) -> Option<JournalEntry> {
        self.posted_by_charge
            .get(charge_id)
            .and_then(|id| self.entry(&id))
    }

    /// Returns the reversal entry recorded for a charge, if any.
    #[must_use]
    pub fn reversal_for(&self, charge_id: &ChargeId) -> Option<JournalEntry> {
        self.entries
            .iter()
            .find(|e| e.charge_id == *charge_id && e.reverses.is_some())
            .map(|e| e.clone())
    }

    /// Number of recorded entries (postings plus reversals).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl JournalSink for InMemoryJournal {
    fn post_entry(
        &self,
        charge_id: ChargeId,
        lines: Vec<JournalLine>,
        description: String,
        recorded_at: DateTime<Utc>,
    ) -> Result<JournalEntryId, JournalError> {
        validate_lines(&lines)?;

        // Entry ids are reserved per charge; a retry lands on the same id.
        let id = *self
            .posted_by_charge
            .entry(charge_id)
            .or_insert_with(JournalEntryId::new);

        self.entries.entry(id).or_insert_with(|| {
            tracing::debug!(%charge_id, entry_id = %id, "journal posting recorded");
            JournalEntry {
                id,
                charge_id,
                description,
                lines,
                reverses: None,
                recorded_at,
            }
        });

        Ok(id)
    }

    fn reverse_entry(
        &self,
        charge_id: ChargeId,
        original: JournalEntryId,
        lines: Vec<JournalLine>,
        description: String,
        recorded_at: DateTime<Utc>,
    ) -> Result<JournalEntryId, JournalError> {
        validate_lines(&lines)?;

        if !self.entries.contains_key(&original) {
            return Err(JournalError::UnknownOriginal(original));
        }

        let id = JournalEntryId::new();
        self.entries.insert(
            id,
            JournalEntry {
                id,
                charge_id,
                description,
                lines,
                reverses: Some(original),
                recorded_at,
            },
        );
        tracing::debug!(%charge_id, entry_id = %id, original = %original, "journal reversal recorded");

        Ok(id)
    }
}

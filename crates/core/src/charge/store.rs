//! Charge transaction store.
//!
//! Sole owner of `id` and `transaction_number` uniqueness. Backed by a
//! sharded concurrent map: `update` runs its closure while holding the
//! shard write lock for the entry, which serializes transitions against
//! the same transaction without blocking unrelated ones. Reads clone the
//! entry under the shard lock, so they always observe a fully written
//! transaction.

use std::sync::atomic::{AtomicU64, Ordering};

use chargeledger_shared::types::{ChargeId, DepartmentCode};
use chargeledger_shared::types::{PageRequest, PageResponse};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::charge::error::ChargeError;
use crate::charge::types::{ChargeStatus, ChargeTransaction};

/// Filter for listing charge transactions.
#[derive(Debug, Clone, Default)]
pub struct ChargeFilter {
    /// Only transactions in this status.
    pub status: Option<ChargeStatus>,
    /// Only transactions where this department is on either side.
    pub department: Option<DepartmentCode>,
    /// Case-insensitive match against transaction number, material
    /// number/name/sku, or notes.
    pub search: Option<String>,
}

impl ChargeFilter {
    /// Returns true if the transaction passes this filter.
    #[must_use]
    pub fn matches(&self, tx: &ChargeTransaction) -> bool {
        if let Some(status) = self.status
            && tx.status() != status
        {
            return false;
        }

        if let Some(department) = self.department
            && tx.from_department != department
            && tx.to_department != department
        {
            return false;
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if needle.is_empty() {
                return true;
            }
            let haystacks = [
                tx.transaction_number.as_str(),
                tx.material.number.as_str(),
                tx.material.name.as_str(),
                tx.material.sku.as_str(),
                tx.notes.as_deref().unwrap_or(""),
            ];
            if !haystacks
                .iter()
                .any(|h| h.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        true
    }
}

/// In-process store for charge transactions.
pub struct ChargeStore {
    items: DashMap<ChargeId, ChargeTransaction>,
    numbers: DashMap<String, ChargeId>,
    sequence: AtomicU64,
    number_prefix: String,
}

impl ChargeStore {
    /// Creates an empty store generating numbers with the given prefix.
    #[must_use]
    pub fn new(number_prefix: impl Into<String>) -> Self {
        Self {
            items: DashMap::new(),
            numbers: DashMap::new(),
            sequence: AtomicU64::new(0),
            number_prefix: number_prefix.into(),
        }
    }

    /// Returns the next unique transaction number.
    ///
    /// Backed by a single atomic counter, so concurrent creates never
    /// receive the same number.
    #[must_use]
    pub fn next_transaction_number(&self) -> String {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{seq:06}", self.number_prefix)
    }

    /// Inserts a new transaction.
    ///
    /// # Errors
    ///
    /// `ChargeError::DuplicateNumber`/`DuplicateId` if either identifier
    /// is already taken. Prevented by construction; checked defensively.
    pub fn insert(&self, tx: ChargeTransaction) -> Result<(), ChargeError> {
        match self.numbers.entry(tx.transaction_number.clone()) {
            Entry::Occupied(_) => {
                return Err(ChargeError::DuplicateNumber(tx.transaction_number));
            }
            Entry::Vacant(slot) => {
                slot.insert(tx.id);
            }
        }

        match self.items.entry(tx.id) {
            Entry::Occupied(_) => {
                self.numbers.remove(&tx.transaction_number);
                Err(ChargeError::DuplicateId(tx.id))
            }
            Entry::Vacant(slot) => {
                slot.insert(tx);
                Ok(())
            }
        }
    }

    /// Returns a copy of the transaction.
    pub fn get(&self, id: ChargeId) -> Result<ChargeTransaction, ChargeError> {
        self.items
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(ChargeError::ChargeNotFound(id))
    }

    /// Runs a read-validate-write transition under the entry's shard
    /// write lock.
    ///
    /// Exactly one concurrent `update` against the same id runs at a
    /// time; the loser observes the state the winner left behind.
    pub fn update<T>(
        &self,
        id: ChargeId,
        f: impl FnOnce(&mut ChargeTransaction) -> Result<T, ChargeError>,
    ) -> Result<T, ChargeError> {
        let mut entry = self
            .items
            .get_mut(&id)
            .ok_or(ChargeError::ChargeNotFound(id))?;
        f(entry.value_mut())
    }

    /// Lists transactions matching the filter, most-recent-first by
    /// creation time.
    #[must_use]
    pub fn list(
        &self,
        filter: &ChargeFilter,
        page: &PageRequest,
    ) -> PageResponse<ChargeTransaction> {
        let mut matching: Vec<ChargeTransaction> = self
            .items
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.clone())
            .collect();

        // Creation-time descending; id (UUID v7, time-ordered) breaks ties.
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.into_inner().cmp(&a.id.into_inner()))
        });

        let total = matching.len() as u64;
        let data: Vec<ChargeTransaction> = matching
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();

        PageResponse::new(data, page.page, page.per_page, total)
    }

    /// Returns a consistent copy of every transaction, for read-side
    /// aggregation.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ChargeTransaction> {
        self.items.iter().map(|entry| entry.clone()).collect()
    }

    /// Number of stored transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

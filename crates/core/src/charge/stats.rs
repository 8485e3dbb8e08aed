//! Read-side aggregate statistics over the charge ledger.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::charge::types::{ChargeStatus, ChargeTransaction};

/// Aggregate counters computed over the full transaction set.
///
/// Only `posted` transactions contribute to the monetary totals. A
/// reversed transaction drops out of them entirely, because status
/// `reversed` is not `posted` even though the posting record survives
/// on its audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeStats {
    /// Transactions currently awaiting approval.
    pub pending_count: u64,
    /// Transactions currently in status posted.
    pub posted_count: u64,
    /// Sum of `total_cost` over posted transactions.
    pub total_posted: Decimal,
    /// Sum of `total_cost` over transactions posted in the current
    /// calendar month (by posting time, not creation time).
    pub monthly_posted: Decimal,
}

impl ChargeStats {
    /// Computes statistics over a snapshot of transactions.
    ///
    /// `now` supplies the calendar month for the monthly total.
    #[must_use]
    pub fn compute(transactions: &[ChargeTransaction], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            pending_count: 0,
            posted_count: 0,
            total_posted: Decimal::ZERO,
            monthly_posted: Decimal::ZERO,
        };

        for tx in transactions {
            match tx.status() {
                ChargeStatus::Pending => stats.pending_count += 1,
                ChargeStatus::Posted => {
                    stats.posted_count += 1;
                    stats.total_posted += tx.total_cost;

                    if let Some(posting) = tx.state.posting()
                        && posting.posted_at.year() == now.year()
                        && posting.posted_at.month() == now.month()
                    {
                        stats.monthly_posted += tx.total_cost;
                    }
                }
                ChargeStatus::Approved | ChargeStatus::Rejected | ChargeStatus::Reversed => {}
            }
        }

        stats
    }
}

//! Property-based tests for aggregate statistics.

use chargeledger_shared::types::{ChargeId, DepartmentCode, JournalEntryId, MaterialId};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::charge::stats::ChargeStats;
use crate::charge::types::{
    Approval, ChargeState, ChargeStatus, ChargeTransaction, MaterialSnapshot, Posting, Rejection,
    Reversal,
};
use crate::directory::GlAccount;
use crate::gl::{ChargeType, GlPair};

fn arb_instant() -> impl Strategy<Value = DateTime<Utc>> {
    // Any moment across a two-year window around the reference month.
    (2025i32..2027, 1u32..13, 1u32..29, 0u32..24).prop_map(|(year, month, day, hour)| {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
    })
}

fn arb_state() -> impl Strategy<Value = ChargeState> {
    let approval = |at| Approval {
        approved_by: "supervisor".to_string(),
        approved_at: at,
    };
    let posting = |at| Posting {
        posted_by: "clerk".to_string(),
        posted_at: at,
        journal_entry_id: JournalEntryId::new(),
    };
    prop_oneof![
        Just(ChargeState::Pending),
        arb_instant().prop_map(move |at| ChargeState::Approved(approval(at))),
        arb_instant().prop_map(move |at| ChargeState::Posted {
            approval: approval(at),
            posting: posting(at),
        }),
        arb_instant().prop_map(|at| ChargeState::Rejected(Rejection {
            rejected_at: at,
            reason: None,
        })),
        arb_instant().prop_map(move |at| ChargeState::Reversed {
            approval: approval(at),
            posting: posting(at),
            reversal: Reversal {
                reversed_by: "auditor".to_string(),
                reversed_at: at,
                reason: "duplicate issue".to_string(),
            },
        }),
    ]
}

fn arb_transaction() -> impl Strategy<Value = ChargeTransaction> {
    (arb_state(), 1u32..100, 1i64..10_000).prop_map(|(state, quantity, cents)| {
        let unit_cost = Decimal::new(cents, 2);
        ChargeTransaction {
            id: ChargeId::new(),
            transaction_number: "CHG-000001".to_string(),
            from_department: DepartmentCode(100),
            to_department: DepartmentCode(200),
            material: MaterialSnapshot {
                material_id: MaterialId::new(),
                number: "M-40021".to_string(),
                name: "Cutting disc 125mm".to_string(),
                sku: "DSC-125".to_string(),
            },
            quantity,
            unit_cost,
            total_cost: unit_cost * Decimal::from(quantity),
            charge_type: ChargeType::ConsumableIssue,
            gl: GlPair {
                debit: GlAccount {
                    code: "5100-200".to_string(),
                    name: "Production Expense".to_string(),
                },
                credit: GlAccount {
                    code: "1400-100".to_string(),
                    name: "Maintenance Inventory".to_string(),
                },
            },
            issued_by: "storekeeper".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap(),
            work_order_id: None,
            cost_center: None,
            notes: None,
            received_by: None,
            state,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Counts agree with a manual filter over the snapshot.
    #[test]
    fn prop_counts_match_snapshot(
        txs in proptest::collection::vec(arb_transaction(), 0..40),
        now in arb_instant()
    ) {
        let stats = ChargeStats::compute(&txs, now);

        let pending = txs.iter().filter(|t| t.status() == ChargeStatus::Pending).count() as u64;
        let posted = txs.iter().filter(|t| t.status() == ChargeStatus::Posted).count() as u64;
        prop_assert_eq!(stats.pending_count, pending);
        prop_assert_eq!(stats.posted_count, posted);
    }

    /// The posted total is exactly the sum over status-posted
    /// transactions, and the monthly total never exceeds it.
    #[test]
    fn prop_totals_sum_posted_only(
        txs in proptest::collection::vec(arb_transaction(), 0..40),
        now in arb_instant()
    ) {
        let stats = ChargeStats::compute(&txs, now);

        let expected: Decimal = txs
            .iter()
            .filter(|t| t.status() == ChargeStatus::Posted)
            .map(|t| t.total_cost)
            .sum();
        prop_assert_eq!(stats.total_posted, expected);
        prop_assert!(stats.monthly_posted <= stats.total_posted);
    }

    /// The monthly total covers exactly the postings in now's calendar
    /// year and month.
    #[test]
    fn prop_monthly_uses_posting_calendar_month(
        txs in proptest::collection::vec(arb_transaction(), 0..40),
        now in arb_instant()
    ) {
        let stats = ChargeStats::compute(&txs, now);

        let expected: Decimal = txs
            .iter()
            .filter(|t| t.status() == ChargeStatus::Posted)
            .filter_map(|t| t.state.posting().map(|p| (p.posted_at, t.total_cost)))
            .filter(|(at, _)| at.year() == now.year() && at.month() == now.month())
            .map(|(_, cost)| cost)
            .sum();
        prop_assert_eq!(stats.monthly_posted, expected);
    }
}

//! Property-based tests for the charge state machine.
//!
//! Drives the workflow from arbitrary states and checks that exactly
//! the four legal edges succeed, that every successful transition
//! agrees with `ChargeStatus::can_transition_to`, and that audit
//! records survive each hop.

use chargeledger_shared::types::JournalEntryId;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use crate::charge::transition::ChargeWorkflow;
use crate::charge::types::{Approval, ChargeState, ChargeStatus, Posting, Rejection, Reversal};

fn arb_actor() -> impl Strategy<Value = String> {
    "[a-z]{3,12}"
}

fn arb_state() -> impl Strategy<Value = ChargeState> {
    let at = Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap();
    prop_oneof![
        Just(ChargeState::Pending),
        arb_actor().prop_map(move |approved_by| ChargeState::Approved(Approval {
            approved_by,
            approved_at: at,
        })),
        (arb_actor(), arb_actor()).prop_map(move |(approved_by, posted_by)| {
            ChargeState::Posted {
                approval: Approval {
                    approved_by,
                    approved_at: at,
                },
                posting: Posting {
                    posted_by,
                    posted_at: at,
                    journal_entry_id: JournalEntryId::new(),
                },
            }
        }),
        proptest::option::of(arb_actor()).prop_map(move |reason| {
            ChargeState::Rejected(Rejection {
                rejected_at: at,
                reason,
            })
        }),
        (arb_actor(), arb_actor(), arb_actor()).prop_map(
            move |(approved_by, posted_by, reversed_by)| ChargeState::Reversed {
                approval: Approval {
                    approved_by,
                    approved_at: at,
                },
                posting: Posting {
                    posted_by,
                    posted_at: at,
                    journal_entry_id: JournalEntryId::new(),
                },
                reversal: Reversal {
                    reversed_by,
                    reversed_at: at,
                    reason: "duplicate issue".to_string(),
                },
            }
        ),
    ]
}

proptest! {
    #[test]
    fn prop_approve_only_from_pending(state in arb_state(), actor in arb_actor()) {
        let result = ChargeWorkflow::approve(&state, &actor, Utc::now());
        prop_assert_eq!(result.is_ok(), state.status() == ChargeStatus::Pending);
        if let Ok(next) = result {
            prop_assert_eq!(next.status(), ChargeStatus::Approved);
            prop_assert_eq!(&next.approval().unwrap().approved_by, &actor);
        }
    }

    #[test]
    fn prop_post_only_from_approved(state in arb_state(), actor in arb_actor()) {
        let entry_id = JournalEntryId::new();
        let result = ChargeWorkflow::post(&state, &actor, Utc::now(), entry_id);
        prop_assert_eq!(result.is_ok(), state.status() == ChargeStatus::Approved);
        if let Ok(next) = result {
            prop_assert_eq!(next.status(), ChargeStatus::Posted);
            prop_assert_eq!(next.posting().unwrap().journal_entry_id, entry_id);
            // Approval trail carried forward unchanged.
            prop_assert_eq!(next.approval(), state.approval());
        }
    }

    #[test]
    fn prop_reject_only_from_pending(state in arb_state(), reason in proptest::option::of(arb_actor())) {
        let result = ChargeWorkflow::reject(&state, Utc::now(), reason);
        prop_assert_eq!(result.is_ok(), state.status() == ChargeStatus::Pending);
    }

    #[test]
    fn prop_reverse_only_from_posted(state in arb_state(), actor in arb_actor()) {
        let result = ChargeWorkflow::reverse(&state, &actor, Utc::now(), "duplicate issue");
        prop_assert_eq!(result.is_ok(), state.status() == ChargeStatus::Posted);
        if let Ok(next) = result {
            prop_assert_eq!(next.status(), ChargeStatus::Reversed);
            prop_assert_eq!(next.posting(), state.posting());
        }
    }

    #[test]
    fn prop_blank_reason_never_reverses(state in arb_state(), blank in " {0,8}") {
        prop_assert!(ChargeWorkflow::reverse(&state, "auditor", Utc::now(), &blank).is_err());
    }

    #[test]
    fn prop_successful_transitions_match_edge_table(state in arb_state(), actor in arb_actor()) {
        let from = state.status();
        let now = Utc::now();

        let attempts: [(ChargeStatus, bool); 4] = [
            (ChargeStatus::Approved, ChargeWorkflow::approve(&state, &actor, now).is_ok()),
            (ChargeStatus::Posted, ChargeWorkflow::post(&state, &actor, now, JournalEntryId::new()).is_ok()),
            (ChargeStatus::Rejected, ChargeWorkflow::reject(&state, now, None).is_ok()),
            (ChargeStatus::Reversed, ChargeWorkflow::reverse(&state, &actor, now, "reason").is_ok()),
        ];

        for (to, succeeded) in attempts {
            prop_assert_eq!(succeeded, from.can_transition_to(to));
        }
    }

    #[test]
    fn prop_terminal_states_admit_nothing(state in arb_state(), actor in arb_actor()) {
        prop_assume!(state.status().is_terminal());
        prop_assert!(ChargeWorkflow::approve(&state, &actor, Utc::now()).is_err());
        prop_assert!(ChargeWorkflow::post(&state, &actor, Utc::now(), JournalEntryId::new()).is_err());
        prop_assert!(ChargeWorkflow::reject(&state, Utc::now(), None).is_err());
        prop_assert!(ChargeWorkflow::reverse(&state, &actor, Utc::now(), "reason").is_err());
    }
}

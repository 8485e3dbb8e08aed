//! Pure state transition logic for the charge lifecycle.
//!
//! All functions take the current state plus caller-supplied actor and
//! timestamp and return the next state, never touching a clock or store
//! themselves. The engine applies the returned state under the store's
//! per-transaction lock.

use chargeledger_shared::types::JournalEntryId;
use chrono::{DateTime, Utc};

use crate::charge::error::ChargeError;
use crate::charge::types::{Approval, ChargeState, ChargeStatus, Posting, Rejection, Reversal};

/// Stateless charge workflow transitions.
pub struct ChargeWorkflow;

impl ChargeWorkflow {
    /// Approve a pending charge.
    ///
    /// # Errors
    ///
    /// `ChargeError::InvalidTransition` unless the charge is `Pending`.
    pub fn approve(
        state: &ChargeState,
        approved_by: &str,
        approved_at: DateTime<Utc>,
    ) -> Result<ChargeState, ChargeError> {
        match state {
            ChargeState::Pending => Ok(ChargeState::Approved(Approval {
                approved_by: approved_by.to_string(),
                approved_at,
            })),
            _ => Err(ChargeError::InvalidTransition {
                from: state.status(),
                to: ChargeStatus::Approved,
            }),
        }
    }

    /// Post an approved charge, recording the journal entry reference.
    ///
    /// The caller commits the double-entry pair to the journal sink
    /// first and passes the resulting entry id in; this function only
    /// validates the precondition and freezes the posting record.
    ///
    /// # Errors
    ///
    /// `ChargeError::InvalidTransition` unless the charge is `Approved`.
    pub fn post(
        state: &ChargeState,
        posted_by: &str,
        posted_at: DateTime<Utc>,
        journal_entry_id: JournalEntryId,
    ) -> Result<ChargeState, ChargeError> {
        match state {
            ChargeState::Approved(approval) => Ok(ChargeState::Posted {
                approval: approval.clone(),
                posting: Posting {
                    posted_by: posted_by.to_string(),
                    posted_at,
                    journal_entry_id,
                },
            }),
            _ => Err(ChargeError::InvalidTransition {
                from: state.status(),
                to: ChargeStatus::Posted,
            }),
        }
    }

    /// Reject a pending charge.
    ///
    /// Rejecting an already-approved charge is disallowed; once posted
    /// the only way back is a reversal.
    ///
    /// # Errors
    ///
    /// `ChargeError::InvalidTransition` unless the charge is `Pending`.
    pub fn reject(
        state: &ChargeState,
        rejected_at: DateTime<Utc>,
        reason: Option<String>,
    ) -> Result<ChargeState, ChargeError> {
        match state {
            ChargeState::Pending => Ok(ChargeState::Rejected(Rejection {
                rejected_at,
                reason,
            })),
            _ => Err(ChargeError::InvalidTransition {
                from: state.status(),
                to: ChargeStatus::Rejected,
            }),
        }
    }

    /// Reverse a posted charge.
    ///
    /// The original posting record is preserved inside the `Reversed`
    /// state; nothing is deleted or edited in place.
    ///
    /// # Errors
    ///
    /// `ChargeError::ReasonRequired` if the reason is empty after
    /// trimming; `ChargeError::InvalidTransition` unless `Posted`.
    pub fn reverse(
        state: &ChargeState,
        reversed_by: &str,
        reversed_at: DateTime<Utc>,
        reason: &str,
    ) -> Result<ChargeState, ChargeError> {
        if reason.trim().is_empty() {
            return Err(ChargeError::ReasonRequired);
        }

        match state {
            ChargeState::Posted { approval, posting } => Ok(ChargeState::Reversed {
                approval: approval.clone(),
                posting: posting.clone(),
                reversal: Reversal {
                    reversed_by: reversed_by.to_string(),
                    reversed_at,
                    reason: reason.to_string(),
                },
            }),
            _ => Err(ChargeError::InvalidTransition {
                from: state.status(),
                to: ChargeStatus::Reversed,
            }),
        }
    }
}

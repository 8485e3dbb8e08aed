//! Charge transaction domain types.
//!
//! Audit fields live on per-state variant records rather than as
//! nullable fields on one flat struct, so a transaction can never carry
//! a `journal_entry_id` without having been posted, or a reversal
//! reason without having been reversed.

use chargeledger_shared::types::{ChargeId, DepartmentCode, JournalEntryId, MaterialId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gl::{ChargeType, GlPair};

/// Charge transaction status in the lifecycle workflow.
///
/// The valid transitions are:
/// - Pending → Approved (approve)
/// - Pending → Rejected (reject)
/// - Approved → Posted (post)
/// - Posted → Reversed (reverse)
///
/// `Rejected` and `Reversed` are terminal; `Posted` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    /// Created and awaiting approval.
    Pending,
    /// Approved and ready for posting.
    Approved,
    /// Committed to the journal (immutable except for reversal).
    Posted,
    /// Rejected before posting (terminal, no G/L effect).
    Rejected,
    /// Reversed after posting (terminal).
    Reversed,
}

impl ChargeStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Posted => "posted",
            Self::Rejected => "rejected",
            Self::Reversed => "reversed",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "posted" => Some(Self::Posted),
            "rejected" => Some(Self::Rejected),
            "reversed" => Some(Self::Reversed),
            _ => None,
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Reversed)
    }

    /// Check if a status transition is valid.
    #[must_use]
    pub fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Approved | Self::Rejected)
                | (Self::Approved, Self::Posted)
                | (Self::Posted, Self::Reversed)
        )
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audit record written by the approve transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    /// Actor who approved the charge.
    pub approved_by: String,
    /// When the charge was approved.
    pub approved_at: DateTime<Utc>,
}

/// Audit record written by the post transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Actor who posted the charge.
    pub posted_by: String,
    /// When the charge was posted.
    pub posted_at: DateTime<Utc>,
    /// The journal entry committed for this charge.
    pub journal_entry_id: JournalEntryId,
}

/// Audit record written by the reject transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// When the charge was rejected.
    pub rejected_at: DateTime<Utc>,
    /// Optional reviewer-supplied reason.
    pub reason: Option<String>,
}

/// Audit record written by the reverse transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reversal {
    /// Actor who reversed the charge.
    pub reversed_by: String,
    /// When the charge was reversed.
    pub reversed_at: DateTime<Utc>,
    /// Mandatory reason for the reversal.
    pub reason: String,
}

/// Lifecycle state with the audit data legal in that state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChargeState {
    /// Awaiting approval; no audit data yet.
    Pending,
    /// Approved.
    Approved(Approval),
    /// Posted; keeps the approval trail.
    Posted {
        /// The approval that preceded posting.
        approval: Approval,
        /// The posting record, including the journal entry id.
        posting: Posting,
    },
    /// Rejected (terminal).
    Rejected(Rejection),
    /// Reversed (terminal); keeps the full trail.
    Reversed {
        /// The approval that preceded posting.
        approval: Approval,
        /// The original posting record.
        posting: Posting,
        /// The reversal record.
        reversal: Reversal,
    },
}

impl ChargeState {
    /// Returns the status this state corresponds to.
    #[must_use]
    pub fn status(&self) -> ChargeStatus {
        match self {
            Self::Pending => ChargeStatus::Pending,
            Self::Approved(_) => ChargeStatus::Approved,
            Self::Posted { .. } => ChargeStatus::Posted,
            Self::Rejected(_) => ChargeStatus::Rejected,
            Self::Reversed { .. } => ChargeStatus::Reversed,
        }
    }

    /// Returns the approval record, if the charge has been approved.
    #[must_use]
    pub fn approval(&self) -> Option<&Approval> {
        match self {
            Self::Approved(approval)
            | Self::Posted { approval, .. }
            | Self::Reversed { approval, .. } => Some(approval),
            Self::Pending | Self::Rejected(_) => None,
        }
    }

    /// Returns the posting record, if the charge has been posted.
    #[must_use]
    pub fn posting(&self) -> Option<&Posting> {
        match self {
            Self::Posted { posting, .. } | Self::Reversed { posting, .. } => Some(posting),
            Self::Pending | Self::Approved(_) | Self::Rejected(_) => None,
        }
    }

    /// Returns the reversal record, if the charge has been reversed.
    #[must_use]
    pub fn reversal(&self) -> Option<&Reversal> {
        match self {
            Self::Reversed { reversal, .. } => Some(reversal),
            _ => None,
        }
    }
}

/// Immutable snapshot of the material at issue time.
///
/// The ledger must not change retroactively if the material catalog
/// changes later, so these fields are copied at creation and frozen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSnapshot {
    /// Catalog identifier.
    pub material_id: MaterialId,
    /// Material number at issue time.
    pub number: String,
    /// Material name at issue time.
    pub name: String,
    /// SKU at issue time.
    pub sku: String,
}

/// The central ledger entity: one chargeable-material movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeTransaction {
    /// Opaque unique identifier, assigned at creation.
    pub id: ChargeId,
    /// Human-readable unique transaction number.
    pub transaction_number: String,
    /// Issuing department.
    pub from_department: DepartmentCode,
    /// Receiving (charged) department. Never equals `from_department`.
    pub to_department: DepartmentCode,
    /// Frozen material snapshot.
    pub material: MaterialSnapshot,
    /// Issued quantity (always positive).
    pub quantity: u32,
    /// Unit cost snapshot at issue time.
    pub unit_cost: Decimal,
    /// `quantity * unit_cost`, computed once at creation.
    pub total_cost: Decimal,
    /// Charge type classification.
    pub charge_type: ChargeType,
    /// Debit/credit pair resolved once at creation and frozen.
    pub gl: GlPair,
    /// Actor who issued the charge.
    pub issued_by: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Optional work order linkage.
    pub work_order_id: Option<String>,
    /// Optional cost center linkage.
    pub cost_center: Option<String>,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// Optional acknowledgement by the receiving party.
    pub received_by: Option<String>,
    /// Lifecycle state and its audit trail.
    pub state: ChargeState,
}

impl ChargeTransaction {
    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> ChargeStatus {
        self.state.status()
    }

    /// The journal entry id, present only once posted.
    #[must_use]
    pub fn journal_entry_id(&self) -> Option<JournalEntryId> {
        self.state.posting().map(|p| p.journal_entry_id)
    }
}

/// Input for creating a new charge transaction.
#[derive(Debug, Clone)]
pub struct CreateChargeInput {
    /// Issuing department.
    pub from_department: DepartmentCode,
    /// Receiving department.
    pub to_department: DepartmentCode,
    /// Material to issue.
    pub material_id: MaterialId,
    /// Quantity to issue (must be positive and within on-hand).
    pub quantity: u32,
    /// Charge type classification.
    pub charge_type: ChargeType,
    /// Actor issuing the charge.
    pub issued_by: String,
    /// Optional work order linkage.
    pub work_order_id: Option<String>,
    /// Optional cost center linkage.
    pub cost_center: Option<String>,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

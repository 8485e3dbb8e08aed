//! Charge lifecycle error types.

use chargeledger_shared::AppError;
use chargeledger_shared::types::{ChargeId, DepartmentCode};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::charge::types::ChargeStatus;
use crate::gl::GlResolutionError;
use crate::journal::JournalError;

/// Errors that can occur during charge lifecycle operations.
#[derive(Debug, Error)]
pub enum ChargeError {
    /// No charge transaction exists under this id.
    #[error("Charge transaction {0} not found")]
    ChargeNotFound(ChargeId),

    /// Material lookup failed.
    #[error(transparent)]
    Material(#[from] CatalogError),

    /// Issuing and receiving department are the same.
    #[error("Issuing and receiving department are both {0}")]
    SameDepartment(DepartmentCode),

    /// Quantity must be positive.
    #[error("Quantity must be positive")]
    ZeroQuantity,

    /// Requested more than the on-hand snapshot.
    #[error("Requested quantity {requested} exceeds on-hand quantity {on_hand}")]
    InsufficientOnHand {
        /// Quantity requested by the caller.
        requested: u32,
        /// On-hand quantity reported by the inventory collaborator.
        on_hand: u32,
    },

    /// The catalog reported a negative unit price.
    #[error("Unit cost must not be negative")]
    NegativeUnitCost,

    /// Reversal reason is required but was empty.
    #[error("Reversal reason is required")]
    ReasonRequired,

    /// G/L account pair resolution failed.
    #[error(transparent)]
    Resolution(#[from] GlResolutionError),

    /// Attempted an operation outside its required precondition state.
    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ChargeStatus,
        /// The requested status.
        to: ChargeStatus,
    },

    /// A charge id collided in the store. Prevented by construction,
    /// checked defensively.
    #[error("Duplicate charge id {0}")]
    DuplicateId(ChargeId),

    /// A transaction number collided in the store.
    #[error("Duplicate transaction number {0}")]
    DuplicateNumber(String),

    /// The journal sink refused the entry.
    #[error(transparent)]
    Journal(#[from] JournalError),
}

impl ChargeError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::ChargeNotFound(_) | Self::Material(_) => 404,

            Self::SameDepartment(_)
            | Self::ZeroQuantity
            | Self::InsufficientOnHand { .. }
            | Self::NegativeUnitCost
            | Self::ReasonRequired => 400,

            Self::Resolution(_) | Self::InvalidTransition { .. } => 422,

            Self::DuplicateId(_) | Self::DuplicateNumber(_) => 409,

            Self::Journal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ChargeNotFound(_) => "CHARGE_NOT_FOUND",
            Self::Material(_) => "MATERIAL_NOT_FOUND",
            Self::SameDepartment(_) => "SAME_DEPARTMENT",
            Self::ZeroQuantity => "ZERO_QUANTITY",
            Self::InsufficientOnHand { .. } => "INSUFFICIENT_ON_HAND",
            Self::NegativeUnitCost => "NEGATIVE_UNIT_COST",
            Self::ReasonRequired => "REASON_REQUIRED",
            Self::Resolution(_) => "RESOLUTION_ERROR",
            Self::InvalidTransition { .. } => "INVALID_STATE_TRANSITION",
            Self::DuplicateId(_) | Self::DuplicateNumber(_) => "DUPLICATE_IDENTIFIER",
            Self::Journal(_) => "JOURNAL_ERROR",
        }
    }
}

impl From<ChargeError> for AppError {
    fn from(err: ChargeError) -> Self {
        let message = err.to_string();
        match err {
            ChargeError::ChargeNotFound(_) | ChargeError::Material(_) => Self::NotFound(message),

            ChargeError::SameDepartment(_)
            | ChargeError::ZeroQuantity
            | ChargeError::InsufficientOnHand { .. }
            | ChargeError::NegativeUnitCost
            | ChargeError::ReasonRequired => Self::Validation(message),

            ChargeError::Resolution(_) => Self::Resolution(message),

            ChargeError::InvalidTransition { .. } => Self::InvalidStateTransition(message),

            ChargeError::DuplicateId(_) | ChargeError::DuplicateNumber(_) => {
                Self::Conflict(message)
            }

            ChargeError::Journal(_) => Self::Internal(message),
        }
    }
}

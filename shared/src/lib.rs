use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A request to book a single item/quantity pair for a member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub membership_id: i32,
    pub item_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingEntity {
    Customer { membership_id: i32 },
    Item { item_id: i32 },
}

impl fmt::Display for MissingEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingEntity::Customer { membership_id } => write!(f, "customer {}", membership_id),
            MissingEntity::Item { item_id } => write!(f, "item {}", item_id),
        }
    }
}

/// Why a purchase was not recorded.
///
/// Every variant except `Storage` is a domain outcome: the request itself
/// cannot succeed and resubmitting it unchanged will fail the same way.
/// `Storage` covers infrastructure trouble where a fresh attempt may go
/// through.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum PurchaseError {
    #[error("quantity must be positive, got {quantity}")]
    InvalidQuantity { quantity: i32 },

    #[error("{entity} not found")]
    NotFound { entity: MissingEntity },

    #[error("insufficient stock: {available} available")]
    InsufficientStock { available: i64 },

    #[error("no unit price for item {item_id}")]
    PricingUnavailable { item_id: i32 },

    #[error("constraint violation: {detail}")]
    ConstraintViolation { detail: String },

    #[error("storage error: {detail}")]
    Storage { detail: String },
}

impl PurchaseError {
    /// Whether resubmitting the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PurchaseError::Storage { .. })
    }
}

impl From<diesel::result::Error> for PurchaseError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => PurchaseError::ConstraintViolation {
                detail: info.message().to_string(),
            },
            other => PurchaseError::Storage {
                detail: other.to_string(),
            },
        }
    }
}

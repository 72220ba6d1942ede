//! Promotions service errors.

use platen::prices::PricingError;
use thiserror::Error;

use crate::store::StorageError;

#[derive(Debug, Error)]
pub enum PromotionsServiceError {
    #[error("promotion already exists")]
    AlreadyExists,

    #[error("promotion not found")]
    NotFound,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

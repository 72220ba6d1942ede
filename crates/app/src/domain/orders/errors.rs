//! Orders service errors.

use platen::prices::PricingError;
use thiserror::Error;

use crate::store::StorageError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("pricing configuration has not been seeded")]
    ConfigurationMissing,

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

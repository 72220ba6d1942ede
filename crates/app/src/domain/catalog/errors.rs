//! Catalog service errors.

use platen::{prices::PricingError, products::ProductError};
use thiserror::Error;

use crate::store::StorageError;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("resource already exists")]
    AlreadyExists,

    #[error("resource not found")]
    NotFound,

    #[error("pricing configuration missing")]
    ConfigurationMissing,

    #[error("invalid product definition")]
    InvalidProduct(#[from] ProductError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("storage error")]
    Storage(#[from] StorageError),
}

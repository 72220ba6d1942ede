//! Catalog command payloads.

use platen::{prices::Money, products::ProductOption};

use super::records::{CategoryUuid, ProductUuid};

/// Fields for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub category_uuid: Option<CategoryUuid>,
    pub base_price: Money,
    pub options: Vec<ProductOption>,
}

/// Partial product update; only provided fields mutate.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category_uuid: Option<CategoryUuid>,
    pub base_price: Option<Money>,
    pub options: Option<Vec<ProductOption>>,
}

/// Fields for creating a category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
}

//! Catalog Records

use jiff::Timestamp;
use platen::products::Product;
use serde::Serialize;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub category_uuid: Option<CategoryUuid>,
    pub product: Product,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

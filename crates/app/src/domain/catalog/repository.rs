//! Catalog repository trait and the bundled in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use parking_lot::RwLock;
use platen::pricing::PricingConfig;
use rustc_hash::FxHashMap;

use crate::store::StorageError;

use super::{
    data::ProductUpdate,
    records::{CategoryRecord, CategoryUuid, ProductRecord, ProductUuid},
};

/// Storage operations for products, categories and the singleton pricing
/// configuration. Every mutation is one atomic storage operation.
#[automock]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Inserts a product; returns `false` when the uuid is already taken.
    async fn insert_product(&self, record: ProductRecord) -> Result<bool, StorageError>;

    /// Fetches a product by uuid.
    async fn get_product(&self, uuid: ProductUuid) -> Result<Option<ProductRecord>, StorageError>;

    /// Lists products ordered by name.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, StorageError>;

    /// Applies a partial update; `None` when the product does not exist.
    async fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, StorageError>;

    /// Deletes a product; returns `false` when it did not exist.
    async fn delete_product(&self, uuid: ProductUuid) -> Result<bool, StorageError>;

    /// Inserts a category; returns `false` when the uuid is already taken.
    async fn insert_category(&self, record: CategoryRecord) -> Result<bool, StorageError>;

    /// Fetches a category by uuid.
    async fn get_category(
        &self,
        uuid: CategoryUuid,
    ) -> Result<Option<CategoryRecord>, StorageError>;

    /// Lists categories ordered by name.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, StorageError>;

    /// Deletes a category; returns `false` when it did not exist.
    async fn delete_category(&self, uuid: CategoryUuid) -> Result<bool, StorageError>;

    /// Fetches the singleton pricing configuration, if seeded.
    async fn pricing_config(&self) -> Result<Option<PricingConfig>, StorageError>;

    /// Replaces the singleton pricing configuration.
    async fn put_pricing_config(&self, config: PricingConfig) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct CatalogTables {
    products: FxHashMap<ProductUuid, ProductRecord>,
    categories: FxHashMap<CategoryUuid, CategoryRecord>,
    pricing_config: Option<PricingConfig>,
}

/// In-memory catalog store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogRepository {
    tables: Arc<RwLock<CatalogTables>>,
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn insert_product(&self, record: ProductRecord) -> Result<bool, StorageError> {
        let mut tables = self.tables.write();

        if tables.products.contains_key(&record.uuid) {
            return Ok(false);
        }

        tables.products.insert(record.uuid, record);

        Ok(true)
    }

    async fn get_product(&self, uuid: ProductUuid) -> Result<Option<ProductRecord>, StorageError> {
        Ok(self.tables.read().products.get(&uuid).cloned())
    }

    async fn list_products(&self) -> Result<Vec<ProductRecord>, StorageError> {
        let mut products: Vec<ProductRecord> =
            self.tables.read().products.values().cloned().collect();

        products.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(products)
    }

    async fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Option<ProductRecord>, StorageError> {
        let mut tables = self.tables.write();

        let Some(record) = tables.products.get_mut(&uuid) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            record.name = name;
        }

        if let Some(category_uuid) = update.category_uuid {
            record.category_uuid = Some(category_uuid);
        }

        if let Some(base_price) = update.base_price {
            record.product.base_price = base_price;
        }

        if let Some(options) = update.options {
            record.product.options = options;
        }

        record.updated_at = Timestamp::now();

        Ok(Some(record.clone()))
    }

    async fn delete_product(&self, uuid: ProductUuid) -> Result<bool, StorageError> {
        Ok(self.tables.write().products.remove(&uuid).is_some())
    }

    async fn insert_category(&self, record: CategoryRecord) -> Result<bool, StorageError> {
        let mut tables = self.tables.write();

        if tables.categories.contains_key(&record.uuid) {
            return Ok(false);
        }

        tables.categories.insert(record.uuid, record);

        Ok(true)
    }

    async fn get_category(
        &self,
        uuid: CategoryUuid,
    ) -> Result<Option<CategoryRecord>, StorageError> {
        Ok(self.tables.read().categories.get(&uuid).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, StorageError> {
        let mut categories: Vec<CategoryRecord> =
            self.tables.read().categories.values().cloned().collect();

        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(categories)
    }

    async fn delete_category(&self, uuid: CategoryUuid) -> Result<bool, StorageError> {
        Ok(self.tables.write().categories.remove(&uuid).is_some())
    }

    async fn pricing_config(&self) -> Result<Option<PricingConfig>, StorageError> {
        Ok(self.tables.read().pricing_config.clone())
    }

    async fn put_pricing_config(&self, config: PricingConfig) -> Result<(), StorageError> {
        self.tables.write().pricing_config = Some(config);

        Ok(())
    }
}

//! Catalog service.

use jiff::Timestamp;
use platen::{
    pricing::PricingConfig,
    products::{ProductPrice, price_product},
};
use rustc_hash::FxHashMap;
use tracing::info;

use super::{
    data::{NewCategory, NewProduct, ProductUpdate},
    errors::CatalogServiceError,
    records::{CategoryRecord, CategoryUuid, ProductRecord, ProductUuid},
    repository::{CatalogRepository, MemoryCatalogRepository},
};

/// Admin CRUD over products, categories and the pricing configuration, plus
/// the product pricing entry point.
#[derive(Debug, Clone)]
pub struct CatalogService<R = MemoryCatalogRepository> {
    repository: R,
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(MemoryCatalogRepository::default())
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Creates a product after validating its option invariants.
    #[tracing::instrument(name = "catalog.service.create_product", skip(self, product), fields(product_uuid = %product.uuid), err)]
    pub async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, CatalogServiceError> {
        let now = Timestamp::now();

        let record = ProductRecord {
            uuid: product.uuid,
            name: product.name,
            category_uuid: product.category_uuid,
            product: platen::products::Product {
                base_price: product.base_price,
                options: product.options,
            },
            created_at: now,
            updated_at: now,
        };

        record.product.validate()?;

        if !self.repository.insert_product(record.clone()).await? {
            return Err(CatalogServiceError::AlreadyExists);
        }

        info!(product_uuid = %record.uuid, "created product");

        Ok(record)
    }

    /// Retrieves a single product.
    pub async fn get_product(
        &self,
        uuid: ProductUuid,
    ) -> Result<ProductRecord, CatalogServiceError> {
        self.repository
            .get_product(uuid)
            .await?
            .ok_or(CatalogServiceError::NotFound)
    }

    /// Retrieves all products, ordered by name.
    pub async fn list_products(&self) -> Result<Vec<ProductRecord>, CatalogServiceError> {
        Ok(self.repository.list_products().await?)
    }

    /// Applies a partial update to a product.
    #[tracing::instrument(name = "catalog.service.update_product", skip(self, update), fields(product_uuid = %uuid), err)]
    pub async fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, CatalogServiceError> {
        // Option invariants are checked before the store mutates.
        if let Some(options) = &update.options {
            let candidate = platen::products::Product {
                base_price: update.base_price.unwrap_or_default(),
                options: options.clone(),
            };

            candidate.validate()?;
        }

        let updated = self
            .repository
            .update_product(uuid, update)
            .await?
            .ok_or(CatalogServiceError::NotFound)?;

        info!(product_uuid = %uuid, "updated product");

        Ok(updated)
    }

    /// Deletes a product.
    #[tracing::instrument(name = "catalog.service.delete_product", skip(self), fields(product_uuid = %uuid), err)]
    pub async fn delete_product(&self, uuid: ProductUuid) -> Result<(), CatalogServiceError> {
        if !self.repository.delete_product(uuid).await? {
            return Err(CatalogServiceError::NotFound);
        }

        info!(product_uuid = %uuid, "deleted product");

        Ok(())
    }

    /// Creates a category.
    #[tracing::instrument(name = "catalog.service.create_category", skip(self, category), fields(category_uuid = %category.uuid), err)]
    pub async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CatalogServiceError> {
        let now = Timestamp::now();

        let record = CategoryRecord {
            uuid: category.uuid,
            name: category.name,
            created_at: now,
            updated_at: now,
        };

        if !self.repository.insert_category(record.clone()).await? {
            return Err(CatalogServiceError::AlreadyExists);
        }

        info!(category_uuid = %record.uuid, "created category");

        Ok(record)
    }

    /// Retrieves a single category.
    pub async fn get_category(
        &self,
        uuid: CategoryUuid,
    ) -> Result<CategoryRecord, CatalogServiceError> {
        self.repository
            .get_category(uuid)
            .await?
            .ok_or(CatalogServiceError::NotFound)
    }

    /// Retrieves all categories, ordered by name.
    pub async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CatalogServiceError> {
        Ok(self.repository.list_categories().await?)
    }

    /// Deletes a category.
    #[tracing::instrument(name = "catalog.service.delete_category", skip(self), fields(category_uuid = %uuid), err)]
    pub async fn delete_category(&self, uuid: CategoryUuid) -> Result<(), CatalogServiceError> {
        if !self.repository.delete_category(uuid).await? {
            return Err(CatalogServiceError::NotFound);
        }

        info!(category_uuid = %uuid, "deleted category");

        Ok(())
    }

    /// Fetches the singleton pricing configuration.
    pub async fn pricing_config(&self) -> Result<PricingConfig, CatalogServiceError> {
        self.repository
            .pricing_config()
            .await?
            .ok_or(CatalogServiceError::ConfigurationMissing)
    }

    /// Seeds or replaces the pricing configuration.
    #[tracing::instrument(name = "catalog.service.put_pricing_config", skip(self, config), err)]
    pub async fn put_pricing_config(
        &self,
        config: PricingConfig,
    ) -> Result<(), CatalogServiceError> {
        self.repository.put_pricing_config(config).await?;

        info!("updated pricing configuration");

        Ok(())
    }

    /// Prices a product for the given selections.
    ///
    /// Resolves the product by uuid, then delegates to the pure option
    /// pricing calculation.
    pub async fn price_product(
        &self,
        uuid: ProductUuid,
        selections: &FxHashMap<String, String>,
        quantity: u32,
    ) -> Result<ProductPrice, CatalogServiceError> {
        let record = self.get_product(uuid).await?;

        Ok(price_product(&record.product, selections, quantity)?)
    }
}

#[cfg(test)]
mod tests {
    use platen::{fixtures, prices::Money};
    use testresult::TestResult;

    use super::*;

    fn new_product(name: &str) -> NewProduct {
        let product = fixtures::poster();

        NewProduct {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            category_uuid: None,
            base_price: product.base_price,
            options: product.options,
        }
    }

    #[tokio::test]
    async fn create_and_get_product() -> TestResult {
        let service = CatalogService::default();

        let created = service.create_product(new_product("Poster")).await?;
        let fetched = service.get_product(created.uuid).await?;

        assert_eq!(fetched.uuid, created.uuid);
        assert_eq!(fetched.name, "Poster");
        assert_eq!(fetched.product.base_price, Money::from_minor(200));

        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_product_returns_not_found() {
        let service = CatalogService::default();

        let result = service.get_product(ProductUuid::new()).await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn duplicate_product_uuid_returns_already_exists() -> TestResult {
        let service = CatalogService::default();
        let product = new_product("Poster");

        service.create_product(product.clone()).await?;

        let result = service.create_product(product).await;

        assert!(
            matches!(result, Err(CatalogServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn invalid_product_definition_is_rejected() {
        let service = CatalogService::default();

        let mut product = new_product("Poster");
        let mut duplicate = product.options.clone();
        product.options.append(&mut duplicate);

        let result = service.create_product(product).await;

        assert!(
            matches!(result, Err(CatalogServiceError::InvalidProduct(_))),
            "expected InvalidProduct, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_products_is_ordered_by_name() -> TestResult {
        let service = CatalogService::default();

        service.create_product(new_product("Stickers")).await?;
        service.create_product(new_product("Banners")).await?;

        let names: Vec<String> = service
            .list_products()
            .await?
            .into_iter()
            .map(|record| record.name)
            .collect();

        assert_eq!(names, vec!["Banners".to_string(), "Stickers".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn update_product_changes_only_provided_fields() -> TestResult {
        let service = CatalogService::default();
        let created = service.create_product(new_product("Poster")).await?;

        let updated = service
            .update_product(
                created.uuid,
                ProductUpdate {
                    base_price: Some(Money::from_minor(250)),
                    ..ProductUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.product.base_price, Money::from_minor(250));
        assert_eq!(updated.name, "Poster");
        assert_eq!(updated.product.options, created.product.options);

        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_product_returns_not_found() {
        let service = CatalogService::default();

        let result = service
            .update_product(ProductUuid::new(), ProductUpdate::default())
            .await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_product_makes_it_not_found() -> TestResult {
        let service = CatalogService::default();
        let created = service.create_product(new_product("Poster")).await?;

        service.delete_product(created.uuid).await?;

        let result = service.get_product(created.uuid).await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound after deletion, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn categories_round_trip() -> TestResult {
        let service = CatalogService::default();

        let created = service
            .create_category(NewCategory {
                uuid: CategoryUuid::new(),
                name: "Prints".to_string(),
            })
            .await?;

        assert_eq!(service.get_category(created.uuid).await?.name, "Prints");

        service.delete_category(created.uuid).await?;

        assert!(service.list_categories().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn pricing_config_missing_until_seeded() -> TestResult {
        let service = CatalogService::default();

        let result = service.pricing_config().await;

        assert!(
            matches!(result, Err(CatalogServiceError::ConfigurationMissing)),
            "expected ConfigurationMissing, got {result:?}"
        );

        service.put_pricing_config(fixtures::pricing_config()).await?;

        assert_eq!(
            service.pricing_config().await?,
            fixtures::pricing_config()
        );

        Ok(())
    }

    #[tokio::test]
    async fn price_product_resolves_and_computes() -> TestResult {
        let service = CatalogService::default();
        let created = service.create_product(new_product("Poster")).await?;

        let selections: FxHashMap<String, String> = [
            ("size".to_string(), "5x5".to_string()),
            ("quantity".to_string(), "50".to_string()),
        ]
        .into_iter()
        .collect();

        let price = service.price_product(created.uuid, &selections, 1).await?;

        assert_eq!(price.final_price, Money::from_minor(25_200));

        Ok(())
    }

    #[tokio::test]
    async fn price_product_unknown_uuid_returns_not_found() {
        let service = CatalogService::default();

        let result = service
            .price_product(ProductUuid::new(), &FxHashMap::default(), 1)
            .await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}

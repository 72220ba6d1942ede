//! Orders service.

use platen::{orders::quote, pricing::PriceBreakdown};
use tracing::info;

use crate::domain::catalog::repository::{CatalogRepository, MemoryCatalogRepository};

use super::{
    data::NewOrder,
    errors::OrdersServiceError,
    records::{OrderRecord, OrderStatus, OrderUuid},
    repository::{MemoryOrdersRepository, OrdersRepository},
};

/// A freshly placed order together with the itemised quote it was priced
/// from.
#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub order: OrderRecord,
    pub breakdown: PriceBreakdown,
}

/// Order placement and admin status management.
///
/// Placement reads the pricing configuration through the catalog store on
/// every call; nothing is cached in-process.
#[derive(Debug, Clone)]
pub struct OrdersService<R = MemoryOrdersRepository, C = MemoryCatalogRepository> {
    repository: R,
    catalog: C,
}

impl Default for OrdersService {
    fn default() -> Self {
        Self::new(
            MemoryOrdersRepository::default(),
            MemoryCatalogRepository::default(),
        )
    }
}

impl<R: OrdersRepository, C: CatalogRepository> OrdersService<R, C> {
    #[must_use]
    pub fn new(repository: R, catalog: C) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Quotes and persists an order.
    ///
    /// The stored `total_price` is the quote's total; promotion discounts
    /// are not applied here.
    #[tracing::instrument(name = "orders.service.create_order", skip(self, order), fields(order_uuid = %order.uuid), err)]
    pub async fn create_order(&self, order: NewOrder) -> Result<CreatedOrder, OrdersServiceError> {
        let config = self
            .catalog
            .pricing_config()
            .await?
            .ok_or(OrdersServiceError::ConfigurationMissing)?;

        let quote = quote(&config, &order.documents, &order.options)?;

        let now = jiff::Timestamp::now();

        let record = OrderRecord {
            uuid: order.uuid,
            options: order.options,
            documents: order.documents,
            total_pages: quote.total_pages,
            total_price: quote.breakdown.total,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.repository.insert(record.clone()).await?;

        info!(
            order_uuid = %record.uuid,
            total_pages = record.total_pages,
            total_price = %record.total_price,
            "created order"
        );

        Ok(CreatedOrder {
            order: record,
            breakdown: quote.breakdown,
        })
    }

    /// Retrieves a single order.
    pub async fn get(&self, uuid: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        self.repository
            .get(uuid)
            .await?
            .ok_or(OrdersServiceError::NotFound)
    }

    /// Retrieves all orders, newest first.
    pub async fn list(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        Ok(self.repository.list().await?)
    }

    /// Sets an order's status. Any transition is accepted; the lifecycle is
    /// externally driven.
    #[tracing::instrument(name = "orders.service.update_status", skip(self), fields(order_uuid = %uuid, ?status), err)]
    pub async fn update_status(
        &self,
        uuid: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let updated = self
            .repository
            .update_status(uuid, status)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        info!(order_uuid = %uuid, ?status, "updated order status");

        Ok(updated)
    }
}

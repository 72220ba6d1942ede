//! Orders repository trait and the bundled in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::store::StorageError;

use super::records::{OrderRecord, OrderStatus, OrderUuid};

/// Storage operations for orders. Every mutation is one atomic storage
/// operation.
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Inserts an order; returns `false` when the uuid is already taken.
    async fn insert(&self, record: OrderRecord) -> Result<bool, StorageError>;

    /// Fetches an order by uuid.
    async fn get(&self, uuid: OrderUuid) -> Result<Option<OrderRecord>, StorageError>;

    /// Lists orders, newest first.
    async fn list(&self) -> Result<Vec<OrderRecord>, StorageError>;

    /// Sets the order status; `None` when the order does not exist.
    async fn update_status(
        &self,
        uuid: OrderUuid,
        status: OrderStatus,
    ) -> Result<Option<OrderRecord>, StorageError>;
}

/// In-memory orders store.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrdersRepository {
    records: Arc<RwLock<FxHashMap<OrderUuid, OrderRecord>>>,
}

#[async_trait]
impl OrdersRepository for MemoryOrdersRepository {
    async fn insert(&self, record: OrderRecord) -> Result<bool, StorageError> {
        let mut records = self.records.write();

        if records.contains_key(&record.uuid) {
            return Ok(false);
        }

        records.insert(record.uuid, record);

        Ok(true)
    }

    async fn get(&self, uuid: OrderUuid) -> Result<Option<OrderRecord>, StorageError> {
        Ok(self.records.read().get(&uuid).cloned())
    }

    async fn list(&self) -> Result<Vec<OrderRecord>, StorageError> {
        let mut records: Vec<OrderRecord> = self.records.read().values().cloned().collect();

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(records)
    }

    async fn update_status(
        &self,
        uuid: OrderUuid,
        status: OrderStatus,
    ) -> Result<Option<OrderRecord>, StorageError> {
        let mut records = self.records.write();

        let Some(record) = records.get_mut(&uuid) else {
            return Ok(None);
        };

        record.status = status;
        record.updated_at = Timestamp::now();

        Ok(Some(record.clone()))
    }
}

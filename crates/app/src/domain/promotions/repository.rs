//! Promotions repository trait and the bundled in-memory implementation.
//!
//! Each mutation is one atomic storage operation: a single write-lock scope
//! here, a single guarded row update in a real backend. `increment_uses` in
//! particular must never be read-modify-write in application code, so two
//! concurrent increments both land. No ceiling check is combined with the
//! increment; a race can push `current_uses` slightly past `max_uses`, which
//! is accepted behaviour.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{Span, Timestamp, tz::TimeZone};
use mockall::automock;
use parking_lot::RwLock;

use crate::store::StorageError;

use super::{
    data::PromotionUpdate,
    records::{PromotionRecord, PromotionUuid},
};

/// Storage operations for promotions.
#[automock]
#[async_trait]
pub trait PromotionsRepository: Send + Sync {
    /// Inserts a promotion; returns `false` when the uuid is already taken.
    async fn insert(&self, record: PromotionRecord) -> Result<bool, StorageError>;

    /// Fetches a promotion by uuid.
    async fn get(&self, uuid: PromotionUuid) -> Result<Option<PromotionRecord>, StorageError>;

    /// Lists promotions ordered by priority descending; ties keep insertion
    /// order.
    async fn list(&self) -> Result<Vec<PromotionRecord>, StorageError>;

    /// Applies a partial update; `None` when the promotion does not exist.
    async fn update(
        &self,
        uuid: PromotionUuid,
        update: PromotionUpdate,
    ) -> Result<Option<PromotionRecord>, StorageError>;

    /// Deletes a promotion; returns `false` when it did not exist.
    async fn delete(&self, uuid: PromotionUuid) -> Result<bool, StorageError>;

    /// Flips the manual switch.
    async fn toggle_active(
        &self,
        uuid: PromotionUuid,
    ) -> Result<Option<PromotionRecord>, StorageError>;

    /// Extends the end date by calendar days in UTC and forces the
    /// promotion active.
    async fn renew(
        &self,
        uuid: PromotionUuid,
        days: i32,
    ) -> Result<Option<PromotionRecord>, StorageError>;

    /// Resets the usage counter to zero.
    async fn reset_uses(
        &self,
        uuid: PromotionUuid,
    ) -> Result<Option<PromotionRecord>, StorageError>;

    /// Atomically adds one use.
    async fn increment_uses(
        &self,
        uuid: PromotionUuid,
    ) -> Result<Option<PromotionRecord>, StorageError>;
}

/// In-memory promotions store.
///
/// Records are kept in insertion order so the priority sort can tie-break
/// stably.
#[derive(Debug, Clone, Default)]
pub struct MemoryPromotionsRepository {
    records: Arc<RwLock<Vec<PromotionRecord>>>,
}

impl MemoryPromotionsRepository {
    fn mutate<F>(&self, uuid: PromotionUuid, apply: F) -> Result<Option<PromotionRecord>, StorageError>
    where
        F: FnOnce(&mut PromotionRecord) -> Result<(), StorageError>,
    {
        let mut records = self.records.write();

        let Some(record) = records.iter_mut().find(|record| record.uuid == uuid) else {
            return Ok(None);
        };

        apply(record)?;
        record.updated_at = Timestamp::now();

        Ok(Some(record.clone()))
    }
}

#[async_trait]
impl PromotionsRepository for MemoryPromotionsRepository {
    async fn insert(&self, record: PromotionRecord) -> Result<bool, StorageError> {
        let mut records = self.records.write();

        if records.iter().any(|existing| existing.uuid == record.uuid) {
            return Ok(false);
        }

        records.push(record);

        Ok(true)
    }

    async fn get(&self, uuid: PromotionUuid) -> Result<Option<PromotionRecord>, StorageError> {
        Ok(self
            .records
            .read()
            .iter()
            .find(|record| record.uuid == uuid)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<PromotionRecord>, StorageError> {
        let mut records: Vec<PromotionRecord> = self.records.read().clone();

        // Stable sort, so equal priorities keep insertion order.
        records.sort_by(|a, b| b.priority.cmp(&a.priority));

        Ok(records)
    }

    async fn update(
        &self,
        uuid: PromotionUuid,
        update: PromotionUpdate,
    ) -> Result<Option<PromotionRecord>, StorageError> {
        self.mutate(uuid, |record| {
            if let Some(name) = update.name {
                record.name = name;
            }

            if let Some(title) = update.title {
                record.title = title;
            }

            if let Some(subtitle) = update.subtitle {
                record.subtitle = subtitle;
            }

            if let Some(description) = update.description {
                record.description = description;
            }

            if let Some(badge) = update.badge {
                record.badge = badge;
            }

            if let Some(discount) = update.discount {
                record.discount = discount;
            }

            if let Some(starts_at) = update.starts_at {
                record.starts_at = starts_at;
            }

            if let Some(ends_at) = update.ends_at {
                record.ends_at = ends_at;
            }

            if let Some(max_uses) = update.max_uses {
                record.max_uses = max_uses;
            }

            if let Some(active) = update.active {
                record.active = active;
            }

            if let Some(priority) = update.priority {
                record.priority = priority;
            }

            if let Some(min_purchase) = update.min_purchase {
                record.min_purchase = min_purchase;
            }

            if let Some(category_uuids) = update.category_uuids {
                record.category_uuids = category_uuids;
            }

            if let Some(product_uuids) = update.product_uuids {
                record.product_uuids = product_uuids;
            }

            Ok(())
        })
    }

    async fn delete(&self, uuid: PromotionUuid) -> Result<bool, StorageError> {
        let mut records = self.records.write();
        let before = records.len();

        records.retain(|record| record.uuid != uuid);

        Ok(records.len() < before)
    }

    async fn toggle_active(
        &self,
        uuid: PromotionUuid,
    ) -> Result<Option<PromotionRecord>, StorageError> {
        self.mutate(uuid, |record| {
            record.active = !record.active;

            Ok(())
        })
    }

    async fn renew(
        &self,
        uuid: PromotionUuid,
        days: i32,
    ) -> Result<Option<PromotionRecord>, StorageError> {
        self.mutate(uuid, |record| {
            let extended = record
                .ends_at
                .to_zoned(TimeZone::UTC)
                .checked_add(Span::new().days(i64::from(days)))
                .map_err(|error| StorageError::Backend(error.to_string()))?;

            record.ends_at = extended.timestamp();
            record.active = true;

            Ok(())
        })
    }

    async fn reset_uses(
        &self,
        uuid: PromotionUuid,
    ) -> Result<Option<PromotionRecord>, StorageError> {
        self.mutate(uuid, |record| {
            record.current_uses = 0;

            Ok(())
        })
    }

    async fn increment_uses(
        &self,
        uuid: PromotionUuid,
    ) -> Result<Option<PromotionRecord>, StorageError> {
        self.mutate(uuid, |record| {
            record.current_uses = record.current_uses.saturating_add(1);

            Ok(())
        })
    }
}

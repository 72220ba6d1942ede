//! Promotions Service

use jiff::Timestamp;
use platen::{
    prices::Money,
    promotions::{AppliedDiscount, PromotionStatus, PromotionTerms, select_best},
};
use tracing::info;

use crate::domain::catalog::records::{CategoryUuid, ProductUuid};

use super::{
    data::{NewPromotion, PromotionUpdate},
    errors::PromotionsServiceError,
    records::{PromotionOverview, PromotionRecord, PromotionUuid},
    repository::{MemoryPromotionsRepository, PromotionsRepository},
};

/// The best applicable promotion for a product, with its discount already
/// computed against the quoted price.
#[derive(Debug, Clone)]
pub struct BestPromotion {
    pub promotion: PromotionRecord,
    pub applied: AppliedDiscount,
}

/// Aggregate promotion counts per derived status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct PromotionStatistics {
    pub total: usize,
    pub active: usize,
    pub scheduled: usize,
    pub expired: usize,
    pub paused: usize,
}

/// Listing, storefront evaluation and admin mutations over promotions.
#[derive(Debug, Clone)]
pub struct PromotionsService<R = MemoryPromotionsRepository> {
    repository: R,
}

impl Default for PromotionsService {
    fn default() -> Self {
        Self::new(MemoryPromotionsRepository::default())
    }
}

impl<R: PromotionsRepository> PromotionsService<R> {
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Creates a promotion.
    #[tracing::instrument(name = "promotions.service.create", skip(self, promotion), fields(promotion_uuid = %promotion.uuid), err)]
    pub async fn create(
        &self,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let now = Timestamp::now();

        let record = PromotionRecord {
            uuid: promotion.uuid,
            name: promotion.name,
            title: promotion.title,
            subtitle: promotion.subtitle,
            description: promotion.description,
            badge: promotion.badge,
            discount: promotion.discount,
            starts_at: promotion.starts_at,
            ends_at: promotion.ends_at,
            max_uses: promotion.max_uses,
            current_uses: 0,
            active: promotion.active,
            priority: promotion.priority,
            min_purchase: promotion.min_purchase,
            category_uuids: promotion.category_uuids,
            product_uuids: promotion.product_uuids,
            created_at: now,
            updated_at: now,
        };

        if !self.repository.insert(record.clone()).await? {
            return Err(PromotionsServiceError::AlreadyExists);
        }

        info!(promotion_uuid = %record.uuid, "created promotion");

        Ok(record)
    }

    /// Retrieves a single promotion.
    pub async fn get(&self, uuid: PromotionUuid) -> Result<PromotionRecord, PromotionsServiceError> {
        self.repository
            .get(uuid)
            .await?
            .ok_or(PromotionsServiceError::NotFound)
    }

    /// All promotions with derived status and usage attached, priority
    /// descending. The admin listing.
    pub async fn list(
        &self,
        now: Timestamp,
    ) -> Result<Vec<PromotionOverview>, PromotionsServiceError> {
        let records = self.repository.list().await?;

        Ok(records
            .into_iter()
            .map(|record| PromotionOverview::at(record, now))
            .collect())
    }

    /// Live promotions that still have usage headroom, priority descending.
    pub async fn find_active(
        &self,
        now: Timestamp,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        let records = self.repository.list().await?;

        Ok(records
            .into_iter()
            .filter(|record| record.is_live(now) && !record.is_exhausted())
            .collect())
    }

    /// Live promotions scoped to a category, priority descending.
    ///
    /// Deliberately does not filter usage-exhausted promotions; only
    /// [`Self::find_active`] and best-offer candidates do.
    pub async fn find_by_category(
        &self,
        category: CategoryUuid,
        now: Timestamp,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        let records = self.repository.list().await?;

        Ok(records
            .into_iter()
            .filter(|record| record.is_live(now) && record.category_uuids.contains(&category))
            .collect())
    }

    /// Live promotions scoped to a product, priority descending.
    ///
    /// Like [`Self::find_by_category`], usage-exhausted promotions are not
    /// filtered here.
    pub async fn find_by_product(
        &self,
        product: ProductUuid,
        now: Timestamp,
    ) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        let records = self.repository.list().await?;

        Ok(records
            .into_iter()
            .filter(|record| record.is_live(now) && record.product_uuids.contains(&product))
            .collect())
    }

    /// Picks the promotion granting the greatest discount on `price` among
    /// live, non-exhausted promotions scoped to the product or its category.
    ///
    /// Ties resolve to the highest-priority candidate. `None` when nothing
    /// applies; a zero-amount offer is still a result.
    pub async fn best_for_product(
        &self,
        product: ProductUuid,
        category: Option<CategoryUuid>,
        price: Money,
        now: Timestamp,
    ) -> Result<Option<BestPromotion>, PromotionsServiceError> {
        let records = self.repository.list().await?;

        let candidates: Vec<PromotionRecord> = records
            .into_iter()
            .filter(|record| {
                record.is_live(now)
                    && record.applies_to(product, category)
                    && !record.is_exhausted()
            })
            .collect();

        let terms: Vec<PromotionTerms> = candidates.iter().map(PromotionRecord::terms).collect();

        let Some(best) = select_best(&terms, price)? else {
            return Ok(None);
        };

        Ok(candidates.get(best.index).map(|record| BestPromotion {
            promotion: record.clone(),
            applied: best.applied,
        }))
    }

    /// Applies a partial update.
    #[tracing::instrument(name = "promotions.service.update", skip(self, update), fields(promotion_uuid = %uuid), err)]
    pub async fn update(
        &self,
        uuid: PromotionUuid,
        update: PromotionUpdate,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let updated = self
            .repository
            .update(uuid, update)
            .await?
            .ok_or(PromotionsServiceError::NotFound)?;

        info!(promotion_uuid = %uuid, "updated promotion");

        Ok(updated)
    }

    /// Deletes a promotion.
    #[tracing::instrument(name = "promotions.service.delete", skip(self), fields(promotion_uuid = %uuid), err)]
    pub async fn delete(&self, uuid: PromotionUuid) -> Result<(), PromotionsServiceError> {
        if !self.repository.delete(uuid).await? {
            return Err(PromotionsServiceError::NotFound);
        }

        info!(promotion_uuid = %uuid, "deleted promotion");

        Ok(())
    }

    /// Flips the manual switch.
    #[tracing::instrument(name = "promotions.service.toggle_active", skip(self), fields(promotion_uuid = %uuid), err)]
    pub async fn toggle_active(
        &self,
        uuid: PromotionUuid,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let record = self
            .repository
            .toggle_active(uuid)
            .await?
            .ok_or(PromotionsServiceError::NotFound)?;

        info!(promotion_uuid = %uuid, active = record.active, "toggled promotion");

        Ok(record)
    }

    /// Extends the validity window by calendar days and forces the
    /// promotion active.
    #[tracing::instrument(name = "promotions.service.renew", skip(self), fields(promotion_uuid = %uuid, days), err)]
    pub async fn renew(
        &self,
        uuid: PromotionUuid,
        days: i32,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let record = self
            .repository
            .renew(uuid, days)
            .await?
            .ok_or(PromotionsServiceError::NotFound)?;

        info!(promotion_uuid = %uuid, ends_at = %record.ends_at, "renewed promotion");

        Ok(record)
    }

    /// Resets the usage counter.
    #[tracing::instrument(name = "promotions.service.reset_usage", skip(self), fields(promotion_uuid = %uuid), err)]
    pub async fn reset_usage(
        &self,
        uuid: PromotionUuid,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let record = self
            .repository
            .reset_uses(uuid)
            .await?
            .ok_or(PromotionsServiceError::NotFound)?;

        info!(promotion_uuid = %uuid, "reset promotion usage");

        Ok(record)
    }

    /// Records one application of the promotion.
    ///
    /// The caller invokes this at most once per order that actually applied
    /// the discount; the increment itself carries no ceiling check.
    #[tracing::instrument(name = "promotions.service.increment_usage", skip(self), fields(promotion_uuid = %uuid), err)]
    pub async fn increment_usage(
        &self,
        uuid: PromotionUuid,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        let record = self
            .repository
            .increment_uses(uuid)
            .await?
            .ok_or(PromotionsServiceError::NotFound)?;

        info!(promotion_uuid = %uuid, current_uses = record.current_uses, "incremented promotion usage");

        Ok(record)
    }

    /// Counts promotions per derived status.
    ///
    /// Every record flows through the same status derivation as the per-item
    /// listing, so the aggregates cannot drift from the displayed statuses.
    pub async fn statistics(
        &self,
        now: Timestamp,
    ) -> Result<PromotionStatistics, PromotionsServiceError> {
        let records = self.repository.list().await?;

        let mut statistics = PromotionStatistics {
            total: records.len(),
            ..PromotionStatistics::default()
        };

        for record in &records {
            match record.status(now) {
                PromotionStatus::Active => statistics.active += 1,
                PromotionStatus::Scheduled => statistics.scheduled += 1,
                PromotionStatus::Expired => statistics.expired += 1,
                PromotionStatus::Paused => statistics.paused += 1,
            }
        }

        Ok(statistics)
    }
}

//! Promotions Records

use jiff::Timestamp;
use platen::{
    prices::Money,
    promotions::{Discount, PromotionStatus, PromotionTerms, status::status, usage_percentage},
};
use serde::Serialize;
use smallvec::SmallVec;

use crate::{
    domain::catalog::records::{CategoryUuid, ProductUuid},
    uuids::TypedUuid,
};

/// Promotion UUID
pub type PromotionUuid = TypedUuid<PromotionRecord>;

/// Promotion Record
#[derive(Debug, Clone, Serialize)]
pub struct PromotionRecord {
    pub uuid: PromotionUuid,

    /// Internal name.
    pub name: String,

    /// Display title.
    pub title: String,

    /// Display subtitle.
    pub subtitle: Option<String>,

    /// Display description.
    pub description: Option<String>,

    /// Badge styling token, display only.
    pub badge: Option<String>,

    /// Discount granted when the promotion applies.
    pub discount: Discount,

    /// Start of the validity window, inclusive.
    pub starts_at: Timestamp,

    /// End of the validity window, inclusive.
    pub ends_at: Timestamp,

    /// Usage cap; `None` means unlimited.
    pub max_uses: Option<u32>,

    /// Times the promotion has been applied to a finalised order.
    pub current_uses: u32,

    /// Manual on/off switch, independent of the date window.
    pub active: bool,

    /// Listing order and discount tie-break; higher wins.
    pub priority: i32,

    /// Minimum original price for the discount to apply.
    pub min_purchase: Option<Money>,

    /// Categories the promotion is scoped to.
    pub category_uuids: SmallVec<[CategoryUuid; 4]>,

    /// Products the promotion is scoped to.
    pub product_uuids: SmallVec<[ProductUuid; 4]>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PromotionRecord {
    /// Derived lifecycle status at `now`.
    #[must_use]
    pub fn status(&self, now: Timestamp) -> PromotionStatus {
        status(self.active, self.starts_at, self.ends_at, now)
    }

    /// Share of the usage cap consumed; `None` when uncapped.
    #[must_use]
    pub fn usage_percentage(&self) -> Option<u32> {
        usage_percentage(self.current_uses, self.max_uses)
    }

    /// Whether the promotion is switched on and inside its window.
    #[must_use]
    pub fn is_live(&self, now: Timestamp) -> bool {
        self.status(now) == PromotionStatus::Active
    }

    /// Whether the usage cap has been reached.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.max_uses
            .is_some_and(|max_uses| self.current_uses >= max_uses)
    }

    /// Whether the promotion is scoped to the product or its category.
    #[must_use]
    pub fn applies_to(&self, product: ProductUuid, category: Option<CategoryUuid>) -> bool {
        self.product_uuids.contains(&product)
            || category.is_some_and(|category| self.category_uuids.contains(&category))
    }

    /// The computation-relevant slice of the promotion.
    #[must_use]
    pub fn terms(&self) -> PromotionTerms {
        PromotionTerms {
            discount: self.discount,
            min_purchase: self.min_purchase,
        }
    }
}

/// A promotion with its derived fields attached, for listing UIs.
#[derive(Debug, Clone, Serialize)]
pub struct PromotionOverview {
    pub promotion: PromotionRecord,
    pub status: PromotionStatus,
    pub usage_percentage: Option<u32>,
}

impl PromotionOverview {
    /// Derives the overview at `now`.
    #[must_use]
    pub fn at(promotion: PromotionRecord, now: Timestamp) -> Self {
        let status = promotion.status(now);
        let usage_percentage = promotion.usage_percentage();

        Self {
            promotion,
            status,
            usage_percentage,
        }
    }
}

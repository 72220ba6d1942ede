//! Promotions command payloads.

use jiff::Timestamp;
use platen::{prices::Money, promotions::Discount};
use smallvec::SmallVec;

use crate::domain::catalog::records::{CategoryUuid, ProductUuid};

use super::records::PromotionUuid;

/// Fields for creating a promotion. Scope lists default to empty.
#[derive(Debug, Clone)]
pub struct NewPromotion {
    pub uuid: PromotionUuid,
    pub name: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub badge: Option<String>,
    pub discount: Discount,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub max_uses: Option<u32>,
    pub active: bool,
    pub priority: i32,
    pub min_purchase: Option<Money>,
    pub category_uuids: SmallVec<[CategoryUuid; 4]>,
    pub product_uuids: SmallVec<[ProductUuid; 4]>,
}

/// Partial promotion update; only provided fields mutate.
#[derive(Debug, Clone, Default)]
pub struct PromotionUpdate {
    pub name: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub badge: Option<Option<String>>,
    pub discount: Option<Discount>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub max_uses: Option<Option<u32>>,
    pub active: Option<bool>,
    pub priority: Option<i32>,
    pub min_purchase: Option<Option<Money>>,
    pub category_uuids: Option<SmallVec<[CategoryUuid; 4]>>,
    pub product_uuids: Option<SmallVec<[ProductUuid; 4]>>,
}

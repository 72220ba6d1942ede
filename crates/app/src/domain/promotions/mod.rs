//! Promotions

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::PromotionsServiceError;
pub use records::{PromotionOverview, PromotionRecord, PromotionUuid};
pub use repository::{MemoryPromotionsRepository, PromotionsRepository};
pub use service::{BestPromotion, PromotionStatistics, PromotionsService};

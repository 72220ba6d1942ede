//! Sample promotions for the CLI surfaces.

use jiff::{Span, Timestamp};
use platen::{prices::Money, promotions::Discount};
use platen_app::domain::{
    catalog::records::{CategoryUuid, ProductUuid},
    promotions::{PromotionsRepository, PromotionsService, data::NewPromotion, records::PromotionUuid},
};
use rust_decimal::Decimal;
use smallvec::SmallVec;

/// Seeds three sample promotions: a broad percentage sale, a voucher gated
/// on a minimum purchase, and a bundle deal. Scope uuids attach when given.
pub(crate) async fn seed_promotions<R: PromotionsRepository>(
    service: &PromotionsService<R>,
    product: Option<ProductUuid>,
    category: Option<CategoryUuid>,
) -> anyhow::Result<()> {
    let now = Timestamp::now();
    let starts_at = now.checked_sub(Span::new().hours(1))?;
    let ends_at = now.checked_add(Span::new().hours(24 * 30))?;

    let category_scope: SmallVec<[CategoryUuid; 4]> = category.into_iter().collect();
    let product_scope: SmallVec<[ProductUuid; 4]> = product.into_iter().collect();

    service
        .create(NewPromotion {
            uuid: PromotionUuid::new(),
            name: "spring-sale".to_string(),
            title: "Spring Sale".to_string(),
            subtitle: Some("20% off everything in the category".to_string()),
            description: None,
            badge: Some("seasonal".to_string()),
            discount: Discount::Percentage {
                percent: Decimal::from(20),
            },
            starts_at,
            ends_at,
            max_uses: None,
            active: true,
            priority: 10,
            min_purchase: None,
            category_uuids: category_scope,
            product_uuids: SmallVec::new(),
        })
        .await?;

    service
        .create(NewPromotion {
            uuid: PromotionUuid::new(),
            name: "loyalty-voucher".to_string(),
            title: "Loyalty Voucher".to_string(),
            subtitle: None,
            description: Some("150 off orders of 1000 or more".to_string()),
            badge: None,
            discount: Discount::FixedAmount {
                amount: Money::from_minor(150),
            },
            starts_at,
            ends_at,
            max_uses: Some(100),
            active: true,
            priority: 5,
            min_purchase: Some(Money::from_minor(1000)),
            category_uuids: SmallVec::new(),
            product_uuids: product_scope.clone(),
        })
        .await?;

    service
        .create(NewPromotion {
            uuid: PromotionUuid::new(),
            name: "poster-bundle".to_string(),
            title: "Poster Bundle".to_string(),
            subtitle: None,
            description: None,
            badge: Some("bundle".to_string()),
            discount: Discount::Bundle {
                amount: Money::from_minor(300),
            },
            starts_at,
            ends_at,
            max_uses: Some(50),
            active: true,
            priority: 8,
            min_purchase: None,
            category_uuids: SmallVec::new(),
            product_uuids: product_scope,
        })
        .await?;

    Ok(())
}

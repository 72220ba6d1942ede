use anyhow::Context;
use clap::Args;
use jiff::Timestamp;
use platen::{
    fixtures,
    orders::{Document, PrintOptions},
    receipt::Receipt,
};
use platen_app::{
    domain::{
        catalog::{
            CatalogService,
            data::{NewCategory, NewProduct},
            records::{CategoryUuid, ProductUuid},
            repository::MemoryCatalogRepository,
        },
        orders::{MemoryOrdersRepository, OrderUuid, OrdersService, data::NewOrder},
        promotions::PromotionsService,
    },
    settings::Settings,
};
use rustc_hash::FxHashMap;

use super::seed;

#[derive(Debug, Args)]
pub(crate) struct DemoArgs {
    /// Number of copies for the demo order
    #[arg(long, default_value_t = 3)]
    copies: u32,
}

/// Walks the whole flow: seed the catalog and promotions, price a product,
/// place an order and apply the best promotion to its receipt.
pub(crate) async fn run(args: DemoArgs) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    let catalog_store = MemoryCatalogRepository::default();
    let catalog = CatalogService::new(catalog_store.clone());

    catalog.put_pricing_config(settings.pricing_config()).await?;

    let category = catalog
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: "prints".to_string(),
        })
        .await?;

    let poster_fixture = fixtures::poster();
    let poster = catalog
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            name: "poster".to_string(),
            category_uuid: Some(category.uuid),
            base_price: poster_fixture.base_price,
            options: poster_fixture.options,
        })
        .await?;

    let promotions = PromotionsService::default();

    seed::seed_promotions(&promotions, Some(poster.uuid), Some(category.uuid)).await?;

    println!("== product pricing ==");

    let mut selections = FxHashMap::default();
    selections.insert("size".to_string(), "10x10".to_string());

    let price = catalog.price_product(poster.uuid, &selections, 2).await?;

    println!(
        "poster, 10\" x 10\", two of them: unit {} / final {}",
        price.unit_price, price.final_price
    );

    println!();
    println!("== order quoting ==");

    let orders = OrdersService::new(MemoryOrdersRepository::default(), catalog_store);

    let created = orders
        .create_order(NewOrder {
            uuid: OrderUuid::new(),
            documents: vec![
                Document {
                    name: "thesis.pdf".to_string(),
                    pages: 120,
                },
                Document {
                    name: "appendix.pdf".to_string(),
                    pages: 30,
                },
            ],
            options: PrintOptions {
                color: true,
                duplex: true,
                quantity: args.copies,
            },
        })
        .await?;

    println!(
        "order {} placed: {} pages, {} {}",
        created.order.uuid, created.order.total_pages, created.order.total_price, settings.currency
    );

    println!();
    println!("== best promotion ==");

    let now = Timestamp::now();
    let receipt = Receipt::from_quote(
        &platen::orders::OrderQuote {
            total_pages: created.order.total_pages,
            options: created.order.options,
            breakdown: created.breakdown.clone(),
        },
        &settings.currency,
    );

    let best = promotions
        .best_for_product(poster.uuid, Some(category.uuid), created.order.total_price, now)
        .await?
        .context("a seeded promotion should apply")?;

    println!(
        "applying `{}`: {} off, {} to pay",
        best.promotion.name, best.applied.discount_amount, best.applied.final_price
    );

    promotions.increment_usage(best.promotion.uuid).await?;

    println!();
    println!("{}", receipt.with_discount(&best.promotion.title, &best.applied).render());

    println!("== promotion statistics ==");

    let statistics = promotions.statistics(now).await?;

    println!(
        "{} promotions: {} active, {} scheduled, {} expired, {} paused",
        statistics.total,
        statistics.active,
        statistics.scheduled,
        statistics.expired,
        statistics.paused
    );

    Ok(())
}

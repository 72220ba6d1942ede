use clap::{Args, Subcommand};
use jiff::Timestamp;
use platen::promotions::Discount;
use platen_app::domain::promotions::PromotionsService;

use super::seed;

#[derive(Debug, Args)]
pub(crate) struct PromotionsCommand {
    #[command(subcommand)]
    command: PromotionsSubcommand,
}

#[derive(Debug, Subcommand)]
enum PromotionsSubcommand {
    /// List the sample promotions with derived status and usage
    List(ListArgs),
    /// Show aggregate promotion counts per status
    Stats(StatsArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Emit the listing as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct StatsArgs {
    /// Emit the counts as JSON instead of text
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run(command: PromotionsCommand) -> anyhow::Result<()> {
    let service = PromotionsService::default();

    seed::seed_promotions(&service, None, None).await?;

    let now = Timestamp::now();

    match command.command {
        PromotionsSubcommand::List(args) => list(&service, now, args).await,
        PromotionsSubcommand::Stats(args) => stats(&service, now, args).await,
    }
}

async fn list(service: &PromotionsService, now: Timestamp, args: ListArgs) -> anyhow::Result<()> {
    let overviews = service.list(now).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&overviews)?);

        return Ok(());
    }

    for overview in overviews {
        let usage = overview
            .usage_percentage
            .map_or_else(|| "unlimited".to_string(), |percent| format!("{percent}%"));

        println!(
            "[{:>2}] {}: {} ({}, usage {})",
            overview.promotion.priority,
            overview.promotion.name,
            describe_discount(&overview.promotion.discount),
            overview.status,
            usage,
        );
    }

    Ok(())
}

async fn stats(service: &PromotionsService, now: Timestamp, args: StatsArgs) -> anyhow::Result<()> {
    let statistics = service.statistics(now).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&statistics)?);

        return Ok(());
    }

    println!("total: {}", statistics.total);
    println!("active: {}", statistics.active);
    println!("scheduled: {}", statistics.scheduled);
    println!("expired: {}", statistics.expired);
    println!("paused: {}", statistics.paused);

    Ok(())
}

fn describe_discount(discount: &Discount) -> String {
    match discount {
        Discount::Percentage { percent } => format!("{percent}% off"),
        Discount::FixedAmount { amount } => format!("{amount} off"),
        Discount::Bundle { amount } => format!("bundle, {amount} off"),
    }
}

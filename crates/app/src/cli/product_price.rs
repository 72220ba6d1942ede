use anyhow::{Context, bail};
use clap::Args;
use platen::{fixtures, products::price_product};
use rustc_hash::FxHashMap;

#[derive(Debug, Args)]
pub(crate) struct ProductPriceArgs {
    /// Sample product name (`poster` or `business-cards`)
    #[arg(long)]
    product: String,

    /// Option selection as `name=token`; repeat per option
    #[arg(long = "select", value_name = "NAME=TOKEN")]
    selections: Vec<String>,

    /// Outer quantity multiplier
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Emit the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(args: ProductPriceArgs) -> anyhow::Result<()> {
    let Some((_, product)) = fixtures::catalog()
        .into_iter()
        .find(|(name, _)| *name == args.product)
    else {
        bail!("unknown sample product `{}`", args.product);
    };

    let mut selections = FxHashMap::default();

    for pair in &args.selections {
        let Some((name, token)) = pair.split_once('=') else {
            bail!("malformed selection `{pair}`; expected name=token");
        };

        selections.insert(name.to_string(), token.to_string());
    }

    let price = price_product(&product, &selections, args.quantity)
        .context("failed to price the product")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&price)?);

        return Ok(());
    }

    println!("base price: {}", product.base_price);

    for applied in &price.applied {
        println!(
            "{} ({}): {:+}",
            applied.option_label,
            applied.value_label,
            applied.price_modifier.minor()
        );
    }

    println!("unit price: {}", price.unit_price);
    println!("quantity: {}", price.quantity);
    println!("final price: {}", price.final_price);

    Ok(())
}

use anyhow::Context;
use clap::Args;
use platen::{
    orders::{Document, PrintOptions, quote},
    receipt::Receipt,
};
use platen_app::settings::Settings;

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Page count of one document; repeat per document
    #[arg(long = "pages", value_name = "N", required = true)]
    pages: Vec<u32>,

    /// Colour printing
    #[arg(long)]
    color: bool,

    /// Double-sided printing
    #[arg(long)]
    duplex: bool,

    /// Number of copies
    #[arg(long, default_value_t = 1)]
    copies: u32,

    /// Emit the quote as JSON instead of a receipt table
    #[arg(long)]
    json: bool,
}

pub(crate) fn run(args: QuoteArgs) -> anyhow::Result<()> {
    let config = Settings::from_env()?.pricing_config();

    let documents: Vec<Document> = args
        .pages
        .iter()
        .enumerate()
        .map(|(index, pages)| Document {
            name: format!("document-{}.pdf", index + 1),
            pages: *pages,
        })
        .collect();

    let options = PrintOptions {
        color: args.color,
        duplex: args.duplex,
        quantity: args.copies,
    };

    let quote = quote(&config, &documents, &options).context("failed to quote the order")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("{}", Receipt::from_quote(&quote, &config.currency).render());
    }

    Ok(())
}

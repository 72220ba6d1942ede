use clap::{Parser, Subcommand};

mod demo;
mod product_price;
mod promotions;
mod quote;
mod seed;

#[derive(Debug, Parser)]
#[command(name = "platen-app", about = "Platen print-shop CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Quote a print order for a set of documents
    Quote(quote::QuoteArgs),
    /// Price a fixture product against option selections
    ProductPrice(product_price::ProductPriceArgs),
    /// Inspect the seeded sample promotions
    Promotions(promotions::PromotionsCommand),
    /// Run the end-to-end walkthrough against the in-memory store
    Demo(demo::DemoArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Quote(args) => quote::run(args),
            Commands::ProductPrice(args) => product_price::run(args),
            Commands::Promotions(command) => promotions::run(command).await,
            Commands::Demo(args) => demo::run(args).await,
        }
    }
}

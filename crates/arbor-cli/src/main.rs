use std::sync::Arc;

use anyhow::{Context, Result};
use arbor_application::Storefront;
use arbor_core::catalog::ItemId;
use arbor_infrastructure::{ConfigService, HttpCatalogClient};
use clap::{Parser, Subcommand};

mod commands;
mod helper;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Arbor - browse the plant catalog and fill a cart", long_about = None)]
struct Cli {
    /// Catalog API base URL (overrides ARBOR_API_BASE_URL and config.toml)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog categories
    Categories {
        /// Print the UI tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// List plants, optionally for one category
    Plants {
        /// Category id
        #[arg(long)]
        category: Option<String>,
        /// Print the UI tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the details of one plant
    Detail {
        /// Plant id
        id: String,
        /// Print the UI tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive shop with categories, plant cards and a cart
    Shop,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    let config = ConfigService::new()
        .and_then(|service| service.resolve(cli.base_url.as_deref()))
        .context("Failed to resolve configuration")?;
    tracing::info!(api_base_url = %config.api_base_url, "using catalog API");

    let store = Storefront::new(Arc::new(HttpCatalogClient::from_config(&config)));

    match cli.command {
        Commands::Categories { json } => commands::catalog::categories(&store, json).await?,
        Commands::Plants { category, json } => {
            let category = category.map(ItemId::from);
            commands::catalog::plants(&store, category.as_ref(), json).await?
        }
        Commands::Detail { id, json } => {
            commands::catalog::detail(&store, &ItemId::from(id), json).await?
        }
        Commands::Shop => commands::shop::run(store).await?,
    }

    Ok(())
}

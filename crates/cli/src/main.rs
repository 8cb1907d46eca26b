//! HISTA STORE CLI - Browse the catalog and build WhatsApp orders.
//!
//! # Usage
//!
//! ```bash
//! # List every product
//! hista catalog
//!
//! # Games whose name contains "fifa"
//! hista catalog --category games --search fifa
//!
//! # Two FIFA 24 and one Adobe Photoshop, then print the WhatsApp link
//! hista checkout --add 1 --add 1 --add 3
//!
//! # Use a product file instead of the built-in catalog
//! hista catalog --catalog products.yaml
//! ```
//!
//! # Commands
//!
//! - `catalog` - List products filtered by category and name
//! - `checkout` - Fill a cart and print the order message and link

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hista_core::{CategoryFilter, ProductId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "hista")]
#[command(author, version, about = "HISTA STORE CLI tools")]
struct Cli {
    /// Product file (JSON or YAML) to use instead of the built-in catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Catalog {
        /// Category to show (`all`, `games`, `apps`)
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive text the product name must contain
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Build a cart and print the WhatsApp checkout link
    Checkout {
        /// Add one unit of a product (repeatable)
        #[arg(short, long = "add", value_name = "ID", required = true)]
        add: Vec<ProductId>,

        /// Remove one unit of a product (repeatable), applied after all adds
        #[arg(short, long = "remove", value_name = "ID")]
        remove: Vec<ProductId>,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hista_cli=info,hista_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = commands::load_catalog(cli.catalog.as_deref()).await?;

    match cli.command {
        Commands::Catalog { category, search } => {
            commands::catalog::list(&catalog, category, &search);
        }
        Commands::Checkout { add, remove } => {
            commands::checkout::run(&catalog, &add, &remove)?;
        }
    }
    Ok(())
}

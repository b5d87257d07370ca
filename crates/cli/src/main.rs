//! Retail Analytics CLI - schema export, store checks and ad-hoc aggregations.
//!
//! # Usage
//!
//! ```bash
//! # Print the GraphQL schema (no database needed)
//! ra-cli schema
//!
//! # Check that the store answers
//! ra-cli ping
//!
//! # Run an aggregation, print JSON rows
//! ra-cli top-products --seller-id 3442f8959a84dea7ee197c632cb2df15
//! ```
//!
//! Store commands read the same environment as the gateway
//! (`ANALYTICS_DATABASE_URL`, `ANALYTICS_QUERY_TIMEOUT_SECS`, ...).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::query::Aggregation;

#[derive(Parser)]
#[command(name = "ra-cli")]
#[command(author, version, about = "Retail Analytics CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the GraphQL schema (SDL)
    Schema,
    /// Check store connectivity
    Ping,
    /// Orders purchased between two dates, inclusive
    OrdersBetweenDates {
        /// Start date (YYYY-MM-DD or ISO timestamp)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD or ISO timestamp)
        #[arg(long)]
        end: String,
    },
    /// Top 5 customer zip codes for a seller
    TopZipCodes {
        #[arg(long)]
        seller_id: String,
    },
    /// Top 3 products of a seller
    TopProducts {
        #[arg(long)]
        seller_id: String,
    },
    /// Last 3 products ordered by a customer
    LastProducts {
        #[arg(long)]
        customer_id: String,
    },
    /// Top 5 sellers in a product category
    TopSellers {
        #[arg(long)]
        category: String,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Schema => commands::schema::print_sdl(),
        Commands::Ping => commands::ping::run().await?,
        Commands::OrdersBetweenDates { start, end } => {
            commands::query::run(Aggregation::OrdersBetweenDates { start, end }).await?;
        }
        Commands::TopZipCodes { seller_id } => {
            commands::query::run(Aggregation::TopZipCodes { seller_id }).await?;
        }
        Commands::TopProducts { seller_id } => {
            commands::query::run(Aggregation::TopProducts { seller_id }).await?;
        }
        Commands::LastProducts { customer_id } => {
            commands::query::run(Aggregation::LastProducts { customer_id }).await?;
        }
        Commands::TopSellers { category } => {
            commands::query::run(Aggregation::TopSellers { category }).await?;
        }
    }
    Ok(())
}

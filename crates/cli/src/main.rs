//! Salesboard CLI - Warehouse migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run warehouse database migrations
//! sb-cli migrate
//!
//! # Replace the warehouse contents with the built-in demo dataset
//! sb-cli seed
//!
//! # Run the dashboard metric catalog and print the results
//! sb-cli report
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run warehouse migrations
//! - `seed` - Load the demo dataset (local development only)
//! - `report` - Print the dashboard metrics to the terminal

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sb-cli")]
#[command(author, version, about = "Salesboard CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run warehouse database migrations
    Migrate,
    /// Replace the warehouse contents with the built-in demo dataset
    Seed,
    /// Run the dashboard metric catalog and print the results
    Report,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed => commands::seed::run().await?,
        Commands::Report => commands::report::run().await?,
    }
    Ok(())
}

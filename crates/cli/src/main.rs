//! Uneaten ingredients demo CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;
mod fixtures;
mod render;

/// Uneaten - category selection core with staged list reconciliation
#[derive(Parser)]
#[command(name = "uneaten")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted editing session and print every staged changeset
    Demo {
        /// Simulated persistence latency in milliseconds
        #[arg(long, default_value = "300")]
        latency_ms: u64,
        /// Diff the flat chicken/salad list instead of the grouped tree
        #[arg(long)]
        flat: bool,
    },
    /// Print the category tree (built-in fixture or a JSON file)
    Categories {
        /// Path to a JSON array of categories
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { latency_ms, flat } => cmd::demo::run(latency_ms, flat).await,
        Commands::Categories { file } => cmd::categories::run(file).await,
    }
}

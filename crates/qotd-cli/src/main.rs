//! qotd CLI
//!
//! Command-line interface for qotd - quote collection management.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qotd_core::QuoteStore;

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "qotd")]
#[command(about = "qotd - Local-first quote collection with remote sync")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a random quote (the default command)
    Show {
        /// Restrict to one category, overriding the saved filter
        #[arg(short, long)]
        category: Option<String>,
        /// Replay the last quote viewed this session
        #[arg(long, conflicts_with = "category")]
        last: bool,
    },
    /// Add a new quote
    Add {
        /// The quote text
        text: String,
        /// Category for the quote
        #[arg(short, long)]
        category: String,
    },
    /// List stored quotes
    #[command(alias = "ls")]
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List all categories
    Categories,
    /// Set the saved category filter ('all' to clear)
    Filter {
        /// Category name, or 'all'
        category: String,
    },
    /// Import quotes from a JSON file
    Import {
        /// Path to a JSON array of {text, category} records
        file: PathBuf,
    },
    /// Export all quotes to a JSON file
    Export {
        /// Destination path
        file: PathBuf,
    },
    /// Sync with the remote quote server
    Sync,
    /// Show status (storage, counts, sync)
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, server_url, sync_enabled, fetch_limit)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    init_logging();

    // Config commands don't need the store
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let mut store = QuoteStore::open()?;

    match cli.command {
        // No subcommand shows a random quote, like the bare widget did
        None => commands::quote::show(&store, None, false, &output),
        Some(Commands::Show { category, last }) => {
            commands::quote::show(&store, category, last, &output)
        }
        Some(Commands::Add { text, category }) => {
            commands::quote::add(&mut store, text, category, &output)
        }
        Some(Commands::List { category }) => commands::quote::list(&store, category, &output),
        Some(Commands::Categories) => commands::category::list(&store, &output),
        Some(Commands::Filter { category }) => {
            commands::category::set_filter(&mut store, category, &output)
        }
        Some(Commands::Import { file }) => commands::io::import(&mut store, file, &output),
        Some(Commands::Export { file }) => commands::io::export(&store, file, &output),
        Some(Commands::Sync) => commands::sync::sync(&mut store, &output).await,
        Some(Commands::Status) => commands::status::show(&store, &output),
        Some(Commands::Config { .. }) => unreachable!(), // Handled above
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Initialize stderr logging, filtered via RUST_LOG
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

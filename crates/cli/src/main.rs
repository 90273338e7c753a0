//! MAX PUBLISHING CLI - catalog and translation tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the catalog as a table, in Italian
//! mp-cli catalog list --lang it
//!
//! # Only one category
//! mp-cli catalog list --category poetry
//!
//! # Dump books and categories as JSON
//! mp-cli catalog export
//!
//! # Fail if any site text lacks a translation
//! mp-cli texts check
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use max_publishing_core::Language;

mod commands;

#[derive(Parser)]
#[command(name = "mp-cli")]
#[command(author, version, about = "MAX PUBLISHING CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the book catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect the site copy
    Texts {
        #[command(subcommand)]
        action: TextsAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print the books as a table
    List {
        /// Language for titles and prices (`en` or `it`)
        #[arg(short, long, default_value = "en")]
        lang: Language,

        /// Only books in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Print books and categories as JSON
    Export,
}

#[derive(Subcommand)]
enum TextsAction {
    /// Exit non-zero when a text is missing a language
    Check,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "max_publishing_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { lang, category } => {
                commands::catalog::list(lang, category.as_deref())?;
            }
            CatalogAction::Export => commands::catalog::export()?,
        },
        Commands::Texts { action } => match action {
            TextsAction::Check => commands::texts::check()?,
        },
    }
    Ok(())
}

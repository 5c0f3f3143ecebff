//! Pokedex CLI - offline catalog queries and dataset validation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use pokedex_core::{valid_types, Catalog, CatalogQuery};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Pokedex - read-only catalog lookup over a static dataset")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog with the same filters the HTTP API accepts
    Search {
        /// Dataset file path (embedded dataset when omitted)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Case-insensitive substring filter on the entry name
        #[arg(long)]
        name: Option<String>,

        /// Exact membership filter on the entry's type tags
        #[arg(long = "type")]
        type_tag: Option<String>,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the fixed type enumeration
    Types,

    /// Validate a dataset file
    Validate {
        /// Dataset file path
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pokedex_core=debug")
            .init();
    }

    match cli.command {
        Commands::Search {
            data,
            name,
            type_tag,
            format,
        } => search_command(data, name, type_tag, format),
        Commands::Types => types_command(),
        Commands::Validate { file } => validate_command(file),
    }
}

fn load_catalog(data: Option<PathBuf>) -> Result<Catalog> {
    match data {
        Some(path) => Catalog::from_path(&path)
            .with_context(|| format!("Failed to load dataset: {}", path.display())),
        None => Catalog::builtin().context("Failed to load embedded dataset"),
    }
}

fn search_command(
    data: Option<PathBuf>,
    name: Option<String>,
    type_tag: Option<String>,
    format: String,
) -> Result<()> {
    let catalog = load_catalog(data)?;
    let query = CatalogQuery { name, type_tag };
    let results = catalog.query(&query);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        _ => {
            println!("\n{} Search Results", "═".blue().bold());
            println!(
                "{} Matches: {} of {}",
                "▸".blue(),
                results.len(),
                catalog.len()
            );
            for entry in &results {
                println!("  {} ({})", entry.name, entry.types.join(", "));
            }
            if results.is_empty() {
                println!("  {}", "no entries matched".yellow());
            }
        }
    }

    Ok(())
}

fn types_command() -> Result<()> {
    for tag in valid_types() {
        println!("{}", tag);
    }
    Ok(())
}

fn validate_command(file: PathBuf) -> Result<()> {
    println!("{} Validating {}...", "→".blue(), file.display());

    match Catalog::from_path(&file) {
        Ok(catalog) => {
            println!("{} Dataset is valid!", "✓".green());
            println!("  Entries: {}", catalog.len());
        }
        Err(e) => {
            println!("{} Dataset is invalid:", "✗".red());
            println!("  {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

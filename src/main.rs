//! Storefront Scraper main entry point
//!
//! This is the command-line interface for the product catalog scraper.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use storefront_scraper::config::{load_config, validate, Config};
use storefront_scraper::crawler::{run_scrape, Category};
use storefront_scraper::output::{export, print_preview, ExportFormat};
use storefront_scraper::ResultSet;
use tracing_subscriber::EnvFilter;

/// Storefront Scraper: a polite product catalog harvester
///
/// Walks the paginated product listing of a store, follows every product to
/// its detail page for category and stock status, and exports the results.
#[derive(Parser, Debug)]
#[command(name = "storefront-scraper")]
#[command(version)]
#[command(about = "Web scraper for e-commerce products", long_about = None)]
struct Cli {
    /// Product category to scrape ("all" for the whole catalog)
    #[arg(long, default_value = "all")]
    category: String,

    /// Maximum listing pages to scrape [default: 3, or max-pages from config]
    #[arg(long)]
    pages: Option<u32>,

    /// Export to CSV
    #[arg(long)]
    csv: bool,

    /// Export to JSON
    #[arg(long)]
    json: bool,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the site root URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the delay before each request (milliseconds)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Override the CSV output path
    #[arg(long, value_name = "PATH")]
    csv_path: Option<String>,

    /// Override the JSON output path
    #[arg(long, value_name = "PATH")]
    json_path: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    let category: Category = cli.category.parse()?;

    tracing::info!(
        "Scraping {} (up to {} pages, {}ms between requests)",
        config.scraper.base_url,
        config.scraper.max_pages,
        config.scraper.delay_ms
    );

    let report = run_scrape(&config, &category)
        .await
        .context("failed to set up scraper")?;

    if cli.csv {
        run_export(&report.results, ExportFormat::Csv, Path::new(&config.output.csv_path));
    }
    if cli.json {
        run_export(&report.results, ExportFormat::Json, Path::new(&config.output.json_path));
    }

    if !cli.csv && !cli.json {
        print_preview(&report.results);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("storefront_scraper=info,warn"),
            1 => EnvFilter::new("storefront_scraper=debug,info"),
            2 => EnvFilter::new("storefront_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (or defaults) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(pages) = cli.pages {
        config.scraper.max_pages = pages;
    }
    if let Some(base_url) = &cli.base_url {
        config.scraper.base_url = base_url.clone();
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.scraper.delay_ms = delay_ms;
    }
    if let Some(csv_path) = &cli.csv_path {
        config.output.csv_path = csv_path.clone();
    }
    if let Some(json_path) = &cli.json_path {
        config.output.json_path = json_path.clone();
    }

    validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Runs one export; a failure is reported and the other exports still run
///
/// Returns the number of products written, if any.
fn run_export(results: &ResultSet, format: ExportFormat, path: &Path) -> Option<usize> {
    match export(results, format, path) {
        Ok(0) => None,
        Ok(count) => {
            println!("Successfully exported {} products to {}", count, path.display());
            Some(count)
        }
        Err(e) => {
            tracing::error!("Error exporting to {}: {}", format, e);
            None
        }
    }
}

//! Crawler module for listing traversal and product extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with a politeness delay before every request
//! - Listing page parsing into product cards
//! - Detail page enrichment
//! - Pagination control and record accumulation

mod detail;
mod driver;
mod fetcher;
mod listing;
mod rate_limiter;
mod selectors;

pub use detail::{classify_stock, enrich, parse_detail, Enrichment};
pub use driver::{merge_record, ScrapeReport, Scraper, StopReason, DEFAULT_IN_STOCK};
pub use fetcher::{build_http_client, FetchError, HttpFetcher, PageFetcher};
pub use listing::{
    extract_candidates, parse_listing, parse_price, parse_rating, CandidateCard, CardError,
    ParsedCard,
};
pub use rate_limiter::{FixedDelay, RateLimiter};
pub use selectors::Selectors;

pub use crate::url::Category;

use crate::config::Config;

/// Runs a complete scrape with the HTTP fetcher described by `config`
///
/// This is the main entry point for a scrape. It will:
/// 1. Build the HTTP client and politeness delay
/// 2. Compile the selectors and parse the base URL
/// 3. Walk listing pages up to `config.scraper.max_pages`
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `category` - Catalog section to walk
///
/// # Returns
///
/// * `Ok(ScrapeReport)` - The scrape ran; fetch and parse problems are
///   reflected in the report, not as errors
/// * `Err(ScraperError)` - The scraper could not be set up
///
/// # Example
///
/// ```no_run
/// use storefront_scraper::config::Config;
/// use storefront_scraper::crawler::{run_scrape, Category};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_scrape(&Config::default(), &Category::All).await?;
/// println!("{} products", report.results.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: &Config, category: &Category) -> crate::Result<ScrapeReport> {
    let fetcher: HttpFetcher = HttpFetcher::from_config(&config.scraper)?;
    let scraper = Scraper::from_config(fetcher, config)?;
    Ok(scraper
        .scrape_with_report(category, config.scraper.max_pages)
        .await)
}

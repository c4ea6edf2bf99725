//! Pagination driver - main scrape orchestration logic
//!
//! This module walks listing pages in order, hands each page to the listing
//! parser, enriches every surviving card from its detail page, and collects
//! the merged records. Everything runs strictly in sequence: one request is
//! in flight at a time and results keep page order, then card order.

use crate::config::Config;
use crate::crawler::detail::{enrich, Enrichment};
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::listing::{parse_listing, ParsedCard};
use crate::crawler::selectors::Selectors;
use crate::record::{Record, ResultSet};
use crate::url::{listing_url, parse_base_url, Category};
use std::fmt;
use url::Url;

/// Stock flag used when the detail page gave no answer
pub const DEFAULT_IN_STOCK: bool = true;

/// Why pagination ended
///
/// All three are normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The listing page could not be fetched
    FetchFailed { page: u32 },
    /// The listing page had no usable product cards
    Exhausted { page: u32 },
    /// Every page up to the ceiling was scraped
    PageLimit { max_pages: u32 },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed { page } => write!(f, "page {} could not be fetched", page),
            Self::Exhausted { page } => write!(f, "no more products on page {}", page),
            Self::PageLimit { max_pages } => write!(f, "reached the {} page limit", max_pages),
        }
    }
}

/// Outcome of one scrape run
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    /// Records in page order, then card order
    pub results: ResultSet,

    pub stop_reason: StopReason,

    /// Listing pages that were fetched successfully
    pub pages_fetched: u32,

    /// Cards that passed parsing across all pages
    pub cards_parsed: usize,
}

/// Builds the final record from a parsed card and its enrichment
///
/// Enrichment fields win only when present; an unknown stock status falls
/// back to [`DEFAULT_IN_STOCK`].
pub fn merge_record(card: ParsedCard, enrichment: Enrichment) -> Record {
    let in_stock = enrichment.in_stock.unwrap_or_else(|| {
        tracing::debug!("Stock status unknown for {}, assuming in stock", card.url);
        DEFAULT_IN_STOCK
    });

    Record {
        name: card.name,
        price: card.price,
        description: card.description,
        rating: card.rating,
        url: card.url,
        category: enrichment.category,
        in_stock,
    }
}

/// Main scraper structure
///
/// Owns the fetcher for the whole run, so the politeness pacing inside it is
/// shared by listing and detail requests alike.
pub struct Scraper<F> {
    fetcher: F,
    base_url: Url,
    selectors: Selectors,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(fetcher: F, base_url: Url, selectors: Selectors) -> Self {
        Self {
            fetcher,
            base_url,
            selectors,
        }
    }

    /// Creates a scraper using the base URL and selectors from `config`
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to scrape
    /// * `Err(ScraperError)` - The base URL or a selector is invalid
    pub fn from_config(fetcher: F, config: &Config) -> crate::Result<Self> {
        let base_url = parse_base_url(&config.scraper.base_url)?;
        let selectors = Selectors::compile(&config.selectors)?;
        Ok(Self::new(fetcher, base_url, selectors))
    }

    /// Scrapes up to `max_pages` listing pages and returns the records
    pub async fn scrape(&self, category: &Category, max_pages: u32) -> ResultSet {
        self.scrape_with_report(category, max_pages).await.results
    }

    /// Scrapes up to `max_pages` listing pages
    ///
    /// # Pagination
    ///
    /// Starting at page 1:
    /// 1. Build the listing URL for the page
    /// 2. Fetch it; a failed fetch stops the run
    /// 3. Parse it; a page with no usable cards stops the run
    /// 4. Enrich and merge every card, appending to the results
    /// 5. Move to the next page, stopping once `max_pages` is passed
    ///
    /// Nothing is retried. A failed page ends the run and a failed card is
    /// dropped.
    pub async fn scrape_with_report(&self, category: &Category, max_pages: u32) -> ScrapeReport {
        tracing::info!("Starting scrape for category: {}", category);

        let mut results = ResultSet::new();
        let mut pages_fetched = 0;
        let mut cards_parsed = 0;
        let mut page: u32 = 1;

        let stop_reason = loop {
            if page > max_pages {
                break StopReason::PageLimit { max_pages };
            }

            let url = match listing_url(&self.base_url, category, page) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!("Cannot build listing URL for page {}: {}", page, e);
                    break StopReason::FetchFailed { page };
                }
            };

            tracing::info!("Scraping page {}: {}", page, url);

            let Some(body) = self.fetcher.fetch(url.as_str()).await else {
                break StopReason::FetchFailed { page };
            };
            pages_fetched += 1;

            let cards = parse_listing(&body, &self.base_url, &self.selectors);
            if cards.is_empty() {
                tracing::info!("No more products found");
                break StopReason::Exhausted { page };
            }
            cards_parsed += cards.len();

            for card in cards {
                let enrichment = enrich(&self.fetcher, &card.url, &self.selectors).await;
                results.push(merge_record(card, enrichment));
            }

            page += 1;
        };

        tracing::info!(
            "Scrape finished: {} products from {} pages ({})",
            results.len(),
            pages_fetched,
            stop_reason
        );

        ScrapeReport {
            results,
            stop_reason,
            pages_fetched,
            cards_parsed,
        }
    }
}

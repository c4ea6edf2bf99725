//! Detail page enrichment
//!
//! Reads the category and stock status from a product's own page. Both
//! fields are optional and extracted independently; nothing here fails.

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::selectors::Selectors;
use scraper::Html;
use url::Url;

/// Supplementary fields from a detail page
///
/// `None` means the page did not say, which is kept distinct from an explicit
/// answer until the record is merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl Enrichment {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.in_stock.is_none()
    }
}

/// Classifies stock status text; any case of "in stock" counts as available
pub fn classify_stock(text: &str) -> bool {
    text.to_lowercase().contains("in stock")
}

/// Extracts enrichment fields from a detail page body
///
/// The category is the trimmed text of the last breadcrumb match; blank
/// text counts as absent. The stock flag comes from the first stock-status
/// element.
pub fn parse_detail(html: &str, selectors: &Selectors) -> Enrichment {
    let document = Html::parse_document(html);

    let category = document
        .select(&selectors.breadcrumb)
        .last()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty());

    let in_stock = document
        .select(&selectors.stock_status)
        .next()
        .map(|el| classify_stock(&el.text().collect::<String>()));

    Enrichment { category, in_stock }
}

/// Fetches a product's detail page and extracts its enrichment
///
/// A failed fetch yields an empty enrichment; the fetcher has already logged
/// the cause.
pub async fn enrich<F: PageFetcher + ?Sized>(
    fetcher: &F,
    url: &Url,
    selectors: &Selectors,
) -> Enrichment {
    match fetcher.fetch(url.as_str()).await {
        Some(body) => {
            let enrichment = parse_detail(&body, selectors);
            if enrichment.is_empty() {
                tracing::debug!("No category or stock status found on {}", url);
            }
            enrichment
        }
        None => Enrichment::default(),
    }
}

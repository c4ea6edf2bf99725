use serde::Deserialize;

/// Site the scraper targets when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://scrape-test-site.vercel.app";

/// Desktop browser identity sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure
///
/// Every section and field has a default, so an empty file (or no file at all)
/// yields a working configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub output: OutputConfig,
    pub selectors: SelectorConfig,
}

/// Fetching and pagination behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScraperConfig {
    /// Root of the target site; listing and detail links resolve against it
    pub base_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Pause before every request (milliseconds)
    pub delay_ms: u64,

    /// Whole-request timeout (seconds)
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    pub connect_timeout_secs: u64,

    /// Upper bound on listing pages fetched in one run
    pub max_pages: u32,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            delay_ms: 1000,
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_pages: 3,
        }
    }
}

/// Export destinations
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    pub csv_path: String,
    pub json_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "products.csv".to_string(),
            json_path: "products.json".to_string(),
        }
    }
}

/// CSS selectors describing the site's markup
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SelectorConfig {
    /// One match per product card on a listing page
    pub card: String,
    pub name: String,
    pub price: String,
    pub description: String,
    /// Element carrying the rating attribute
    pub rating: String,
    /// Attribute on the rating element holding the numeric rating
    pub rating_attr: String,
    /// First match inside a card links to the detail page
    pub link: String,
    /// Last match on a detail page names the category
    pub breadcrumb: String,
    pub stock_status: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            card: ".product-card".to_string(),
            name: ".product-name".to_string(),
            price: ".product-price".to_string(),
            description: ".product-description".to_string(),
            rating: ".product-rating".to_string(),
            rating_attr: "data-rating".to_string(),
            link: "a".to_string(),
            breadcrumb: ".breadcrumb a:last-child".to_string(),
            stock_status: ".stock-status".to_string(),
        }
    }
}

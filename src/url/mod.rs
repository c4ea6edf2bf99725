//! URL handling module
//!
//! This module provides base URL parsing, listing page URL construction for
//! each category, and resolution of card links against the site root.

mod listing;
mod resolve;

pub use listing::{listing_url, Category};
pub use resolve::resolve_link;

use crate::{UrlError, UrlResult};
use url::Url;

/// Parses a site root URL and checks that links can be resolved against it
///
/// # Examples
///
/// ```
/// use storefront_scraper::url::parse_base_url;
///
/// let base = parse_base_url("https://shop.example.com").unwrap();
/// assert_eq!(base.as_str(), "https://shop.example.com/");
/// assert!(parse_base_url("mailto:shop@example.com").is_err());
/// ```
pub fn parse_base_url(base_url: &str) -> UrlResult<Url> {
    let url = Url::parse(base_url).map_err(|e| UrlError::Parse(format!("{}: {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.cannot_be_a_base() {
        return Err(UrlError::CannotBeABase(base_url.to_string()));
    }

    Ok(url)
}

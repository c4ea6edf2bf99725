//! Product records and the ordered result set produced by one scrape
//!
//! This module defines:
//! - `Record`: one fully merged product
//! - `ResultSet`: the append-only collection handed to the export layer

mod result_set;

pub use result_set::ResultSet;

use serde::Serialize;
use url::Url;

/// One scraped product
///
/// Built exactly once per successfully parsed card and never mutated
/// afterward. Field order here is the column order of every export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Product name, trimmed and non-empty
    pub name: String,

    /// Non-negative price with the currency symbol removed
    pub price: f64,

    /// Card description, empty when the card has none
    pub description: String,

    /// Numeric rating as published by the site
    pub rating: f64,

    /// Absolute URL of the product's detail page
    pub url: Url,

    /// Last breadcrumb segment of the detail page, if it could be read
    pub category: Option<String>,

    /// Stock flag from the detail page, `true` when unknown
    pub in_stock: bool,
}

use crate::{UrlError, UrlResult};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Which part of the catalog to walk
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Category {
    /// The whole catalog (`/products`)
    #[default]
    All,
    /// One category (`/products/{name}`)
    Named(String),
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    /// `"all"` and the empty string select the whole catalog
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Named(s.to_string()))
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Builds the listing URL for one page of a category
///
/// The `products` segments are appended to whatever path the base already
/// has, and the category name is percent-encoded as a single segment.
///
/// # Examples
///
/// ```
/// use storefront_scraper::url::{listing_url, Category};
/// use url::Url;
///
/// let base = Url::parse("https://shop.example.com").unwrap();
/// let all = listing_url(&base, &Category::All, 2).unwrap();
/// assert_eq!(all.as_str(), "https://shop.example.com/products?page=2");
///
/// let books = listing_url(&base, &Category::Named("books".into()), 1).unwrap();
/// assert_eq!(books.as_str(), "https://shop.example.com/products/books?page=1");
/// ```
pub fn listing_url(base: &Url, category: &Category, page: u32) -> UrlResult<Url> {
    let mut url = base.clone();
    url.set_fragment(None);
    url.set_query(None);

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| UrlError::CannotBeABase(base.to_string()))?;
        segments.pop_if_empty().push("products");
        if let Category::Named(name) = category {
            segments.push(name);
        }
    }

    url.query_pairs_mut()
        .append_pair("page", &page.to_string());

    Ok(url)
}

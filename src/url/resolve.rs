use url::Url;

/// Resolves a card link against the site root
///
/// Returns None if the link cannot point at a product page:
/// - empty or fragment-only hrefs
/// - javascript:, mailto:, tel:, data: schemes
/// - hrefs that fail to join onto the base
/// - non-HTTP(S) URLs after resolution
///
/// # Examples
///
/// ```
/// use storefront_scraper::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://shop.example.com").unwrap();
/// let url = resolve_link("/products/42", &base).unwrap();
/// assert_eq!(url.as_str(), "https://shop.example.com/products/42");
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    let absolute = base_url.join(href).ok()?;
    match absolute.scheme() {
        "http" | "https" => Some(absolute),
        _ => None,
    }
}

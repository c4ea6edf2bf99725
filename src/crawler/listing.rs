//! Listing page parser
//!
//! Turns one listing page into product cards. Each card is handled on its
//! own: a card with a missing or malformed required field is logged and
//! dropped, and the rest of the page carries on.

use crate::crawler::selectors::Selectors;
use crate::url::resolve_link;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

/// Symbols stripped from price text before numeric conversion
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£'];

/// Raw strings pulled from one card, before any type conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCard {
    pub name: String,
    pub price_text: String,
    pub description: Option<String>,
    pub rating_text: String,
    pub href: String,
}

/// A card whose required fields converted cleanly
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCard {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub rating: f64,
    pub url: Url,
}

/// Why a card was dropped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("product name is empty")]
    EmptyName,

    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    #[error("invalid rating '{0}'")]
    InvalidRating(String),

    #[error("unusable product link '{0}'")]
    InvalidLink(String),
}

impl CandidateCard {
    /// Converts raw card text into typed fields
    ///
    /// Name, price, rating and link are required. A missing description
    /// becomes an empty string.
    pub fn parse(self, base_url: &Url) -> Result<ParsedCard, CardError> {
        if self.name.is_empty() {
            return Err(CardError::EmptyName);
        }

        let price = parse_price(&self.price_text)
            .ok_or_else(|| CardError::InvalidPrice(self.price_text.clone()))?;

        let url = resolve_link(&self.href, base_url)
            .ok_or_else(|| CardError::InvalidLink(self.href.clone()))?;

        let rating = parse_rating(&self.rating_text)
            .ok_or_else(|| CardError::InvalidRating(self.rating_text.clone()))?;

        Ok(ParsedCard {
            name: self.name,
            price,
            description: self.description.unwrap_or_default(),
            rating,
            url,
        })
    }
}

/// Parses a currency-prefixed price such as `"$1,299.00"`
///
/// Returns None for anything that is not a finite, non-negative number once
/// currency symbols, thousands separators and surrounding whitespace are
/// removed. A comma is only a thousands separator when it sits between
/// groups of exactly three digits; `"7,50"` is rejected rather than read as
/// `750`.
///
/// # Examples
///
/// ```
/// use storefront_scraper::crawler::parse_price;
///
/// assert_eq!(parse_price("$19.99"), Some(19.99));
/// assert_eq!(parse_price("$"), None);
/// assert_eq!(parse_price("€7,50"), None);
/// ```
pub fn parse_price(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| CURRENCY_SYMBOLS.contains(&c) || c.is_whitespace());
    let cleaned = strip_thousands_separators(trimmed)?;

    let price: f64 = cleaned.parse().ok()?;
    (price.is_finite() && price >= 0.0).then_some(price)
}

/// Removes `,` group separators from the integer part of a number
///
/// None if a comma appears anywhere it could not be a thousands separator.
fn strip_thousands_separators(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }

    let (integer, fraction) = match text.find('.') {
        Some(dot) => text.split_at(dot),
        None => (text, ""),
    };
    if fraction.contains(',') {
        return None;
    }

    let mut groups = integer.split(',');
    let lead = groups.next()?;
    let lead_ok = (1..=3).contains(&lead.len()) && lead.chars().all(|c| c.is_ascii_digit());
    let rest_ok = groups
        .clone()
        .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()));
    if !lead_ok || !rest_ok {
        return None;
    }

    let mut cleaned: String = std::iter::once(lead).chain(groups).collect();
    cleaned.push_str(fraction);
    Some(cleaned)
}

/// Parses a rating attribute value
pub fn parse_rating(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

/// Pulls raw fields from every card on the page, in document order
///
/// An empty vector means the page has no product cards at all.
pub fn extract_candidates(html: &str, selectors: &Selectors) -> Vec<Result<CandidateCard, CardError>> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.card)
        .map(|card| extract_candidate(&card, selectors))
        .collect()
}

fn extract_candidate(card: &ElementRef, selectors: &Selectors) -> Result<CandidateCard, CardError> {
    let name = select_text(card, &selectors.name).ok_or(CardError::MissingField("name"))?;
    let price_text = select_text(card, &selectors.price).ok_or(CardError::MissingField("price"))?;
    let description = select_text(card, &selectors.description);
    let rating_text = card
        .select(&selectors.rating)
        .next()
        .and_then(|el| el.value().attr(&selectors.rating_attr))
        .map(str::to_string)
        .ok_or(CardError::MissingField("rating"))?;
    let href = card
        .select(&selectors.link)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
        .ok_or(CardError::MissingField("link"))?;

    Ok(CandidateCard {
        name,
        price_text,
        description,
        rating_text,
        href,
    })
}

/// Trimmed text of the first match under `element`
fn select_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// Parses a listing page into the cards worth keeping
///
/// Malformed cards are logged and skipped; the relative order of the valid
/// ones is preserved.
///
/// # Arguments
///
/// * `html` - Raw listing page body
/// * `base_url` - Site root used to resolve card links
/// * `selectors` - Compiled selectors for the site
pub fn parse_listing(html: &str, base_url: &Url, selectors: &Selectors) -> Vec<ParsedCard> {
    let candidates = extract_candidates(html, selectors);
    let total = candidates.len();

    let cards: Vec<ParsedCard> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            match candidate.and_then(|c| c.parse(base_url)) {
                Ok(card) => Some(card),
                Err(e) => {
                    tracing::warn!("Error parsing product card {}: {}", index + 1, e);
                    None
                }
            }
        })
        .collect();

    tracing::debug!("Parsed {} of {} product cards", cards.len(), total);
    cards
}

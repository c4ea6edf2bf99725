//! Integration tests for the scraper
//!
//! These tests use wiremock to serve a small storefront and run the full
//! pipeline against it: real HTTP fetcher, listing parser, detail enrichment,
//! pagination and export.

mod scrape_tests;

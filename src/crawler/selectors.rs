//! Compiled CSS selectors for listing and detail pages

use crate::config::SelectorConfig;
use crate::{ConfigError, ConfigResult};
use scraper::Selector;

/// Selector set compiled once per run from [`SelectorConfig`]
#[derive(Debug, Clone)]
pub struct Selectors {
    pub card: Selector,
    pub name: Selector,
    pub price: Selector,
    pub description: Selector,
    pub rating: Selector,
    pub rating_attr: String,
    pub link: Selector,
    pub breadcrumb: Selector,
    pub stock_status: Selector,
}

impl Selectors {
    /// Compiles every selector in the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Selectors)` - All selectors parsed
    /// * `Err(ConfigError::InvalidSelector)` - The first selector that failed to parse
    pub fn compile(config: &SelectorConfig) -> ConfigResult<Self> {
        Ok(Self {
            card: compile_one(&config.card)?,
            name: compile_one(&config.name)?,
            price: compile_one(&config.price)?,
            description: compile_one(&config.description)?,
            rating: compile_one(&config.rating)?,
            rating_attr: config.rating_attr.trim().to_string(),
            link: compile_one(&config.link)?,
            breadcrumb: compile_one(&config.breadcrumb)?,
            stock_status: compile_one(&config.stock_status)?,
        })
    }
}

fn compile_one(selector: &str) -> ConfigResult<Selector> {
    if selector.trim().is_empty() {
        return Err(ConfigError::InvalidSelector {
            selector: selector.to_string(),
            message: "selector cannot be empty".to_string(),
        });
    }

    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

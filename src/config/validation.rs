use crate::config::types::{Config, OutputConfig, ScraperConfig, SelectorConfig};
use crate::crawler::Selectors;
use crate::url::parse_base_url;
use crate::{ConfigError, ConfigResult};

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_scraper_config(&config.scraper)?;
    validate_output_config(&config.output)?;
    validate_selector_config(&config.selectors)?;
    Ok(())
}

/// Validates fetching and pagination settings
fn validate_scraper_config(config: &ScraperConfig) -> ConfigResult<()> {
    validate_base_url(&config.base_url)?;

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates the site root: it must be an absolute http(s) URL that relative
/// links can be joined onto
fn validate_base_url(base_url: &str) -> ConfigResult<()> {
    parse_base_url(base_url)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidUrl(format!("base_url '{}': {}", base_url, e)))
}

/// Validates export destinations
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    if config.json_path.is_empty() {
        return Err(ConfigError::Validation(
            "json_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates selectors by compiling them
fn validate_selector_config(config: &SelectorConfig) -> ConfigResult<()> {
    if config.rating_attr.trim().is_empty() {
        return Err(ConfigError::Validation(
            "rating_attr cannot be empty".to_string(),
        ));
    }

    Selectors::compile(config).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("https://example.com").is_ok());
        assert!(validate_base_url("http://127.0.0.1:8080/shop/").is_ok());

        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("example.com").is_err());
        assert!(validate_base_url("ftp://example.com").is_err());
        assert!(validate_base_url("mailto:shop@example.com").is_err());
    }

    #[test]
    fn test_base_url_errors_report_invalid_url() {
        let mut config = Config::default();
        config.scraper.base_url = "ftp://example.com".to_string();

        match validate(&config) {
            Err(ConfigError::InvalidUrl(message)) => {
                assert!(message.contains("ftp://example.com"));
                assert!(message.contains("Invalid URL scheme"));
            }
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = Config::default();
        config.scraper.user_agent = "   ".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.scraper.timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_max_pages_allowed() {
        let mut config = Config::default();
        config.scraper.max_pages = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let mut config = Config::default();
        config.output.json_path = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_bad_selector_rejected() {
        let mut config = Config::default();
        config.selectors.card = "div[".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSelector { .. })
        ));
    }
}

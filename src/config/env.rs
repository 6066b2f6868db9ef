// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use crate::errors::FinderError;
use crate::models::UnresolvedRegionPolicy;
use crate::services::FinderOptions;
use dotenv::dotenv;
use std::env;
use std::str::FromStr;

/// Default number of ranked pairs returned per request
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Default minimum number of distinct categories a request must name
pub const DEFAULT_MIN_CATEGORIES: usize = 2;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup and pass it down;
/// nothing else reads the environment afterwards
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8003)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Maps Platform API key (geocoding, places, distance matrix)
    pub google_maps_api_key: String,

    /// Base URL of the Google Maps web services
    pub maps_base_url: String,

    /// Timeout applied to every outbound request, in seconds
    pub request_timeout_secs: u64,

    /// Number of closest pairs returned
    pub max_results: usize,

    /// Minimum number of categories a request must contain
    pub min_categories: usize,

    /// What to do when the region geocodes to nothing
    pub unresolved_region_policy: UnresolvedRegionPolicy,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: parse_or("SERVER_PORT", 8003),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default(),

            maps_base_url: env::var("MAPS_BASE_URL")
                .unwrap_or_else(|_| "https://maps.googleapis.com/maps/api".to_string()),

            request_timeout_secs: parse_or("REQUEST_TIMEOUT_SECS", 10),

            max_results: parse_or("MAX_RESULTS", DEFAULT_MAX_RESULTS),

            min_categories: parse_or("MIN_CATEGORIES", DEFAULT_MIN_CATEGORIES),

            unresolved_region_policy: env::var("UNRESOLVED_REGION_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), FinderError> {
        if self.google_maps_api_key.trim().is_empty() {
            return Err(FinderError::Configuration(
                "GOOGLE_MAPS_API_KEY is required (create a .env file with your API key)"
                    .to_string(),
            ));
        }

        if self.max_results == 0 {
            return Err(FinderError::Configuration(
                "MAX_RESULTS must be at least 1".to_string(),
            ));
        }

        if self.min_categories < 2 {
            return Err(FinderError::Configuration(
                "MIN_CATEGORIES must be at least 2".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            log::warn!("REQUEST_TIMEOUT_SECS is 0 - outbound requests will not time out");
        }

        Ok(())
    }

    /// Finder tuning derived from this configuration
    pub fn finder_options(&self) -> FinderOptions {
        FinderOptions {
            max_results: self.max_results,
            min_categories: self.min_categories,
            unresolved_region: self.unresolved_region_policy,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_address: "127.0.0.1".to_string(),
            server_port: 8003,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            google_maps_api_key: "test_key".to_string(),
            maps_base_url: "http://localhost:9999".to_string(),
            request_timeout_secs: 5,
            max_results: DEFAULT_MAX_RESULTS,
            min_categories: DEFAULT_MIN_CATEGORIES,
            unresolved_region_policy: UnresolvedRegionPolicy::Origin,
        }
    }

    #[test]
    fn test_validate_requires_api_key() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.google_maps_api_key = "   ".to_string();
        assert!(matches!(
            config.validate(),
            Err(FinderError::Configuration(ref msg)) if msg.contains("GOOGLE_MAPS_API_KEY")
        ));
    }

    #[test]
    fn test_validate_limits() {
        let mut config = test_config();
        config.max_results = 0;
        assert!(matches!(
            config.validate(),
            Err(FinderError::Configuration(_))
        ));

        let mut config = test_config();
        config.min_categories = 1;
        assert!(matches!(
            config.validate(),
            Err(FinderError::Configuration(_))
        ));
    }

    #[test]
    fn test_finder_options() {
        let mut config = test_config();
        config.max_results = 5;
        config.unresolved_region_policy = UnresolvedRegionPolicy::Reject;

        let options = config.finder_options();
        assert_eq!(options.max_results, 5);
        assert_eq!(options.min_categories, 2);
        assert_eq!(options.unresolved_region, UnresolvedRegionPolicy::Reject);
    }

    #[test]
    fn test_parse_or_falls_back() {
        assert_eq!(parse_or("LOCATION_FINDER_TEST_UNSET_VAR", 42usize), 42);
    }
}

//! Console Configuration
//!
//! Values are baked in at build time (`trunk build` inherits the environment),
//! falling back to the defaults the backend ships with.

use std::time::Duration;

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Delay between typewriter frames during AI autofill
pub const TYPING_INTERVAL_MS: u32 = 20;
/// Pause after a drive is created before showing the drive list
pub const REDIRECT_DELAY_MS: u32 = 1_400;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("PLACEMENT_API_URL"),
            option_env!("PLACEMENT_TIMEOUT_MS"),
            option_env!("PLACEMENT_LOG_LEVEL"),
        )
    }

    /// Build from raw values; anything missing or unparsable uses the default
    pub fn from_values(api_url: Option<&str>, timeout_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let timeout_ms = timeout_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let log_level = log_level
            .and_then(|v| v.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = AppConfig::from_values(Some("https://api.example.edu/"), Some("5000"), Some("debug"));
        assert_eq!(config.api_base_url, "https://api.example.edu");
        assert_eq!(config.request_timeout, Duration::from_millis(5000));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("soon"), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = AppConfig::from_values(None, Some("0"), None);
        assert_eq!(config.request_timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }
}

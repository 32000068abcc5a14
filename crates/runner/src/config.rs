//! Configuration loading for the Meas CLI
//!
//! Sources, later ones winning:
//! - built-in defaults
//! - a JSON file passed with `--config`
//! - `MEAS_*` environment variables
//! - command line flags (`--lang`, `--mock`)

use chrono::Duration;
use meas_core::{ConversionTable, GoldUnit};
use meas_i18n::Language;
use meas_pricefeed::{CachePolicy, GoldApiConfig, MockPriceConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_LANG: &str = "MEAS_LANG";
pub const ENV_STORE: &str = "MEAS_STORE";
pub const ENV_PRICE_URL: &str = "MEAS_PRICE_URL";
pub const ENV_MOCK_PRICE: &str = "MEAS_MOCK_PRICE";
pub const ENV_DOMLANG_TO_XI: &str = "MEAS_DOMLANG_TO_XI";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    fn invalid(key: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display language; the saved preference is used when unset
    pub language: Option<Language>,

    /// JSON file holding the form, language preference and price cache
    pub store_path: PathBuf,

    pub price_api_url: String,
    pub price_symbol: String,
    pub request_timeout_secs: u64,

    /// Use the offline random-walk source instead of the API
    pub mock_price: bool,
    /// Starting price per ounce for the offline source
    pub mock_initial_price: f64,

    /// Xi per domlang
    pub domlang_to_xi: f64,

    /// Freshness window for cached quotes while the market is open
    pub cache_ttl_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api = GoldApiConfig::default();
        Self {
            language: None,
            store_path: PathBuf::from("meas-data.json"),
            price_api_url: api.base_url,
            price_symbol: api.symbol,
            request_timeout_secs: api.timeout.as_secs(),
            mock_price: false,
            mock_initial_price: MockPriceConfig::default().initial_price,
            domlang_to_xi: ConversionTable::STANDARD.domlang_to_xi,
            cache_ttl_secs: CachePolicy::default().open_ttl.num_seconds(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Load configuration from a JSON string; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MEAS_*` overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `MEAS_*` overrides read through `lookup`
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(code) = lookup(ENV_LANG) {
            let language = code
                .parse::<Language>()
                .map_err(|e| ConfigError::invalid(ENV_LANG, e.to_string()))?;
            self.language = Some(language);
        }
        if let Some(path) = lookup(ENV_STORE) {
            self.store_path = PathBuf::from(path);
        }
        if let Some(url) = lookup(ENV_PRICE_URL) {
            self.price_api_url = url;
        }
        if let Some(flag) = lookup(ENV_MOCK_PRICE) {
            self.mock_price = parse_flag(&flag)
                .ok_or_else(|| ConfigError::invalid(ENV_MOCK_PRICE, format!("not a boolean: {}", flag)))?;
        }
        if let Some(factor) = lookup(ENV_DOMLANG_TO_XI) {
            self.domlang_to_xi = factor
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid(ENV_DOMLANG_TO_XI, format!("not a number: {}", factor)))?;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.domlang_to_xi.is_finite() && self.domlang_to_xi > 0.0) {
            return Err(ConfigError::invalid(
                "domlang_to_xi",
                format!("must be a positive number, got {}", self.domlang_to_xi),
            ));
        }
        if !(self.mock_initial_price.is_finite() && self.mock_initial_price > 0.0) {
            return Err(ConfigError::invalid(
                "mock_initial_price",
                format!("must be a positive number, got {}", self.mock_initial_price),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid("request_timeout_secs", "must be at least 1"));
        }
        if self.cache_ttl_secs <= 0 {
            return Err(ConfigError::invalid("cache_ttl_secs", "must be at least 1"));
        }
        if Duration::try_seconds(self.cache_ttl_secs).is_none() {
            return Err(ConfigError::invalid(
                "cache_ttl_secs",
                format!("out of range: {}", self.cache_ttl_secs),
            ));
        }
        if self.price_api_url.trim().is_empty() {
            return Err(ConfigError::invalid("price_api_url", "must not be empty"));
        }
        Ok(())
    }

    pub fn conversion_table(&self) -> ConversionTable {
        ConversionTable::STANDARD.with_domlang_to_xi(self.domlang_to_xi)
    }

    /// Unvalidated out-of-range TTLs fall back to the default window
    pub fn cache_policy(&self) -> CachePolicy {
        match Duration::try_seconds(self.cache_ttl_secs) {
            Some(open_ttl) if self.cache_ttl_secs > 0 => CachePolicy { open_ttl },
            _ => CachePolicy::default(),
        }
    }

    pub fn gold_api_config(&self) -> GoldApiConfig {
        GoldApiConfig {
            base_url: self.price_api_url.clone(),
            symbol: self.price_symbol.clone(),
            timeout: std::time::Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn mock_config(&self) -> MockPriceConfig {
        MockPriceConfig {
            initial_price: self.mock_initial_price,
            unit: GoldUnit::Ounce,
            ..MockPriceConfig::default()
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store_path, PathBuf::from("meas-data.json"));
        assert_eq!(config.price_api_url, "https://api.gold-api.com");
        assert_eq!(config.price_symbol, "XAU");
        assert_eq!(config.domlang_to_xi, 10.0);
        assert_eq!(config.cache_ttl_secs, 3600);
        assert!(!config.mock_price);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"language": "km", "domlang_to_xi": 4}"#).unwrap();
        assert_eq!(config.language, Some(Language::Km));
        assert_eq!(config.domlang_to_xi, 4.0);
        assert_eq!(config.conversion_table().domlang_to_xi, 4.0);
        assert_eq!(config.store_path, PathBuf::from("meas-data.json"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AppConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"language": "fr"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AppConfig::from_json(r#"{"domlang_to_xi": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "domlang_to_xi"));

        let err = AppConfig::from_json(r#"{"cache_ttl_secs": -5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "cache_ttl_secs"));
    }

    #[test]
    fn test_oversized_cache_ttl_rejected() {
        let err = AppConfig::from_json(r#"{"cache_ttl_secs": 9223372036854775807}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "cache_ttl_secs"));

        // Built directly, the policy keeps the default window
        let config = AppConfig {
            cache_ttl_secs: i64::MAX,
            ..Default::default()
        };
        assert_eq!(config.cache_policy(), CachePolicy::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default()
            .with_overrides(env(&[
                (ENV_LANG, "zh"),
                (ENV_STORE, "/tmp/meas.json"),
                (ENV_PRICE_URL, "http://localhost:9000"),
                (ENV_MOCK_PRICE, "yes"),
                (ENV_DOMLANG_TO_XI, "4"),
            ]))
            .unwrap();

        assert_eq!(config.language, Some(Language::Zh));
        assert_eq!(config.store_path, PathBuf::from("/tmp/meas.json"));
        assert_eq!(config.gold_api_config().base_url, "http://localhost:9000");
        assert!(config.mock_price);
        assert_eq!(config.domlang_to_xi, 4.0);
    }

    #[test]
    fn test_bad_env_values() {
        let err = AppConfig::default()
            .with_overrides(env(&[(ENV_DOMLANG_TO_XI, "ten")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == ENV_DOMLANG_TO_XI));

        let err = AppConfig::default()
            .with_overrides(env(&[(ENV_LANG, "fr")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == ENV_LANG));

        let err = AppConfig::default()
            .with_overrides(env(&[(ENV_MOCK_PRICE, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == ENV_MOCK_PRICE));
    }

    #[test]
    fn test_derived_settings() {
        let config = AppConfig {
            cache_ttl_secs: 300,
            request_timeout_secs: 3,
            mock_initial_price: 2400.0,
            ..Default::default()
        };
        assert_eq!(config.cache_policy().open_ttl, Duration::minutes(5));
        assert_eq!(config.gold_api_config().timeout.as_secs(), 3);
        assert_eq!(config.mock_config().initial_price, 2400.0);
        assert_eq!(config.mock_config().unit, GoldUnit::Ounce);
    }
}

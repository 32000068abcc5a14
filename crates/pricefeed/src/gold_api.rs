use async_trait::async_trait;
use meas_core::{GoldUnit, PriceQuote, Timestamp};
use meas_ports::{FetchError, FetchResult, PriceSource};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convert infrastructure RestError to port FetchError
impl From<RestError> for FetchError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(e) => FetchError::Network(e.to_string()),
            RestError::Status { status, body } => FetchError::Status { status, body },
            RestError::Parse(msg) => FetchError::Parse(msg),
        }
    }
}

/// Connection settings for the gold price API
#[derive(Debug, Clone)]
pub struct GoldApiConfig {
    pub base_url: String,
    /// Metal symbol, `XAU` for gold
    pub symbol: String,
    pub timeout: Duration,
}

impl Default for GoldApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.gold-api.com".to_string(),
            symbol: "XAU".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Response body of `GET /price/{symbol}`
#[derive(Debug, Deserialize)]
struct PriceResponse {
    price: f64,
    #[serde(rename = "updatedAt")]
    updated_at: Timestamp,
}

/// REST client for the public gold price API
/// Infrastructure component - handles HTTP communication
#[derive(Clone)]
pub struct GoldApiClient {
    client: Client,
    config: GoldApiConfig,
}

impl GoldApiClient {
    pub fn new(config: GoldApiConfig) -> Result<Self, RestError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GoldApiConfig {
        &self.config
    }

    /// Latest spot price, always quoted per troy ounce
    pub async fn get_price(&self) -> Result<PriceQuote, RestError> {
        let url = format!(
            "{}/price/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.symbol
        );
        log::debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(RestError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_price(&text)
    }
}

fn parse_price(body: &str) -> Result<PriceQuote, RestError> {
    let resp: PriceResponse =
        serde_json::from_str(body).map_err(|e| RestError::Parse(e.to_string()))?;
    if !resp.price.is_finite() {
        return Err(RestError::Parse(format!("non-finite price {}", resp.price)));
    }
    Ok(PriceQuote::new(resp.price, GoldUnit::Ounce, resp.updated_at))
}

/// Implement PriceSource for GoldApiClient (Dependency Inversion)
#[async_trait]
impl PriceSource for GoldApiClient {
    async fn latest_price(&self) -> FetchResult<PriceQuote> {
        self.get_price().await.map_err(FetchError::from)
    }

    fn name(&self) -> &str {
        "gold-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_price_response() {
        let body = r#"{"name":"Gold","price":2650.4,"symbol":"XAU","updatedAt":"2025-06-04T12:30:00Z","updatedAtReadable":"a few seconds ago"}"#;
        let quote = parse_price(body).unwrap();

        assert_eq!(quote.price, 2650.4);
        assert_eq!(quote.unit, GoldUnit::Ounce);
        assert_eq!(
            quote.updated_at,
            Utc.with_ymd_and_hms(2025, 6, 4, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_missing_price() {
        let err = parse_price(r#"{"updatedAt":"2025-06-04T12:30:00Z"}"#).unwrap_err();
        assert!(matches!(err, RestError::Parse(_)));
    }

    #[test]
    fn test_rest_error_maps_to_fetch_error() {
        let err: FetchError = RestError::Status {
            status: 503,
            body: "busy".to_string(),
        }
        .into();
        assert_eq!(
            err,
            FetchError::Status {
                status: 503,
                body: "busy".to_string()
            }
        );
    }

    #[test]
    fn test_default_config() {
        let config = GoldApiConfig::default();
        assert_eq!(config.symbol, "XAU");
        assert!(config.base_url.starts_with("https://"));
    }
}

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CHART_DAYS, DEFAULT_PAGE_SIZE, DEFAULT_PINNED_COIN_ID,
    DEFAULT_TIMEOUT_SECS, DEFAULT_VS_CURRENCY,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the market data client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Market query configuration
    pub market: MarketConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the market-data REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Parameters of the market queries issued by the dashboard
pub struct MarketConfig {
    /// Quote currency for prices and market caps
    pub vs_currency: String,
    /// Number of coins fetched on load
    pub per_page: u32,
    /// Identifier of the pinned coin
    pub pinned_coin_id: String,
    /// Trailing window of the detail chart in days
    pub chart_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            per_page: DEFAULT_PAGE_SIZE,
            pinned_coin_id: DEFAULT_PINNED_COIN_ID.to_string(),
            chart_days: DEFAULT_CHART_DAYS,
        }
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("COIN_REST_BASE_URL", DEFAULT_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                timeout: get_env_or_default("COIN_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            market: MarketConfig {
                vs_currency: get_env_or_default(
                    "COIN_VS_CURRENCY",
                    DEFAULT_VS_CURRENCY.to_string(),
                )
                .to_lowercase(),
                per_page: get_env_or_default("COIN_PAGE_SIZE", DEFAULT_PAGE_SIZE),
                pinned_coin_id: get_env_or_default(
                    "COIN_PINNED_ID",
                    DEFAULT_PINNED_COIN_ID.to_string(),
                ),
                chart_days: get_env_or_default("COIN_CHART_DAYS", DEFAULT_CHART_DAYS),
            },
        }
    }

    /// Creates a configuration pointing at the given base URL with default market settings
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            market: MarketConfig::default(),
        }
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
//! Wire shapes of the market-data API
//!
//! Every field that the API may omit or send as `null` is an `Option`, so a
//! partial record still decodes. Only the identifying fields are required.

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of `GET /coins/markets`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CoinMarketResponse {
    /// API identifier of the coin
    pub id: String,
    /// Ticker symbol, lowercase as sent by the API
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Logo URL
    #[serde(default)]
    pub image: Option<String>,
    /// Last price in the quote currency
    #[serde(default)]
    pub current_price: Option<f64>,
    /// Market capitalization in the quote currency
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Price change over the last 24 hours, in percent
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// Logo URLs of `GET /coins/{id}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ImageLinks {
    /// Thumbnail logo
    #[serde(default)]
    pub thumb: Option<String>,
    /// Small logo
    #[serde(default)]
    pub small: Option<String>,
    /// Large logo
    #[serde(default)]
    pub large: Option<String>,
}

impl ImageLinks {
    /// Largest available logo
    #[must_use]
    pub fn best(&self) -> Option<String> {
        self.large
            .clone()
            .or_else(|| self.small.clone())
            .or_else(|| self.thumb.clone())
    }
}

/// Nested `market_data` object of `GET /coins/{id}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CoinMarketData {
    /// Last price keyed by quote currency
    #[serde(default)]
    pub current_price: Option<HashMap<String, f64>>,
    /// Market capitalization keyed by quote currency
    #[serde(default)]
    pub market_cap: Option<HashMap<String, f64>>,
    /// Price change over the last 24 hours, in percent
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// Body of `GET /coins/{id}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CoinDetailResponse {
    /// API identifier of the coin
    pub id: String,
    /// Ticker symbol
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Logo URLs
    #[serde(default)]
    pub image: Option<ImageLinks>,
    /// Market figures
    #[serde(default)]
    pub market_data: Option<CoinMarketData>,
}

impl CoinDetailResponse {
    /// Price in the given quote currency
    #[must_use]
    pub fn price_in(&self, vs_currency: &str) -> Option<f64> {
        self.market_data
            .as_ref()
            .and_then(|data| data.current_price.as_ref())
            .and_then(|prices| prices.get(vs_currency).copied())
    }

    /// Market capitalization in the given quote currency
    #[must_use]
    pub fn market_cap_in(&self, vs_currency: &str) -> Option<f64> {
        self.market_data
            .as_ref()
            .and_then(|data| data.market_cap.as_ref())
            .and_then(|caps| caps.get(vs_currency).copied())
    }

    /// Price change over the last 24 hours, in percent
    #[must_use]
    pub fn change_24h(&self) -> Option<f64> {
        self.market_data
            .as_ref()
            .and_then(|data| data.price_change_percentage_24h)
    }
}

/// Body of `GET /coins/{id}/market_chart`
///
/// Each sample is `[timestamp_ms, price]`.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct MarketChartResponse {
    /// Price samples in chronological order
    #[serde(default)]
    pub prices: Vec<[f64; 2]>,
}

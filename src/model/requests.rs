/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::MarketConfig;
use crate::constants::{
    DEFAULT_CHART_DAYS, DEFAULT_PAGE_SIZE, DEFAULT_VS_CURRENCY, MARKETS_ORDER, PRICE_CHANGE_WINDOW,
};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Query parameters of `GET /coins/markets`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketsRequest {
    /// Quote currency
    pub vs_currency: String,
    /// Ranking order
    pub order: String,
    /// Number of coins per page
    pub per_page: u32,
    /// Page number, starting at 1
    pub page: u32,
    /// Price change windows to include
    pub price_change_percentage: String,
}

impl Default for MarketsRequest {
    fn default() -> Self {
        Self {
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            order: MARKETS_ORDER.to_string(),
            per_page: DEFAULT_PAGE_SIZE,
            page: 1,
            price_change_percentage: PRICE_CHANGE_WINDOW.to_string(),
        }
    }
}

impl MarketsRequest {
    /// Create the first page request for the given market settings
    pub fn new(market: &MarketConfig) -> Self {
        Self {
            vs_currency: market.vs_currency.clone(),
            per_page: market.per_page,
            ..Default::default()
        }
    }

    /// Set the quote currency
    pub fn with_vs_currency(mut self, vs_currency: &str) -> Self {
        self.vs_currency = vs_currency.to_lowercase();
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

/// Query parameters of `GET /coins/{id}/market_chart`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MarketChartRequest {
    /// Quote currency
    pub vs_currency: String,
    /// Trailing window in days
    pub days: u32,
}

impl Default for MarketChartRequest {
    fn default() -> Self {
        Self {
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            days: DEFAULT_CHART_DAYS,
        }
    }
}

impl MarketChartRequest {
    /// Create the chart request for the given market settings
    pub fn new(market: &MarketConfig) -> Self {
        Self {
            vs_currency: market.vs_currency.clone(),
            days: market.chart_days,
        }
    }

    /// Set the trailing window
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }
}

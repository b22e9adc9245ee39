/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::model::responses::{CoinDetailResponse, CoinMarketResponse};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A coin as shown on the dashboard
///
/// Records are immutable once stored and replaced wholesale on refetch.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Coin {
    /// API identifier, unique across the list
    pub id: String,
    /// Ticker symbol
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Logo URL
    pub image: Option<String>,
    /// Last price in the quote currency
    pub current_price: Option<f64>,
    /// Price change over the last 24 hours, in percent
    pub price_change_percentage_24h: Option<f64>,
    /// Market capitalization in the quote currency
    pub market_cap: Option<f64>,
}

impl Coin {
    /// Creates a coin with only its identifying fields set
    pub fn new(id: &str, symbol: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the 24h price change
    #[must_use]
    pub fn with_change(mut self, change: f64) -> Self {
        self.price_change_percentage_24h = Some(change);
        self
    }

    /// Sets the current price
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Sets the market capitalization
    #[must_use]
    pub fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    /// Ticker symbol in upper case, as displayed
    #[must_use]
    pub fn ticker(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Projects a `/coins/{id}` record into a `Coin` for the given quote currency
    #[must_use]
    pub fn from_detail(detail: CoinDetailResponse, vs_currency: &str) -> Self {
        let current_price = detail.price_in(vs_currency);
        let market_cap = detail.market_cap_in(vs_currency);
        let price_change_percentage_24h = detail.change_24h();
        Self {
            image: detail.image.as_ref().and_then(|links| links.best()),
            id: detail.id,
            symbol: detail.symbol,
            name: detail.name,
            current_price,
            price_change_percentage_24h,
            market_cap,
        }
    }
}

impl From<CoinMarketResponse> for Coin {
    fn from(market: CoinMarketResponse) -> Self {
        Self {
            id: market.id,
            symbol: market.symbol,
            name: market.name,
            image: market.image,
            current_price: market.current_price,
            price_change_percentage_24h: market.price_change_percentage_24h,
            market_cap: market.market_cap,
        }
    }
}

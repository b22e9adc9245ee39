//! # coin-dashboard
//!
//! A terminal dashboard for cryptocurrency market data served by the public
//! CoinGecko v3 API: a searchable, filterable grid of coins, a light/dark
//! theme, and a detail view with a 7-day price chart for a selected coin.
//!
//! ## Layers
//!
//! - `model`: HTTP transport, request parameters and wire shapes
//! - `presentation`: the `Coin` and `PricePoint` records shown on screen
//! - `application`: the market service, its fail-soft facade, the
//!   filter/merge engine and the dashboard state
//! - `ui`: pure renderers and the intent dispatcher
//!
//! ## Usage
//!
//! ```rust,ignore
//! use coin_dashboard::prelude::*;
//!
//! let config = Config::new();
//! let client = Arc::new(Client::new(config.clone())?);
//! let service = MarketDataService::new(config.market.clone(), client);
//!
//! let mut list = CoinListState::new();
//! list.load(&service).await;
//! let shown = merge_coins(&list.coins, list.pinned.as_ref(), "bit", CoinFilter::Gainers);
//! ```

/// Market data service, configuration, filter engine and state
pub mod application;
/// Global constants
pub mod constants;
/// Error type of the library
pub mod error;
/// HTTP transport and wire models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Display records
pub mod presentation;
/// Terminal presentation layer
pub mod ui;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

use crate::error::AppError;
use crate::model::requests::{MarketChartRequest, MarketsRequest};
use crate::presentation::chart::PricePoint;
use crate::presentation::coin::Coin;
use async_trait::async_trait;

/// Interface for the market-data service
///
/// Implementations report every failure; the fail-soft policy lives one layer
/// up in `MarketDataService`.
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets one page of coins ranked as requested
    async fn get_markets(&self, params: &MarketsRequest) -> Result<Vec<Coin>, AppError>;

    /// Gets the full record of a single coin projected into a `Coin`
    ///
    /// # Arguments
    /// * `coin_id` - API identifier of the coin
    /// * `vs_currency` - Quote currency used to pick price and market cap
    async fn get_coin(&self, coin_id: &str, vs_currency: &str) -> Result<Coin, AppError>;

    /// Gets the price samples of a coin over a trailing window
    async fn get_market_chart(
        &self,
        coin_id: &str,
        params: &MarketChartRequest,
    ) -> Result<Vec<PricePoint>, AppError>;
}

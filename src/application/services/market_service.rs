use crate::application::config::MarketConfig;
use crate::application::interfaces::market::MarketService;
use crate::model::requests::{MarketChartRequest, MarketsRequest};
use crate::presentation::chart::PricePoint;
use crate::presentation::coin::Coin;
use std::sync::Arc;
use tracing::{error, info};

/// Fail-soft facade over a `MarketService`
///
/// Every operation converts transport, status and shape failures into an
/// empty or absent result after logging them. Nothing is retried or cached.
pub struct MarketDataService<S: MarketService> {
    market: MarketConfig,
    service: Arc<S>,
}

impl<S: MarketService> Clone for MarketDataService<S> {
    fn clone(&self) -> Self {
        Self {
            market: self.market.clone(),
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: MarketService> MarketDataService<S> {
    /// Creates a new instance of the market data service
    pub fn new(market: MarketConfig, service: Arc<S>) -> Self {
        Self { market, service }
    }

    /// Market settings in use
    pub fn market_config(&self) -> &MarketConfig {
        &self.market
    }

    /// Identifier of the pinned coin
    pub fn pinned_coin_id(&self) -> &str {
        &self.market.pinned_coin_id
    }

    /// Fetches the top coins by market capitalization
    ///
    /// Returns an empty list on any failure.
    pub async fn list_coins(&self) -> Vec<Coin> {
        let params = MarketsRequest::new(&self.market);
        match self.service.get_markets(&params).await {
            Ok(coins) => {
                info!("Fetched {} coins", coins.len());
                coins
            }
            Err(e) => {
                error!("Failed to fetch coin list: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetches the pinned coin's record
    ///
    /// Returns `None` on any failure.
    pub async fn get_pinned_coin(&self) -> Option<Coin> {
        let coin_id = &self.market.pinned_coin_id;
        match self
            .service
            .get_coin(coin_id, &self.market.vs_currency)
            .await
        {
            Ok(coin) => {
                info!("Fetched pinned coin {}", coin.id);
                Some(coin)
            }
            Err(e) => {
                error!("Failed to fetch pinned coin {}: {}", coin_id, e);
                None
            }
        }
    }

    /// Fetches the trailing price history of a coin
    ///
    /// Returns an empty series on any failure.
    pub async fn get_price_history(&self, coin_id: &str) -> Vec<PricePoint> {
        let params = MarketChartRequest::new(&self.market);
        match self.service.get_market_chart(coin_id, &params).await {
            Ok(points) => points,
            Err(e) => {
                error!("Failed to fetch price history for {}: {}", coin_id, e);
                Vec::new()
            }
        }
    }
}

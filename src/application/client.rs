/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::market::MarketService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{MarketChartRequest, MarketsRequest};
use crate::model::responses::{CoinDetailResponse, CoinMarketResponse, MarketChartResponse};
use crate::presentation::chart::{PricePoint, price_points};
use crate::presentation::coin::Coin;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// REST client for the market-data API
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a new client from configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }
}

/// Path segments are API identifiers; anything outside the id alphabet is rejected
fn validate_coin_id(coin_id: &str) -> Result<(), AppError> {
    let valid = !coin_id.is_empty()
        && coin_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!("invalid coin id: {coin_id:?}")))
    }
}

#[async_trait]
impl MarketService for Client {
    async fn get_markets(&self, params: &MarketsRequest) -> Result<Vec<Coin>, AppError> {
        info!(
            "Getting markets: {} coins in {}",
            params.per_page, params.vs_currency
        );
        let body: Value = self.http_client.get("coins/markets", Some(params)).await?;
        let Value::Array(rows) = body else {
            return Err(AppError::Deserialization(
                "expected an array of coin records".to_string(),
            ));
        };

        let total = rows.len();
        let coins: Vec<Coin> = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<CoinMarketResponse>(row) {
                Ok(record) => Some(Coin::from(record)),
                Err(e) => {
                    warn!("Skipping malformed coin record: {}", e);
                    None
                }
            })
            .collect();
        debug!("Decoded {} of {} coin records", coins.len(), total);
        Ok(coins)
    }

    async fn get_coin(&self, coin_id: &str, vs_currency: &str) -> Result<Coin, AppError> {
        validate_coin_id(coin_id)?;
        let path = format!("coins/{coin_id}");
        info!("Getting coin details: {}", coin_id);
        let detail: CoinDetailResponse = self.http_client.get(&path, None::<&()>).await?;
        debug!("Coin details obtained for: {}", coin_id);
        Ok(Coin::from_detail(detail, vs_currency))
    }

    async fn get_market_chart(
        &self,
        coin_id: &str,
        params: &MarketChartRequest,
    ) -> Result<Vec<PricePoint>, AppError> {
        validate_coin_id(coin_id)?;
        let path = format!("coins/{coin_id}/market_chart");
        info!("Getting {}-day market chart: {}", params.days, coin_id);
        let chart: MarketChartResponse = self.http_client.get(&path, Some(params)).await?;
        let points = price_points(chart);
        debug!("Market chart for {}: {} points", coin_id, points.len());
        Ok(points)
    }
}

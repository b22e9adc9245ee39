//! # Prelude
//!
//! ```rust,ignore
//! use coin_dashboard::prelude::*;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration of the market data client
pub use crate::application::config::{Config, MarketConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// SERVICES
// ============================================================================

/// Market service trait
pub use crate::application::interfaces::market::MarketService;

/// REST implementation of the market service
pub use crate::application::client::Client;

/// Fail-soft market data facade
pub use crate::application::services::MarketDataService;

/// HTTP transport
pub use crate::model::http::HttpClient;

/// Request parameters
pub use crate::model::requests::{MarketChartRequest, MarketsRequest};

// ============================================================================
// MODELS AND STATE
// ============================================================================

/// Display records
pub use crate::presentation::chart::{ChartSummary, PricePoint};
pub use crate::presentation::coin::Coin;

/// Filter/merge engine
pub use crate::application::filter::{CoinFilter, SearchQuery, coin_matches, merge_coins};

/// Dashboard state
pub use crate::application::state::{CoinListState, DetailState, FetchTicket, ViewState};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Dashboard and intents
pub use crate::ui::dashboard::{Dashboard, Effect, Intent};

/// Theme context
pub use crate::ui::theme::{Theme, ThemeProvider};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

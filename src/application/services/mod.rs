/// Module containing the fail-soft market data service
pub mod market_service;

pub use market_service::*;

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Derivation of the displayed coin list
//!
//! The displayed list is a pure function of the fetched coins, the pinned coin,
//! the search text and the active filter. The pinned coin is judged on its own
//! record: it is shown first when it satisfies the same search and filter
//! predicates, and never shown merely because it is pinned.

use crate::error::AppError;
use crate::presentation::coin::Coin;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Restriction on the 24h price change of displayed coins
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoinFilter {
    /// Every coin, in market capitalization order
    #[default]
    All,
    /// Positive 24h change, largest first
    Gainers,
    /// Negative 24h change, largest drop first
    Losers,
}

impl CoinFilter {
    /// Whether a coin passes this filter on its own
    #[must_use]
    pub fn accepts(&self, coin: &Coin) -> bool {
        match self {
            CoinFilter::All => true,
            CoinFilter::Gainers => coin.price_change_percentage_24h.is_some_and(|pct| pct > 0.0),
            CoinFilter::Losers => coin.price_change_percentage_24h.is_some_and(|pct| pct < 0.0),
        }
    }

    fn order(&self, a: &Coin, b: &Coin) -> Ordering {
        let a = a.price_change_percentage_24h.unwrap_or_default();
        let b = b.price_change_percentage_24h.unwrap_or_default();
        match self {
            CoinFilter::All => Ordering::Equal,
            CoinFilter::Gainers => b.total_cmp(&a),
            CoinFilter::Losers => a.total_cmp(&b),
        }
    }
}

impl fmt::Display for CoinFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFilter::All => write!(f, "all"),
            CoinFilter::Gainers => write!(f, "gainers"),
            CoinFilter::Losers => write!(f, "losers"),
        }
    }
}

impl FromStr for CoinFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CoinFilter::All),
            "gainers" => Ok(CoinFilter::Gainers),
            "losers" => Ok(CoinFilter::Losers),
            other => Err(AppError::InvalidInput(format!(
                "unknown filter '{other}', expected all, gainers or losers"
            ))),
        }
    }
}

/// Case-insensitive search over name and symbol
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Prepares a query from raw search text
    pub fn new(search_term: &str) -> Self {
        Self {
            needle: search_term.to_lowercase(),
        }
    }

    /// Whether the coin's name or symbol contains the search text
    #[must_use]
    pub fn matches(&self, coin: &Coin) -> bool {
        self.needle.is_empty()
            || coin.name.to_lowercase().contains(&self.needle)
            || coin.symbol.to_lowercase().contains(&self.needle)
    }
}

/// Whether a single coin satisfies both the search and the filter
#[must_use]
pub fn coin_matches(coin: &Coin, search_term: &str, filter: CoinFilter) -> bool {
    SearchQuery::new(search_term).matches(coin) && filter.accepts(coin)
}

/// Builds the ordered list of coins to display
///
/// # Arguments
/// * `coins` - The fetched coin list, in market capitalization order
/// * `pinned` - The pinned coin's own record, if it was fetched
/// * `search_term` - Free text matched against name and symbol
/// * `filter` - Active 24h change filter
///
/// # Returns
/// The filtered coins, sorted per the filter, with the pinned coin at index 0
/// when it matches on its own. The pinned coin never appears twice.
#[must_use]
pub fn merge_coins(
    coins: &[Coin],
    pinned: Option<&Coin>,
    search_term: &str,
    filter: CoinFilter,
) -> Vec<Coin> {
    let query = SearchQuery::new(search_term);

    let mut result: Vec<Coin> = coins
        .iter()
        .filter(|coin| query.matches(coin) && filter.accepts(coin))
        .cloned()
        .collect();
    result.sort_by(|a, b| filter.order(a, b));

    if let Some(pinned) = pinned {
        result.retain(|coin| coin.id != pinned.id);
        if query.matches(pinned) && filter.accepts(pinned) {
            result.insert(0, pinned.clone());
        }
    }

    result
}

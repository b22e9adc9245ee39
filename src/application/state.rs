/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::filter::{CoinFilter, merge_coins};
use crate::application::interfaces::market::MarketService;
use crate::application::services::MarketDataService;
use crate::presentation::chart::PricePoint;
use crate::presentation::coin::Coin;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Fetched coin list, the pinned coin and the loading flag
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct CoinListState {
    /// Coins ranked by market capitalization
    pub coins: Vec<Coin>,
    /// The pinned coin's own record
    pub pinned: Option<Coin>,
    /// True until both startup fetches have settled
    pub loading: bool,
}

impl Default for CoinListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinListState {
    /// Creates an empty state that is still loading
    pub fn new() -> Self {
        Self {
            coins: Vec::new(),
            pinned: None,
            loading: true,
        }
    }

    /// Fetches the coin list and the pinned coin concurrently
    ///
    /// The state becomes ready only once both requests have resolved, in
    /// whichever order they complete. Previous data is replaced wholesale.
    pub async fn load<S: MarketService>(&mut self, service: &MarketDataService<S>) {
        self.loading = true;
        let (coins, pinned) = tokio::join!(service.list_coins(), service.get_pinned_coin());
        info!(
            "Coin list ready: {} coins, pinned coin {}",
            coins.len(),
            if pinned.is_some() { "present" } else { "absent" }
        );
        self.coins = coins;
        self.pinned = pinned;
        self.loading = false;
    }

    /// Coins to display for the given view
    #[must_use]
    pub fn visible(&self, view: &ViewState) -> Vec<Coin> {
        merge_coins(
            &self.coins,
            self.pinned.as_ref(),
            &view.search_term,
            view.filter,
        )
    }

    /// Looks a coin up by id, the pinned record taking precedence
    #[must_use]
    pub fn find(&self, coin_id: &str) -> Option<&Coin> {
        self.pinned
            .iter()
            .chain(self.coins.iter())
            .find(|coin| coin.id == coin_id)
    }

    /// Whether the given id is the pinned coin
    #[must_use]
    pub fn is_pinned(&self, coin_id: &str) -> bool {
        self.pinned.as_ref().is_some_and(|coin| coin.id == coin_id)
    }
}

/// Search, filter and selection chosen by the user
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct ViewState {
    /// Free search text
    pub search_term: String,
    /// Active 24h change filter
    pub filter: CoinFilter,
    /// Coin whose detail view is open
    pub selected_coin_id: Option<String>,
}

/// Identifies one price history fetch
///
/// A ticket is only honoured while it matches the current selection.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// Coin the fetch was issued for
    pub coin_id: String,
    /// Selection generation at issue time
    pub generation: u64,
}

/// Chart data of the open detail view
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct DetailState {
    selected: Option<String>,
    generation: u64,
    history: Option<Vec<PricePoint>>,
}

impl DetailState {
    /// Creates a closed detail state
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens (or switches) the detail view and returns the ticket of the fetch
    /// to issue for it
    ///
    /// Chart data of the previous selection is discarded immediately.
    pub fn select(&mut self, coin_id: &str) -> FetchTicket {
        self.generation += 1;
        self.selected = Some(coin_id.to_string());
        self.history = None;
        debug!("Selected {} (generation {})", coin_id, self.generation);
        FetchTicket {
            coin_id: coin_id.to_string(),
            generation: self.generation,
        }
    }

    /// Stores a fetch result if its ticket is still current
    ///
    /// # Returns
    /// `true` when applied, `false` when the result was stale and dropped
    pub fn apply(&mut self, ticket: &FetchTicket, points: Vec<PricePoint>) -> bool {
        if !self.is_current(ticket) {
            warn!(
                "Discarding stale price history for {} (generation {}, current {})",
                ticket.coin_id, ticket.generation, self.generation
            );
            return false;
        }
        debug!("Applying {} points for {}", points.len(), ticket.coin_id);
        self.history = Some(points);
        true
    }

    /// Closes the detail view, discarding chart data and outstanding fetches
    pub fn close(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.history = None;
    }

    /// Whether a ticket matches the current selection
    #[must_use]
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && self.selected.as_deref() == Some(ticket.coin_id.as_str())
    }

    /// Currently selected coin
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Chart data, `None` while the fetch is outstanding
    #[must_use]
    pub fn history(&self) -> Option<&[PricePoint]> {
        self.history.as_deref()
    }

    /// Whether the chart fetch for the current selection is still outstanding
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.selected.is_some() && self.history.is_none()
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::filter::CoinFilter;
use crate::application::interfaces::market::MarketService;
use crate::application::services::MarketDataService;
use crate::application::state::{CoinListState, DetailState, FetchTicket, ViewState};
use crate::error::AppError;
use crate::presentation::chart::PricePoint;
use crate::ui::cards::render_cards;
use crate::ui::detail::render_detail;
use crate::ui::theme::{Theme, ThemeProvider};
use std::str::FromStr;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// Help text listing the accepted commands
pub const HELP: &str = "\
Commands:
  search <text>                     filter by name or symbol (no text clears)
  filter <all|gainers|losers>       restrict by 24h change
  select <id>                       open the detail view of a coin
  close                             close the detail view
  theme                             toggle light/dark theme
  refresh                           refetch market data
  help                              show this help
  quit                              exit";

/// A user intent emitted by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Flip the theme
    ToggleTheme,
    /// Replace the search text
    SetSearch(String),
    /// Replace the active filter
    SetFilter(CoinFilter),
    /// Open the detail view of a coin
    Select(String),
    /// Close the detail view
    Close,
    /// Refetch the coin list and the pinned coin
    Refresh,
    /// Show the command list
    Help,
    /// Leave the dashboard
    Quit,
}

impl FromStr for Intent {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        match command.to_lowercase().as_str() {
            "search" | "s" => Ok(Intent::SetSearch(arg.to_string())),
            "filter" | "f" => Ok(Intent::SetFilter(arg.parse()?)),
            "select" | "open" => {
                if arg.is_empty() {
                    return Err(AppError::InvalidInput("select needs a coin id".to_string()));
                }
                Ok(Intent::Select(arg.to_string()))
            }
            "close" | "back" => Ok(Intent::Close),
            "theme" | "t" => Ok(Intent::ToggleTheme),
            "refresh" | "r" => Ok(Intent::Refresh),
            "help" | "h" | "?" => Ok(Intent::Help),
            "quit" | "exit" | "q" => Ok(Intent::Quit),
            other => Err(AppError::InvalidInput(format!(
                "unknown command '{other}', type 'help' for the list"
            ))),
        }
    }
}

/// Work the runtime must perform after an intent
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing beyond re-rendering
    None,
    /// Fetch the price history identified by the ticket
    FetchHistory(FetchTicket),
    /// Refetch the coin list and pinned coin
    Reload,
    /// Stop the event loop
    Exit,
}

/// Dashboard state and intent handling
///
/// Owns the view, list and detail state plus the theme provider. Rendering is
/// a pure function of that state.
pub struct Dashboard<S: MarketService> {
    service: MarketDataService<S>,
    theme: ThemeProvider,
    list: CoinListState,
    view: ViewState,
    detail: DetailState,
    notice: Option<String>,
}

impl<S: MarketService + 'static> Dashboard<S> {
    /// Creates a dashboard that has not loaded anything yet
    pub fn new(service: MarketDataService<S>, theme: ThemeProvider) -> Self {
        Self {
            service,
            theme,
            list: CoinListState::new(),
            view: ViewState::default(),
            detail: DetailState::new(),
            notice: None,
        }
    }

    /// Loads the coin list and pinned coin
    pub async fn load(&mut self) {
        self.list.load(&self.service).await;
    }

    /// Applies an intent and returns the follow-up work
    pub fn dispatch(&mut self, intent: Intent) -> Effect {
        debug!("Dispatching {:?}", intent);
        self.notice = None;
        match intent {
            Intent::ToggleTheme => {
                self.theme.toggle();
                Effect::None
            }
            Intent::SetSearch(text) => {
                self.view.search_term = text;
                Effect::None
            }
            Intent::SetFilter(filter) => {
                self.view.filter = filter;
                Effect::None
            }
            Intent::Select(coin_id) => {
                if self.list.find(&coin_id).is_none() {
                    self.notice = Some(format!("Unknown coin '{coin_id}'"));
                    return Effect::None;
                }
                self.view.selected_coin_id = Some(coin_id.clone());
                Effect::FetchHistory(self.detail.select(&coin_id))
            }
            Intent::Close => {
                self.view.selected_coin_id = None;
                self.detail.close();
                Effect::None
            }
            Intent::Refresh => Effect::Reload,
            Intent::Help => {
                self.notice = Some(HELP.to_string());
                Effect::None
            }
            Intent::Quit => Effect::Exit,
        }
    }

    /// Stores a price history result unless it is stale
    pub fn apply_history(&mut self, ticket: &FetchTicket, points: Vec<PricePoint>) -> bool {
        self.detail.apply(ticket, points)
    }

    /// Spawns the fetch for a ticket; the result is sent back over `results`
    pub fn spawn_history_fetch(
        &self,
        ticket: FetchTicket,
        results: UnboundedSender<(FetchTicket, Vec<PricePoint>)>,
    ) -> JoinHandle<()> {
        let service = self.service.clone();
        tokio::spawn(async move {
            let points = service.get_price_history(&ticket.coin_id).await;
            if results.send((ticket, points)).is_err() {
                debug!("Dashboard gone, dropping price history");
            }
        })
    }

    /// Shows a one-off message under the next render
    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// Renders the current screen
    #[must_use]
    pub fn render(&self) -> String {
        let theme = self.theme.theme();
        let mut out = match self
            .view
            .selected_coin_id
            .as_deref()
            .and_then(|id| self.list.find(id))
        {
            Some(coin) => render_detail(coin, self.list.is_pinned(&coin.id), &self.detail, theme),
            None => render_cards(&self.list, &self.view, theme),
        };
        if let Some(notice) = &self.notice {
            out.push('\n');
            out.push_str(notice);
            out.push('\n');
        }
        out
    }

    /// Active theme
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Search, filter and selection
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Fetched coin data
    pub fn list(&self) -> &CoinListState {
        &self.list
    }

    /// Detail view state
    pub fn detail(&self) -> &DetailState {
        &self.detail
    }
}

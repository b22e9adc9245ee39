/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::state::{CoinListState, ViewState};
use crate::ui::format::{format_market_cap, format_percentage, format_price, trend_arrow};
use crate::ui::theme::Theme;
use prettytable::{Table, row};

/// Renders the search/filter controls line
#[must_use]
pub fn render_controls(view: &ViewState, theme: Theme) -> String {
    let search = if view.search_term.is_empty() {
        "(none)".to_string()
    } else {
        format!("\"{}\"", view.search_term)
    };
    format!(
        "Crypto Market Dashboard | theme: {theme} | filter: {} | search: {search}",
        view.filter
    )
}

/// Renders the grid of coin cards for the current view
#[must_use]
pub fn render_cards(list: &CoinListState, view: &ViewState, theme: Theme) -> String {
    let palette = theme.palette();
    let mut out = render_controls(view, theme);
    out.push('\n');
    out.push_str(&palette.rule(out.chars().count() - 1));
    out.push('\n');

    if list.loading {
        out.push_str("Loading market data...\n");
        return out;
    }

    let coins = list.visible(view);
    if coins.is_empty() {
        out.push_str("No coins match the current search and filter.\n");
        return out;
    }

    let mut table = Table::new();
    table.set_format(palette.table_format);
    table.set_titles(row!["", "Coin", "Symbol", "Price", "24h", "Market cap", "Id"]);
    for coin in &coins {
        let marker = if list.is_pinned(&coin.id) {
            palette.pinned_marker
        } else {
            ""
        };
        let change = format!(
            "{} {}",
            trend_arrow(coin.price_change_percentage_24h),
            format_percentage(coin.price_change_percentage_24h)
        );
        table.add_row(row![
            marker,
            coin.name,
            coin.ticker(),
            r->format_price(coin.current_price),
            r->change,
            r->format_market_cap(coin.market_cap),
            coin.id
        ]);
    }
    out.push_str(&table.to_string());
    out.push_str(&format!("{} coins shown\n", coins.len()));
    out
}

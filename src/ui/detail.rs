use crate::application::state::DetailState;
use crate::constants::{CHART_HEIGHT, CHART_WIDTH};
use crate::presentation::chart::ChartSummary;
use crate::presentation::coin::Coin;
use crate::ui::chart::render_chart;
use crate::ui::format::{UNKNOWN, format_market_cap, format_percentage, format_price};
use crate::ui::theme::Theme;
use prettytable::{Table, row};

/// Renders the detail view of the selected coin
///
/// `pinned` flags the coin as the pinned one in the title.
#[must_use]
pub fn render_detail(coin: &Coin, pinned: bool, detail: &DetailState, theme: Theme) -> String {
    let palette = theme.palette();
    let mut title = format!("{} ({})", coin.name, coin.ticker());
    if pinned {
        title.push_str(&format!(" {} pinned", palette.pinned_marker));
    }

    let mut out = String::new();
    out.push_str(&palette.rule(CHART_WIDTH + 12));
    out.push('\n');
    out.push_str(&title);
    out.push('\n');
    out.push_str(&palette.rule(CHART_WIDTH + 12));
    out.push('\n');

    let mut stats = Table::new();
    stats.set_format(palette.table_format);
    stats.add_row(row!["Price", r->format_price(coin.current_price)]);
    stats.add_row(row!["24h change", r->format_percentage(coin.price_change_percentage_24h)]);
    stats.add_row(row!["Market cap", r->format_market_cap(coin.market_cap)]);
    stats.add_row(row!["Logo", coin.image.as_deref().unwrap_or(UNKNOWN)]);

    match detail.history() {
        None => {
            out.push_str(&stats.to_string());
            out.push_str("\nLoading 7-day chart...\n");
        }
        Some([]) => {
            out.push_str(&stats.to_string());
            out.push_str("\nNo price data\n");
        }
        Some(points) => {
            if let Some(summary) = ChartSummary::from_points(points) {
                stats.add_row(row!["7d low", r->format_price(Some(summary.low))]);
                stats.add_row(row!["7d high", r->format_price(Some(summary.high))]);
                stats.add_row(row!["7d change", r->format_percentage(Some(summary.change_percentage))]);
            }
            out.push_str(&stats.to_string());
            out.push('\n');
            out.push_str(&render_chart(points, CHART_WIDTH, CHART_HEIGHT, &palette));
        }
    }
    out.push_str("\nType 'close' to return to the list.\n");
    out
}

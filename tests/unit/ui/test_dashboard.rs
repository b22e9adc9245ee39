use crate::common::{FakeMarketService, history, pinned_bitcoin, sample_coins, service};
use coin_dashboard::application::filter::CoinFilter;
use coin_dashboard::application::state::FetchTicket;
use coin_dashboard::presentation::chart::PricePoint;
use coin_dashboard::ui::dashboard::{Dashboard, Effect, Intent};
use coin_dashboard::ui::theme::{Theme, ThemeProvider};
use std::collections::HashMap;
use tokio::sync::mpsc;

async fn loaded_dashboard() -> Dashboard<FakeMarketService> {
    let fake = FakeMarketService {
        markets: Some(sample_coins()),
        pinned: Some(pinned_bitcoin()),
        history: HashMap::from([
            ("solana".to_string(), history(&[150.0, 155.0, 160.0])),
            ("ethereum".to_string(), history(&[3000.0, 2950.0])),
        ]),
        ..Default::default()
    };
    let mut dashboard = Dashboard::new(service(fake), ThemeProvider::new(Theme::Dark));
    dashboard.load().await;
    dashboard
}

#[test]
fn test_intent_parsing() {
    assert_eq!("theme".parse::<Intent>().unwrap(), Intent::ToggleTheme);
    assert_eq!(
        "search  Bit Coin ".parse::<Intent>().unwrap(),
        Intent::SetSearch("Bit Coin".to_string())
    );
    assert_eq!(
        "search".parse::<Intent>().unwrap(),
        Intent::SetSearch(String::new())
    );
    assert_eq!(
        "filter gainers".parse::<Intent>().unwrap(),
        Intent::SetFilter(CoinFilter::Gainers)
    );
    assert_eq!(
        "SELECT solana".parse::<Intent>().unwrap(),
        Intent::Select("solana".to_string())
    );
    assert_eq!("close".parse::<Intent>().unwrap(), Intent::Close);
    assert_eq!("refresh".parse::<Intent>().unwrap(), Intent::Refresh);
    assert_eq!("q".parse::<Intent>().unwrap(), Intent::Quit);
    assert!("filter sideways".parse::<Intent>().is_err());
    assert!("select".parse::<Intent>().is_err());
    assert!("dance".parse::<Intent>().is_err());
}

#[tokio::test]
async fn test_render_before_load_shows_loading() {
    let dashboard = Dashboard::new(service(FakeMarketService::default()), ThemeProvider::default());
    assert!(dashboard.list().loading);
    assert!(dashboard.render().contains("Loading market data"));
}

#[tokio::test]
async fn test_search_and_filter_intents_update_view() {
    let mut dashboard = loaded_dashboard().await;
    assert_eq!(
        dashboard.dispatch(Intent::SetSearch("bit".to_string())),
        Effect::None
    );
    assert_eq!(
        dashboard.dispatch(Intent::SetFilter(CoinFilter::Losers)),
        Effect::None
    );
    assert_eq!(dashboard.view().search_term, "bit");
    assert_eq!(dashboard.view().filter, CoinFilter::Losers);

    let screen = dashboard.render();
    assert!(screen.contains("Bitcoin Cash"));
    assert!(!screen.contains("Solana"));
    assert!(screen.contains("1 coins shown"));
}

#[tokio::test]
async fn test_render_flags_pinned_coin() {
    let dashboard = loaded_dashboard().await;
    let screen = dashboard.render();
    assert!(screen.contains("★"));
    assert!(screen.contains("7 coins shown"));
}

#[tokio::test]
async fn test_empty_result_message() {
    let mut dashboard = loaded_dashboard().await;
    dashboard.dispatch(Intent::SetSearch("nothing-matches".to_string()));
    assert!(dashboard.render().contains("No coins match"));
}

#[tokio::test]
async fn test_toggle_theme_changes_rendering() {
    let mut dashboard = loaded_dashboard().await;
    dashboard.dispatch(Intent::ToggleTheme);
    assert_eq!(dashboard.theme(), Theme::Light);
    let screen = dashboard.render();
    assert!(screen.contains("theme: light"));
    assert!(!screen.contains("★"));
}

#[tokio::test]
async fn test_select_unknown_coin_does_not_fetch() {
    let mut dashboard = loaded_dashboard().await;
    assert_eq!(
        dashboard.dispatch(Intent::Select("missing".to_string())),
        Effect::None
    );
    assert!(dashboard.view().selected_coin_id.is_none());
    assert!(dashboard.render().contains("Unknown coin 'missing'"));
}

#[tokio::test]
async fn test_select_fetch_and_close() {
    let mut dashboard = loaded_dashboard().await;
    let Effect::FetchHistory(ticket) = dashboard.dispatch(Intent::Select("solana".to_string()))
    else {
        panic!("select should request a fetch");
    };
    assert_eq!(ticket.coin_id, "solana");
    assert!(dashboard.render().contains("Loading 7-day chart"));

    let (tx, mut rx) = mpsc::unbounded_channel::<(FetchTicket, Vec<PricePoint>)>();
    dashboard.spawn_history_fetch(ticket, tx).await.unwrap();
    let (ticket, points) = rx.recv().await.unwrap();
    assert!(dashboard.apply_history(&ticket, points));

    let screen = dashboard.render();
    assert!(screen.contains("Solana (SOL)"));
    assert!(screen.contains("7d change"));
    assert!(screen.contains("$160.00"));

    dashboard.dispatch(Intent::Close);
    assert!(dashboard.detail().history().is_none());
    assert!(dashboard.render().contains("coins shown"));
}

#[tokio::test]
async fn test_failed_history_renders_no_price_data() {
    let mut dashboard = loaded_dashboard().await;
    let Effect::FetchHistory(ticket) = dashboard.dispatch(Intent::Select("tether".to_string()))
    else {
        panic!("select should request a fetch");
    };
    let (tx, mut rx) = mpsc::unbounded_channel();
    dashboard.spawn_history_fetch(ticket, tx).await.unwrap();
    let (ticket, points) = rx.recv().await.unwrap();
    assert!(dashboard.apply_history(&ticket, points));
    assert!(dashboard.render().contains("No price data"));
}

#[tokio::test]
async fn test_switching_selection_never_shows_previous_chart() {
    let mut dashboard = loaded_dashboard().await;
    let Effect::FetchHistory(x) = dashboard.dispatch(Intent::Select("ethereum".to_string()))
    else {
        panic!("select should request a fetch");
    };
    let Effect::FetchHistory(y) = dashboard.dispatch(Intent::Select("solana".to_string()))
    else {
        panic!("select should request a fetch");
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    // Y's fetch completes before X's
    dashboard.spawn_history_fetch(y, tx.clone()).await.unwrap();
    dashboard.spawn_history_fetch(x, tx).await.unwrap();

    let mut applied = Vec::new();
    while let Some((ticket, points)) = rx.recv().await {
        if dashboard.apply_history(&ticket, points) {
            applied.push(ticket.coin_id.clone());
        }
        let screen = dashboard.render();
        assert!(screen.contains("Solana (SOL)"));
        assert!(!screen.contains("Ethereum"));
    }
    assert_eq!(applied, vec!["solana"]);
    assert_eq!(dashboard.detail().history().unwrap().len(), 3);
}

#[tokio::test]
async fn test_refresh_and_quit_effects() {
    let mut dashboard = loaded_dashboard().await;
    assert_eq!(dashboard.dispatch(Intent::Refresh), Effect::Reload);
    assert_eq!(dashboard.dispatch(Intent::Quit), Effect::Exit);
    dashboard.dispatch(Intent::Help);
    assert!(dashboard.render().contains("Commands:"));
}

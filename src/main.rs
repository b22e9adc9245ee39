use coin_dashboard::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let config = Config::new();
    info!(
        "Starting coin-dashboard {} against {}",
        version(),
        config.rest_api.base_url
    );

    let client = Arc::new(Client::new(config.clone())?);
    let service = MarketDataService::new(config.market.clone(), client);
    let mut dashboard = Dashboard::new(service, ThemeProvider::new(Theme::default()));

    println!("{}", dashboard.render());
    dashboard.load().await;
    println!("{}", dashboard.render());
    println!("Type 'help' for the list of commands.");

    let (results_tx, mut results_rx) = mpsc::unbounded_channel::<(FetchTicket, Vec<PricePoint>)>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let effect = match line.parse::<Intent>() {
                    Ok(intent) => dashboard.dispatch(intent),
                    Err(e) => {
                        dashboard.set_notice(e.to_string());
                        Effect::None
                    }
                };
                match effect {
                    Effect::Exit => break,
                    Effect::Reload => dashboard.load().await,
                    Effect::FetchHistory(ticket) => {
                        dashboard.spawn_history_fetch(ticket, results_tx.clone());
                    }
                    Effect::None => {}
                }
                println!("{}", dashboard.render());
            }
            Some((ticket, points)) = results_rx.recv() => {
                if dashboard.apply_history(&ticket, points) {
                    println!("{}", dashboard.render());
                }
            }
        }
    }

    info!("Shutting down");
    Ok(())
}

/// Default base URL of the public CoinGecko v3 REST API
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Quote currency used for prices and market caps
pub const DEFAULT_VS_CURRENCY: &str = "usd";
/// Number of coins requested from the markets endpoint (single page)
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Identifier of the coin that is always considered for top placement
pub const DEFAULT_PINNED_COIN_ID: &str = "bitcoin";
/// Trailing window, in days, of the detail chart
pub const DEFAULT_CHART_DAYS: u32 = 7;
/// Ordering requested from the markets endpoint
pub const MARKETS_ORDER: &str = "market_cap_desc";
/// Price change window requested from the markets endpoint
pub const PRICE_CHANGE_WINDOW: &str = "24h";
/// User agent string used in HTTP requests
pub const USER_AGENT: &str = "coin-dashboard/0.1.0";
/// Display format of the chart date labels
pub const CHART_DATE_FORMAT: &str = "%b %d";
/// Width, in columns, of the text price chart
pub const CHART_WIDTH: usize = 56;
/// Height, in rows, of the text price chart
pub const CHART_HEIGHT: usize = 10;

use coin_dashboard::model::responses::{
    CoinDetailResponse, CoinMarketResponse, ImageLinks, MarketChartResponse,
};
use serde_json::json;

#[test]
fn test_market_row_decodes_full_record() {
    let row: CoinMarketResponse = serde_json::from_value(json!({
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "image": "https://example.com/btc.png",
        "current_price": 67000.5,
        "market_cap": 1320000000000u64,
        "market_cap_rank": 1,
        "price_change_percentage_24h": -1.25,
        "total_volume": 1000
    }))
    .unwrap();

    assert_eq!(row.id, "bitcoin");
    assert_eq!(row.current_price, Some(67000.5));
    assert_eq!(row.market_cap, Some(1.32e12));
    assert_eq!(row.price_change_percentage_24h, Some(-1.25));
}

#[test]
fn test_market_row_tolerates_nulls_and_missing_fields() {
    let row: CoinMarketResponse = serde_json::from_value(json!({
        "id": "newcoin",
        "symbol": "new",
        "name": "New Coin",
        "current_price": null,
        "price_change_percentage_24h": null
    }))
    .unwrap();

    assert!(row.image.is_none());
    assert!(row.current_price.is_none());
    assert!(row.market_cap.is_none());
    assert!(row.price_change_percentage_24h.is_none());
}

#[test]
fn test_market_row_requires_identity() {
    let result = serde_json::from_value::<CoinMarketResponse>(json!({ "symbol": "x" }));
    assert!(result.is_err());
}

#[test]
fn test_detail_accessors_pick_currency() {
    let detail: CoinDetailResponse = serde_json::from_value(json!({
        "id": "ethereum",
        "symbol": "eth",
        "name": "Ethereum",
        "image": { "thumb": "t.png", "small": "s.png", "large": "l.png" },
        "market_data": {
            "current_price": { "usd": 3500.0, "eur": 3200.0 },
            "market_cap": { "usd": 420000000000.0 },
            "price_change_percentage_24h": 1.5
        }
    }))
    .unwrap();

    assert_eq!(detail.price_in("usd"), Some(3500.0));
    assert_eq!(detail.price_in("eur"), Some(3200.0));
    assert_eq!(detail.price_in("jpy"), None);
    assert_eq!(detail.market_cap_in("usd"), Some(4.2e11));
    assert_eq!(detail.market_cap_in("eur"), None);
    assert_eq!(detail.change_24h(), Some(1.5));
}

#[test]
fn test_detail_without_market_data() {
    let detail: CoinDetailResponse = serde_json::from_value(json!({
        "id": "ghost",
        "symbol": "gho",
        "name": "Ghost"
    }))
    .unwrap();

    assert!(detail.image.is_none());
    assert_eq!(detail.price_in("usd"), None);
    assert_eq!(detail.change_24h(), None);
}

#[test]
fn test_image_links_fall_back_to_smaller_sizes() {
    let links = ImageLinks {
        thumb: Some("t.png".to_string()),
        small: None,
        large: None,
    };
    assert_eq!(links.best(), Some("t.png".to_string()));
    assert_eq!(ImageLinks::default().best(), None);
}

#[test]
fn test_chart_decodes_integer_timestamps() {
    let chart: MarketChartResponse = serde_json::from_value(json!({
        "prices": [[1700000000000u64, 35000.1], [1700003600000u64, 35100]],
        "market_caps": [],
        "total_volumes": []
    }))
    .unwrap();
    assert_eq!(chart.prices.len(), 2);
    assert_eq!(chart.prices[1], [1_700_003_600_000.0, 35100.0]);
}

#[test]
fn test_chart_without_prices_is_empty() {
    let chart: MarketChartResponse = serde_json::from_value(json!({})).unwrap();
    assert!(chart.prices.is_empty());
}

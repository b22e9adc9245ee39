use coin_dashboard::model::responses::{
    CoinDetailResponse, CoinMarketData, CoinMarketResponse, ImageLinks,
};
use coin_dashboard::presentation::coin::Coin;
use std::collections::HashMap;

#[test]
fn test_coin_from_market_row() {
    let row = CoinMarketResponse {
        id: "solana".to_string(),
        symbol: "sol".to_string(),
        name: "Solana".to_string(),
        image: Some("sol.png".to_string()),
        current_price: Some(150.0),
        market_cap: Some(7.0e10),
        price_change_percentage_24h: Some(3.2),
    };
    let coin = Coin::from(row);
    assert_eq!(coin.id, "solana");
    assert_eq!(coin.ticker(), "SOL");
    assert_eq!(coin.image.as_deref(), Some("sol.png"));
    assert_eq!(coin.current_price, Some(150.0));
    assert_eq!(coin.market_cap, Some(7.0e10));
    assert_eq!(coin.price_change_percentage_24h, Some(3.2));
}

#[test]
fn test_coin_from_detail_projects_nested_fields() {
    let detail = CoinDetailResponse {
        id: "bitcoin".to_string(),
        symbol: "btc".to_string(),
        name: "Bitcoin".to_string(),
        image: Some(ImageLinks {
            thumb: Some("thumb.png".to_string()),
            small: Some("small.png".to_string()),
            large: Some("large.png".to_string()),
        }),
        market_data: Some(CoinMarketData {
            current_price: Some(HashMap::from([("usd".to_string(), 67000.0)])),
            market_cap: Some(HashMap::from([("usd".to_string(), 1.3e12)])),
            price_change_percentage_24h: Some(-0.8),
        }),
    };

    let coin = Coin::from_detail(detail, "usd");
    assert_eq!(coin.id, "bitcoin");
    assert_eq!(coin.name, "Bitcoin");
    assert_eq!(coin.image.as_deref(), Some("large.png"));
    assert_eq!(coin.current_price, Some(67000.0));
    assert_eq!(coin.market_cap, Some(1.3e12));
    assert_eq!(coin.price_change_percentage_24h, Some(-0.8));
}

#[test]
fn test_coin_from_detail_with_missing_currency() {
    let detail = CoinDetailResponse {
        id: "bitcoin".to_string(),
        symbol: "btc".to_string(),
        name: "Bitcoin".to_string(),
        image: None,
        market_data: Some(CoinMarketData {
            current_price: Some(HashMap::from([("usd".to_string(), 67000.0)])),
            market_cap: None,
            price_change_percentage_24h: None,
        }),
    };

    let coin = Coin::from_detail(detail, "eur");
    assert!(coin.image.is_none());
    assert!(coin.current_price.is_none());
    assert!(coin.market_cap.is_none());
    assert!(coin.price_change_percentage_24h.is_none());
}

#[test]
fn test_coin_builders() {
    let coin = Coin::new("x", "xx", "Xcoin")
        .with_price(1.5)
        .with_change(-2.0)
        .with_market_cap(10.0);
    assert_eq!(coin.current_price, Some(1.5));
    assert_eq!(coin.price_change_percentage_24h, Some(-2.0));
    assert_eq!(coin.market_cap, Some(10.0));
    assert!(coin.image.is_none());
}

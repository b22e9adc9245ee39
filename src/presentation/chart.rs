use crate::constants::CHART_DATE_FORMAT;
use crate::model::responses::MarketChartResponse;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// One sample of the detail chart
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct PricePoint {
    /// Sample time in epoch milliseconds
    pub timestamp: i64,
    /// Display label derived from the timestamp (UTC)
    pub date: String,
    /// Price in the quote currency
    pub price: f64,
}

impl PricePoint {
    /// Creates a point and derives its date label
    pub fn new(timestamp: i64, price: f64) -> Self {
        Self {
            timestamp,
            date: date_label(timestamp),
            price,
        }
    }
}

/// Formats an epoch-millisecond timestamp as a chart label
///
/// Timestamps outside chrono's range yield an empty label.
#[must_use]
pub fn date_label(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp)
        .map(|dt| dt.format(CHART_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Converts a market chart body into chronologically ordered points
///
/// Samples with a non-finite price are dropped.
#[must_use]
pub fn price_points(response: MarketChartResponse) -> Vec<PricePoint> {
    let mut points: Vec<PricePoint> = response
        .prices
        .into_iter()
        .filter(|[_, price]| price.is_finite())
        .map(|[timestamp, price]| PricePoint::new(timestamp as i64, price))
        .collect();
    points.sort_by_key(|point| point.timestamp);
    points
}

/// Aggregate figures of a price series, used by the detail view
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ChartSummary {
    /// First price of the window
    pub open: f64,
    /// Last price of the window
    pub close: f64,
    /// Lowest price of the window
    pub low: f64,
    /// Highest price of the window
    pub high: f64,
    /// Change from open to close, in percent
    pub change_percentage: f64,
}

impl ChartSummary {
    /// Summarizes a series; `None` when it is empty
    #[must_use]
    pub fn from_points(points: &[PricePoint]) -> Option<Self> {
        let first = points.first()?;
        let last = points.last()?;
        let (low, high) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), point| {
                (low.min(point.price), high.max(point.price))
            });
        let change_percentage = if first.price == 0.0 {
            0.0
        } else {
            (last.price - first.price) / first.price * 100.0
        };
        Some(Self {
            open: first.price,
            close: last.price,
            low,
            high,
            change_percentage,
        })
    }
}

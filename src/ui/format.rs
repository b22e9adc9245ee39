/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Placeholder shown for unknown figures
pub const UNKNOWN: &str = "—";

/// Inserts thousands separators into an integer
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an amount with two decimals and thousands separators, e.g. `$1,234.57`
#[must_use]
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Formats a price; sub-dollar prices keep up to six significant decimals
#[must_use]
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.abs() < 1.0 && p != 0.0 => {
            let mut text = format!("{:.6}", p.abs()).trim_end_matches('0').to_string();
            let decimals = text.split('.').nth(1).map_or(0, str::len);
            for _ in decimals..2 {
                text.push('0');
            }
            let sign = if p < 0.0 { "-" } else { "" };
            format!("{sign}${text}")
        }
        Some(p) => format_currency(p),
        None => UNKNOWN.to_string(),
    }
}

/// Formats a percentage with an explicit sign, e.g. `+5.00%`
#[must_use]
pub fn format_percentage(pct: Option<f64>) -> String {
    match pct {
        Some(p) if p > 0.0 => format!("+{p:.2}%"),
        Some(p) => format!("{p:.2}%"),
        None => UNKNOWN.to_string(),
    }
}

/// Arrow matching the direction of a change
#[must_use]
pub fn trend_arrow(pct: Option<f64>) -> &'static str {
    match pct {
        Some(p) if p > 0.0 => "▲",
        Some(p) if p < 0.0 => "▼",
        _ => " ",
    }
}

/// Formats a market capitalization in compact units, e.g. `$1.23T`
#[must_use]
pub fn format_market_cap(market_cap: Option<f64>) -> String {
    let Some(cap) = market_cap else {
        return UNKNOWN.to_string();
    };
    let units = [(1e12, "T"), (1e9, "B"), (1e6, "M")];
    for (scale, suffix) in units {
        if cap.abs() >= scale {
            return format!("${:.2}{suffix}", cap / scale);
        }
    }
    format!("${}", group_thousands(cap.abs().round() as u64))
}

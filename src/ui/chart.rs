use crate::presentation::chart::PricePoint;
use crate::ui::format::format_price;
use crate::ui::theme::Palette;

/// Averages the series into at most `width` buckets
fn resample(points: &[PricePoint], width: usize) -> Vec<f64> {
    if points.len() <= width {
        return points.iter().map(|p| p.price).collect();
    }
    (0..width)
        .map(|col| {
            let start = col * points.len() / width;
            let end = ((col + 1) * points.len() / width).max(start + 1);
            let bucket = &points[start..end];
            bucket.iter().map(|p| p.price).sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

/// Renders a price series as a text chart
///
/// The left gutter carries the high and low of the window, the bottom line
/// the first and last date labels. An empty series renders as an empty string.
#[must_use]
pub fn render_chart(points: &[PricePoint], width: usize, height: usize, palette: &Palette) -> String {
    if points.is_empty() || width == 0 || height == 0 {
        return String::new();
    }

    let columns = resample(points, width);
    let low = columns.iter().copied().fold(f64::INFINITY, f64::min);
    let high = columns.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = high - low;
    let levels: Vec<usize> = columns
        .iter()
        .map(|price| {
            if span <= f64::EPSILON {
                height / 2
            } else {
                (((price - low) / span) * (height - 1) as f64).round() as usize
            }
        })
        .collect();

    let high_label = format_price(Some(high));
    let low_label = format_price(Some(low));
    let gutter = high_label.len().max(low_label.len());

    let mut out = String::new();
    for row in (0..height).rev() {
        let label = if row == height - 1 {
            high_label.as_str()
        } else if row == 0 {
            low_label.as_str()
        } else {
            ""
        };
        out.push_str(&format!("{label:>gutter$} │"));
        for level in &levels {
            let glyph = if *level == row {
                palette.chart_point
            } else if *level > row {
                palette.chart_fill
            } else {
                ' '
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    let first = points.first().map(|p| p.date.as_str()).unwrap_or_default();
    let last = points.last().map(|p| p.date.as_str()).unwrap_or_default();
    let pad = levels.len().saturating_sub(first.len() + last.len());
    out.push_str(&format!("{:>gutter$} └{}\n", "", "─".repeat(levels.len())));
    out.push_str(&format!("{:>gutter$}  {first}{}{last}\n", "", " ".repeat(pad)));
    out
}

//! Formatting utilities used for CLI and export outputs.

use crate::models::{AggregateResult, ChartSeries};
use crate::utils::colors::{GREEN, GREY, RESET};
use chrono::NaiveDateTime;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `avg_per_bay` as shown on the dashboard: `0` when there are no bays,
/// otherwise at most two decimals keeping one (`2.0`, `1.5`, `1.33`).
pub fn format_avg(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0');
    if s.ends_with('.') {
        format!("{s}0")
    } else {
        s.to_string()
    }
}

/// "Period analyzed" banner text, or `None` when no row has a finish time.
pub fn format_period(result: &AggregateResult, date_format: &str) -> Option<String> {
    match (result.period_start, result.period_end) {
        (Some(start), Some(end)) => Some(format!(
            "{} to {}",
            format_date(&start, date_format),
            format_date(&end, date_format)
        )),
        _ => None,
    }
}

pub fn format_date(dt: &NaiveDateTime, date_format: &str) -> String {
    dt.date().format(date_format).to_string()
}

/// Horizontal bar chart; the longest bar is `width` characters.
pub fn render_bars(series: &ChartSeries, width: usize) -> String {
    let max = series.max_count();
    let label_width = series
        .points
        .iter()
        .map(|p| UnicodeWidthStr::width(p.label.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for p in &series.points {
        let len = if max == 0 {
            0
        } else {
            (p.count * width).div_ceil(max)
        };
        let pad = label_width - UnicodeWidthStr::width(p.label.as_str());
        out.push_str(&format!(
            "{}{} {GREEN}{}{RESET}{GREY}{}{RESET} {}\n",
            p.label,
            " ".repeat(pad),
            "█".repeat(len),
            "·".repeat(width - len),
            p.count
        ));
    }
    out
}

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// GREY for zero-valued KPIs, GREEN otherwise.
pub fn color_for_count(value: usize) -> &'static str {
    if value == 0 { GREY } else { GREEN }
}

/// Wraps a KPI value in its color.
pub fn colorize_count(value: usize) -> String {
    format!("{}{value}{RESET}", color_for_count(value))
}

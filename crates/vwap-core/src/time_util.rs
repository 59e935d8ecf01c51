//! Nanosecond-since-midnight timestamp rendering.
//!
//! ITCH timestamps and bucket keys are nanosecond offsets from the trading
//! day's local midnight. This module renders them as `HH:MM:SS[.fff...]`
//! column labels, with trailing zeros (and a bare trailing dot) stripped.

/// Render a nanosecond-since-midnight timestamp as `HH:MM:SS` or
/// `HH:MM:SS.ddd…` with trailing zeros stripped and no trailing dot.
pub fn render_clock(ts_ns: u64) -> String {
    let total_secs = ts_ns / 1_000_000_000;
    let frac_ns = ts_ns % 1_000_000_000;

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if frac_ns == 0 {
        return format!("{hours:02}:{minutes:02}:{seconds:02}");
    }

    let frac_str = format!("{frac_ns:09}");
    let trimmed = frac_str.trim_end_matches('0');
    format!("{hours:02}:{minutes:02}:{seconds:02}.{trimmed}")
}

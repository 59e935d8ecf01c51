//! Window and granularity validation for a VWAP run.
//!
//! Mirrors the parse-once-validate-eagerly shape the rest of this codebase
//! uses for its JSON connection configs: raw CLI strings come in, typed and
//! range-checked values come out, and every failure path is a [`VwapError`]
//! rather than a panic.

use crate::error::VwapError;

/// One trading-day clock bound, `HH:MM`, expressed in nanoseconds since local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub ns: u64,
}

impl ClockTime {
    /// Parse an `HH:MM` string into nanoseconds since midnight.
    pub fn parse(s: &str) -> Result<Self, VwapError> {
        let (h_str, m_str) = s
            .split_once(':')
            .ok_or_else(|| VwapError::InvalidWindow(format!("expected HH:MM, got {s:?}")))?;

        let hours: u64 = h_str
            .parse()
            .map_err(|_| VwapError::InvalidWindow(format!("bad hour in {s:?}")))?;
        let minutes: u64 = m_str
            .parse()
            .map_err(|_| VwapError::InvalidWindow(format!("bad minute in {s:?}")))?;

        if hours > 24 || minutes >= 60 || (hours == 24 && minutes != 0) {
            return Err(VwapError::InvalidWindow(format!("out-of-range time {s:?}")));
        }

        Ok(ClockTime { ns: (hours * 3600 + minutes * 60) * 1_000_000_000 })
    }
}

/// Validated `[start_ns, end_ns)` intraday window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start_ns: u64,
    pub end_ns: u64,
}

impl Window {
    pub fn parse(time_from: &str, time_to: &str) -> Result<Self, VwapError> {
        let start_ns = ClockTime::parse(time_from)?.ns;
        let end_ns = ClockTime::parse(time_to)?.ns;
        if end_ns <= start_ns {
            return Err(VwapError::InvalidWindow(format!(
                "time_to ({time_to}) must be after time_from ({time_from})"
            )));
        }
        Ok(Window { start_ns, end_ns })
    }

    pub fn span_ns(&self) -> u64 {
        self.end_ns - self.start_ns
    }
}

/// Bucket granularity, validated against a [`Window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Granularity {
    pub gran_ns: u64,
}

impl Granularity {
    /// Parse `<number><unit?>`, unit in {ns, us, ms, s}, missing unit means seconds.
    pub fn parse(s: &str, window: &Window) -> Result<Self, VwapError> {
        let s = s.trim();
        let (num_str, scale) = if let Some(rest) = s.strip_suffix("ns") {
            (rest, 1u64)
        } else if let Some(rest) = s.strip_suffix("us") {
            (rest, 1_000u64)
        } else if let Some(rest) = s.strip_suffix("ms") {
            (rest, 1_000_000u64)
        } else if let Some(rest) = s.strip_suffix('s') {
            (rest, 1_000_000_000u64)
        } else {
            (s, 1_000_000_000u64)
        };

        let value: f64 = num_str
            .trim()
            .parse()
            .map_err(|_| VwapError::InvalidGranularity(format!("unparseable granularity {s:?}")))?;

        if !value.is_finite() || value <= 0.0 {
            return Err(VwapError::InvalidGranularity(format!("non-positive granularity {s:?}")));
        }

        let gran_ns = (value * scale as f64).round() as u64;
        if gran_ns == 0 {
            return Err(VwapError::InvalidGranularity(format!("granularity rounds to zero: {s:?}")));
        }
        if gran_ns > window.span_ns() {
            return Err(VwapError::InvalidGranularity(format!(
                "granularity {gran_ns}ns exceeds window span {}ns",
                window.span_ns()
            )));
        }

        Ok(Granularity { gran_ns })
    }

    /// Number of dense buckets spanning the window: `ceil(span / gran_ns)`.
    pub fn bucket_count(&self, window: &Window) -> u64 {
        window.span_ns().div_ceil(self.gran_ns)
    }
}

/// Fully validated run configuration, built once before the engine starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub window: Window,
    pub granularity: Granularity,
}

impl RunConfig {
    pub fn parse(time_from: &str, time_to: &str, granularity: &str) -> Result<Self, VwapError> {
        let window = Window::parse(time_from, time_to)?;
        let granularity = Granularity::parse(granularity, &window)?;
        Ok(RunConfig { window, granularity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_and_granularity() {
        let cfg = RunConfig::parse("09:30", "16:00", "3600s").unwrap();
        assert_eq!(cfg.window.start_ns, (9 * 3600 + 30 * 60) * 1_000_000_000);
        assert_eq!(cfg.window.end_ns, 16 * 3600 * 1_000_000_000);
        assert_eq!(cfg.granularity.gran_ns, 3600 * 1_000_000_000);
    }

    #[test]
    fn full_day_bucket_count() {
        let cfg = RunConfig::parse("00:00", "24:00", "3600s").unwrap();
        assert_eq!(cfg.granularity.bucket_count(&cfg.window), 24);
    }

    #[test]
    fn granularity_without_unit_is_seconds() {
        let window = Window::parse("00:00", "01:00").unwrap();
        let g = Granularity::parse("30", &window).unwrap();
        assert_eq!(g.gran_ns, 30 * 1_000_000_000);
    }

    #[test]
    fn granularity_units_ns_us_ms() {
        let window = Window::parse("00:00", "01:00").unwrap();
        assert_eq!(Granularity::parse("500ns", &window).unwrap().gran_ns, 500);
        assert_eq!(Granularity::parse("500us", &window).unwrap().gran_ns, 500_000);
        assert_eq!(Granularity::parse("500ms", &window).unwrap().gran_ns, 500_000_000);
    }

    #[test]
    fn window_end_before_start_is_invalid() {
        assert!(Window::parse("16:00", "09:30").is_err());
    }

    #[test]
    fn granularity_wider_than_window_is_invalid() {
        let window = Window::parse("00:00", "01:00").unwrap();
        assert!(Granularity::parse("7200s", &window).is_err());
    }

    #[test]
    fn granularity_non_positive_is_invalid() {
        let window = Window::parse("00:00", "01:00").unwrap();
        assert!(Granularity::parse("0s", &window).is_err());
        assert!(Granularity::parse("-5s", &window).is_err());
    }

    #[test]
    fn bad_clock_time_is_invalid() {
        assert!(ClockTime::parse("25:00").is_err());
        assert!(ClockTime::parse("09:60").is_err());
        assert!(ClockTime::parse("nope").is_err());
    }
}

//! Bucketing & aggregation (C5).
//!
//! Classifies an execution's timestamp against the window, and accumulates
//! `(Σ price·qty, Σ qty)` into the `(stock_locate, bucket)` cell it falls in.
//! The grid is sparse here — missing cells default to zero at read time — the
//! dense enumeration happens in [`crate::emit`], which is equivalent to
//! pre-materializing a dense grid per the online-fold note in the design.

use ahash::AHashMap;
use vwap_core::config::{Granularity, Window};

/// Where a timestamp falls relative to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `ts_ns < start_ns` — drop, do not affect any cell.
    BeforeWindow,
    /// Falls in `[start_ns, end_ns)`, at this dense bucket key.
    InBucket(u64),
    /// `ts_ns >= end_ns` — the driver halts the parse entirely on this signal.
    AtOrAfterEnd,
}

/// Classify a timestamp against the window and granularity.
pub fn place(ts_ns: u64, window: &Window, gran: &Granularity) -> Placement {
    if ts_ns < window.start_ns {
        Placement::BeforeWindow
    } else if ts_ns >= window.end_ns {
        Placement::AtOrAfterEnd
    } else {
        let offset = ts_ns - window.start_ns;
        let bucket = (offset / gran.gran_ns) * gran.gran_ns + window.start_ns;
        Placement::InBucket(bucket)
    }
}

/// One `(value_sum, qty_sum)` accumulator cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cell {
    pub value_sum: f64,
    pub qty_sum: u64,
}

/// Sparse `(stock_locate, bucket) -> Cell` aggregation table.
#[derive(Debug, Default)]
pub struct Aggregator {
    cells: AHashMap<(u16, u64), Cell>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one priced, bucketed execution into its cell.
    pub fn add(&mut self, stock_locate: u16, bucket: u64, price: f64, qty: u32) {
        let cell = self.cells.entry((stock_locate, bucket)).or_default();
        cell.value_sum += price * qty as f64;
        cell.qty_sum += qty as u64;
    }

    /// The cell for `(stock_locate, bucket)`, or a zero cell if never touched.
    pub fn cell(&self, stock_locate: u16, bucket: u64) -> Cell {
        self.cells.get(&(stock_locate, bucket)).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start_h: u64, end_h: u64) -> Window {
        Window { start_ns: start_h * 3600 * 1_000_000_000, end_ns: end_h * 3600 * 1_000_000_000 }
    }

    #[test]
    fn before_window_is_dropped() {
        let w = window(0, 1);
        let g = Granularity { gran_ns: 3600 * 1_000_000_000 };
        assert_eq!(place(0, &Window { start_ns: 1, end_ns: w.end_ns }, &g), Placement::BeforeWindow);
    }

    #[test]
    fn at_or_after_end_halts() {
        let w = window(0, 1);
        let g = Granularity { gran_ns: 3600 * 1_000_000_000 };
        assert_eq!(place(w.end_ns, &w, &g), Placement::AtOrAfterEnd);
        assert_eq!(place(w.end_ns + 1, &w, &g), Placement::AtOrAfterEnd);
    }

    #[test]
    fn buckets_are_dense_within_window() {
        let w = window(0, 2);
        let g = Granularity { gran_ns: 3600 * 1_000_000_000 };
        assert_eq!(place(0, &w, &g), Placement::InBucket(0));
        assert_eq!(place(3_600_000_000_000, &w, &g), Placement::InBucket(3_600_000_000_000));
        assert_eq!(place(3_599_999_999_999, &w, &g), Placement::InBucket(0));
    }

    #[test]
    fn accumulation_sums_value_and_qty() {
        let mut agg = Aggregator::new();
        agg.add(1, 0, 150.0, 100);
        agg.add(1, 0, 155.0, 200);
        let cell = agg.cell(1, 0);
        assert_eq!(cell.qty_sum, 300);
        assert!((cell.value_sum - (150.0 * 100.0 + 155.0 * 200.0)).abs() < 1e-9);
    }

    #[test]
    fn untouched_cell_defaults_to_zero() {
        let agg = Aggregator::new();
        assert_eq!(agg.cell(1, 0), Cell::default());
    }
}

//! Running VWAP emitter (C6): second pass over the aggregation grid.
//!
//! For each known symbol (sorted by ticker, optionally filtered to one), walks
//! the dense bucket sequence in order, accumulates running `(value, qty)`
//! totals, and writes one wide CSV row of running VWAPs.

use vwap_core::config::{Granularity, RunConfig, Window};
use vwap_core::error::VwapError;
use vwap_core::time_util::render_clock;

use crate::aggregate::Aggregator;
use crate::directory::StockDirectory;

/// Dense, ascending bucket start times spanning the window.
fn bucket_keys(window: &Window, gran: &Granularity) -> Vec<u64> {
    let n = gran.bucket_count(window);
    (0..n).map(|i| window.start_ns + i * gran.gran_ns).collect()
}

/// Write the wide running-VWAP CSV to `out`.
///
/// `ticker_filter`, if given, restricts emission to that one ticker and is an
/// error (`UnknownTicker`) if the directory never announced it.
pub fn emit<W: std::io::Write>(
    out: W,
    directory: &StockDirectory,
    aggregator: &Aggregator,
    config: &RunConfig,
    ticker_filter: Option<&str>,
) -> Result<(), VwapError> {
    let keys = bucket_keys(&config.window, &config.granularity);

    let mut rows: Vec<(u16, &str)> = match ticker_filter {
        Some(ticker) => {
            let locate = directory
                .locate_for_ticker(ticker)
                .ok_or_else(|| VwapError::UnknownTicker(ticker.to_string()))?;
            vec![(locate, ticker)]
        }
        None => directory.entries().collect(),
    };
    rows.sort_by(|a, b| a.1.cmp(b.1));

    let mut writer = csv::WriterBuilder::new().from_writer(out);

    let mut header = vec!["Stock Ticker".to_string()];
    header.extend(keys.iter().map(|&k| render_clock(k)));
    writer.write_record(&header).map_err(csv_err)?;

    for (locate, ticker) in rows {
        let mut running_value = 0.0f64;
        let mut running_qty: u64 = 0;
        let mut record = vec![ticker.to_string()];
        for &bucket in &keys {
            let cell = aggregator.cell(locate, bucket);
            running_value += cell.value_sum;
            running_qty += cell.qty_sum;
            let vwap = if running_qty > 0 { running_value / running_qty as f64 } else { 0.0 };
            record.push(format!("{vwap}"));
        }
        writer.write_record(&record).map_err(csv_err)?;
    }

    writer.flush().map_err(io_err)?;
    Ok(())
}

fn csv_err(e: csv::Error) -> VwapError {
    io_err(std::io::Error::other(e))
}

fn io_err(source: std::io::Error) -> VwapError {
    VwapError::Io { path: "<output>".into(), source }
}

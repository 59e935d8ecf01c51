//! Driver (C8): wires the frame reader, decoder, stateful tables, aggregator
//! and emitter into the single sequential pass described by the rest of this
//! crate, and owns the run's progress logging.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use vwap_core::config::RunConfig;
use vwap_core::error::VwapError;

use crate::aggregate::{Aggregator, Placement};
use crate::decode::{decode, DecodedMessage};
use crate::directory::StockDirectory;
use crate::frame::{open_input, FrameReader};
use crate::price_cache::OrderPriceCache;

/// System-event codes that bookend the trading day (§4.2).
const MARKET_OPEN: u8 = b'Q';
const MARKET_CLOSE: u8 = b'M';

/// Run the full decode → aggregate → emit pipeline for `input_path`, writing
/// the resulting CSV to `<output_dir>/<basename_without_extension>.csv`.
///
/// Returns the path the CSV was written to. No output file is created if the
/// run fails before the emit stage completes.
pub fn run(
    input_path: &Path,
    output_dir: &Path,
    config: &RunConfig,
    ticker_filter: Option<&str>,
) -> Result<PathBuf, VwapError> {
    let reader = open_input(input_path)?;
    let mut frames = FrameReader::new(reader, input_path.to_path_buf());

    let mut directory = StockDirectory::new();
    let mut price_cache = OrderPriceCache::new();
    let mut aggregator = Aggregator::new();

    let mut frame_count: u64 = 0;
    let mut execution_count: u64 = 0;
    let mut market_open = false;

    while let Some(frame) = frames.next_frame()? {
        frame_count += 1;
        let msg_type = frame.msg_type;

        match decode(&frame) {
            DecodedMessage::SystemEvent { event_code, .. } => {
                if event_code == MARKET_OPEN {
                    market_open = true;
                    debug!("market open system event observed");
                } else if event_code == MARKET_CLOSE {
                    info!("market close system event observed, halting scan");
                    break;
                }
            }
            DecodedMessage::StockDirectory { stock_locate, ticker } => {
                directory.insert(stock_locate, ticker);
            }
            DecodedMessage::AddOrder { order_ref, price } => {
                price_cache.insert(order_ref, price);
            }
            DecodedMessage::OrderExecuted { stock_locate, ts_ns, order_ref, qty } => {
                let price = price_cache.price_or_zero(order_ref);
                if !place_and_add(&mut aggregator, config, stock_locate, ts_ns, price, qty) {
                    info!(ts_ns, "timestamp reached window end, halting scan");
                    break;
                }
                execution_count += 1;
            }
            DecodedMessage::OrderExecutedWithPrice { stock_locate, ts_ns, qty, printable, price } => {
                if printable {
                    if !place_and_add(&mut aggregator, config, stock_locate, ts_ns, price, qty) {
                        info!(ts_ns, "timestamp reached window end, halting scan");
                        break;
                    }
                    execution_count += 1;
                }
            }
            DecodedMessage::Trade { stock_locate, ts_ns, qty, price } => {
                if !place_and_add(&mut aggregator, config, stock_locate, ts_ns, price, qty) {
                    info!(ts_ns, "timestamp reached window end, halting scan");
                    break;
                }
                execution_count += 1;
            }
            DecodedMessage::Unhandled => {}
        }

        if frame_count % 1_000_000 == 0 {
            debug!(frame_count, execution_count, last_type = msg_type as char, "progress");
        }
    }

    if !market_open {
        warn!("scan completed without ever observing a market-open system event");
    }
    info!(frame_count, execution_count, symbols = directory.len(), "scan complete, emitting CSV");

    // Render into memory first: a fatal error from `emit` (e.g. an unknown
    // ticker filter) must never leave a partial CSV behind.
    let mut buf = Vec::new();
    crate::emit::emit(&mut buf, &directory, &aggregator, config, ticker_filter)?;

    let basename = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let out_path = output_dir.join(format!("{basename}.csv"));

    let file = File::create(&out_path).map_err(|source| VwapError::Io { path: out_path.clone(), source })?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&buf).map_err(|source| VwapError::Io { path: out_path.clone(), source })?;

    Ok(out_path)
}

/// Classify and, if in-window, fold one priced execution into the aggregator.
/// Returns `false` when the timestamp signals the caller should halt the scan.
fn place_and_add(
    aggregator: &mut Aggregator,
    config: &RunConfig,
    stock_locate: u16,
    ts_ns: u64,
    price: f64,
    qty: u32,
) -> bool {
    match crate::aggregate::place(ts_ns, &config.window, &config.granularity) {
        Placement::BeforeWindow => true,
        Placement::AtOrAfterEnd => false,
        Placement::InBucket(bucket) => {
            aggregator.add(stock_locate, bucket, price, qty);
            true
        }
    }
}

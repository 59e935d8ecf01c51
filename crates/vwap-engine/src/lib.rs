//! # vwap-engine
//!
//! The ITCH 5.0 decode → bucket → running-VWAP pipeline.
//!
//! ## Pipeline
//!
//! - [`size_table`] — message-type → fixed body length (the wire framing)
//! - [`frame`] — turns a byte stream (plain or gzip) into `(type, body)` frames
//! - [`decode`] — typed fields out of a framed body
//! - [`directory`] — stock-locate → ticker table
//! - [`price_cache`] — order-reference → price table, for price-less executions
//! - [`aggregate`] — window classification and per-bucket `(value, qty)` sums
//! - [`emit`] — running-VWAP sweep and wide CSV output
//! - [`driver`] — wires the above into one sequential pass over an input file

pub mod aggregate;
pub mod decode;
pub mod directory;
pub mod driver;
pub mod emit;
pub mod frame;
pub mod price_cache;
pub mod size_table;

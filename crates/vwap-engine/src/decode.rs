//! Message decoder (C2): typed fields out of a framed ITCH body.
//!
//! Only the fields the VWAP engine actually consumes are extracted; anything
//! else in a message body is left unread. Message types the engine has no use
//! for (order cancel, replace, delete, depth-of-book admin messages, …) are
//! framed by [`crate::frame`] but decode to [`DecodedMessage::Unhandled`] here
//! and are discarded by the caller.

use vwap_core::types::symbol_from_bytes;

use crate::frame::Frame;

/// A stock-locate-keyed execution the aggregator should price and bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Execution {
    pub stock_locate: u16,
    pub ts_ns: u64,
    pub price: f64,
    pub qty: u32,
}

/// One decoded, typed ITCH message relevant to VWAP reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedMessage {
    /// `S` — system event. `event_code` is the raw ASCII code (`'Q'`, `'M'`, …).
    SystemEvent { ts_ns: u64, event_code: u8 },
    /// `R` — stock directory entry.
    StockDirectory { stock_locate: u16, ticker: String },
    /// `A`/`F` — add order; only the fields needed to price a later `E` execution.
    AddOrder { order_ref: u64, price: f64 },
    /// `E` — order executed without an explicit price (look up in the price cache).
    OrderExecuted { stock_locate: u16, ts_ns: u64, order_ref: u64, qty: u32 },
    /// `C` — order executed with an explicit price, gated on the printable flag.
    OrderExecutedWithPrice { stock_locate: u16, ts_ns: u64, qty: u32, printable: bool, price: f64 },
    /// `P` — non-cross trade, self-priced.
    Trade { stock_locate: u16, ts_ns: u64, qty: u32, price: f64 },
    /// A framed, known message type this engine does not need.
    Unhandled,
}

const PRICE_SCALE: f64 = 10_000.0;

#[inline]
fn be_u16(b: &[u8]) -> u16 {
    u16::from_be_bytes([b[0], b[1]])
}

#[inline]
fn be_u32(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
}

#[inline]
fn be_u64(b: &[u8]) -> u64 {
    u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
}

/// Zero-extend a 6-byte big-endian timestamp field to `u64`.
#[inline]
fn be_ts48(b: &[u8]) -> u64 {
    let mut padded = [0u8; 8];
    padded[2..8].copy_from_slice(&b[..6]);
    u64::from_be_bytes(padded)
}

#[inline]
fn decode_price(raw: u32) -> f64 {
    raw as f64 / PRICE_SCALE
}

fn decode_symbol(b: &[u8]) -> String {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&b[..8]);
    symbol_from_bytes(&buf)
}

/// Decode a framed message body per its type byte. Offsets are relative to
/// the body (the 1-byte type header is not included).
pub fn decode(frame: &Frame) -> DecodedMessage {
    let body = &frame.body;
    match frame.msg_type {
        b'S' => DecodedMessage::SystemEvent { ts_ns: be_ts48(&body[2..8]), event_code: body[8] },
        b'R' => DecodedMessage::StockDirectory {
            stock_locate: be_u16(&body[0..2]),
            ticker: decode_symbol(&body[10..18]),
        },
        b'A' | b'F' => {
            DecodedMessage::AddOrder { order_ref: be_u64(&body[4..12]), price: decode_price(be_u32(&body[27..31])) }
        }
        b'E' => DecodedMessage::OrderExecuted {
            stock_locate: be_u16(&body[0..2]),
            ts_ns: be_ts48(&body[2..8]),
            order_ref: be_u64(&body[12..20]),
            qty: be_u32(&body[20..24]),
        },
        b'C' => DecodedMessage::OrderExecutedWithPrice {
            stock_locate: be_u16(&body[0..2]),
            ts_ns: be_ts48(&body[2..8]),
            qty: be_u32(&body[20..24]),
            printable: body[28] == b'Y',
            price: decode_price(be_u32(&body[29..33])),
        },
        b'P' => DecodedMessage::Trade {
            stock_locate: be_u16(&body[0..2]),
            ts_ns: be_ts48(&body[2..8]),
            qty: be_u32(&body[14..18]),
            price: decode_price(be_u32(&body[22..26])),
        },
        _ => DecodedMessage::Unhandled,
    }
}

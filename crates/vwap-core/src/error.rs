//! Typed error definitions for the ITCH VWAP toolchain.
//!
//! Provides [`VwapError`] for domain-specific errors that are more informative
//! than plain `anyhow::Error` strings. All variants implement `std::error::Error`
//! via `thiserror`, so they integrate seamlessly with `anyhow::Result`.

use std::path::PathBuf;

use thiserror::Error;

/// Domain-specific errors for the ITCH VWAP toolchain.
#[derive(Debug, Error)]
pub enum VwapError {
    /// Bad `HH:MM` window bound, or `time_to <= time_from`.
    #[error("invalid window: {0}")]
    InvalidWindow(String),

    /// Unparseable or non-positive granularity, or granularity wider than the window.
    #[error("invalid granularity: {0}")]
    InvalidGranularity(String),

    /// Open/read/decompress failure on the input file.
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A short read on a body whose type was known via the size table.
    #[error("decode error: short read for message type {msg_type:?} (wanted {wanted} bytes, got {got})")]
    Decode { msg_type: char, wanted: usize, got: usize },

    /// A `--ticker` filter named a symbol never seen in the stock directory.
    #[error("unknown ticker: {0:?} was not found in the stock directory")]
    UnknownTicker(String),
}

impl VwapError {
    /// Process exit code for this error kind, per the CLI's documented contract:
    /// `0` is reserved for success, so every variant here is non-zero and distinct.
    pub fn exit_code(&self) -> i32 {
        match self {
            VwapError::InvalidWindow(_) => 2,
            VwapError::InvalidGranularity(_) => 3,
            VwapError::Io { .. } => 4,
            VwapError::Decode { .. } => 5,
            VwapError::UnknownTicker(_) => 6,
        }
    }
}

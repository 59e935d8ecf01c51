//! # vwap-core
//!
//! Shared infrastructure for the ITCH VWAP toolchain, providing:
//!
//! - **Types** (`types`) — fixed-width ITCH symbol utilities
//! - **Configuration** (`config`) — window/granularity validation layer
//! - **Error types** (`error`) — domain-specific `VwapError` via thiserror
//! - **Time utilities** (`time_util`) — nanosecond timestamp parsing and rendering
//! - **Logging** (`logging`) — tracing-based structured logging

pub mod config;
pub mod error;
pub mod logging;
pub mod time_util;
pub mod types;

// Re-export types at crate root for convenience.
pub use types::*;

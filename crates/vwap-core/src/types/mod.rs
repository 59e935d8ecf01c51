//! Fixed-width wire types shared by the ITCH decoder and the CLI.

pub mod symbol;

pub use symbol::*;

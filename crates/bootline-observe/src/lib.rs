//! Logging setup shared by the bootline crates.
mod logger;
pub use logger::*;

//! Content cache: identifier → content handle or lazy factory.

mod operations;
mod types;

pub use types::*;

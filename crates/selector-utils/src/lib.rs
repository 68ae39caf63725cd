//! Shared utilities for the stock selection tool
//!
//! Currently only logging setup lives here, so the binary and any future
//! front-ends install the same subscriber.

pub mod logging;

pub use logging::{init_tracing, init_tracing_with_default};

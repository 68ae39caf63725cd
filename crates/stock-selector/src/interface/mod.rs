//! Terminal interface
//!
//! Menu parsing, output formatting and the interactive session loop.

pub mod commands;
pub mod formatter;
pub mod session;

pub use commands::{MainCommand, SessionCommand};
pub use formatter::CliFormatter;
pub use session::{StockSelector, UserSession};

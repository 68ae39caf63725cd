//! Interactive stock selection tool
//!
//! Users register and log in with an email and password, then analyze a
//! ticker's daily closing prices over a date range. Each analysis reports:
//!
//! - Average closing price
//! - Percentage change from the first to the last close
//! - Highest and lowest close
//!
//! All four values are rounded to two decimal places. Analyses can be saved
//! per user and viewed again later.
//!
//! # Architecture
//!
//! - [`auth`]: email/password policy and the credential store
//! - [`dates`]: `YYYY-MM-DD` validation
//! - [`engine`]: closing price statistics
//! - [`api`]: market data providers, with [`cache`] in front
//! - [`results`]: saved analyses per user
//! - [`storage`]: CSV-file and in-memory repositories behind both stores
//! - [`interface`]: the menu-driven terminal session
//!
//! # Example
//!
//! ```rust,ignore
//! use stock_selector::{SelectorConfig, StockSelector, api::default_provider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SelectorConfig::builder().with_env().build()?;
//!     let selector = StockSelector::from_config(&config, default_provider(&config));
//!
//!     let stdin = std::io::stdin();
//!     selector.run(&mut stdin.lock(), &mut std::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod dates;
pub mod engine;
pub mod error;
pub mod interface;
pub mod results;
pub mod storage;

// Re-export main types for convenience
pub use api::{MarketDataProvider, YahooFinanceProvider};
pub use auth::CredentialStore;
pub use config::SelectorConfig;
pub use engine::{AnalysisResult, PricePoint, StockAnalysisEngine};
pub use error::{Result, SelectorError};
pub use interface::StockSelector;
pub use results::ResultStore;

//! Market data providers
//!
//! The tool only needs daily closing prices. [`YahooFinanceProvider`] is the
//! production source; tests use the generated `MockMarketDataProvider`.

pub mod yahoo;

use crate::cache::CachedProvider;
use crate::config::SelectorConfig;
use crate::engine::PricePoint;
use crate::error::{Result, SelectorError};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

pub use yahoo::YahooFinanceProvider;

/// Source of historical closing prices
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Closing prices for `ticker` from `start` (inclusive) to `end`
    /// (exclusive), ordered by date ascending
    async fn closing_prices(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>>;
}

/// Trim a ticker and check it can be sent to a provider and used in a file name
pub fn validate_ticker(ticker: &str) -> Result<&str> {
    let ticker = ticker.trim();
    let usable = !ticker.is_empty()
        && !ticker
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '\\'));

    if usable {
        Ok(ticker)
    } else {
        Err(SelectorError::InvalidTicker(ticker.to_string()))
    }
}

/// Yahoo Finance, behind a price cache unless caching is disabled
pub fn default_provider(config: &SelectorConfig) -> Arc<dyn MarketDataProvider> {
    if config.cache_enabled {
        Arc::new(CachedProvider::new(YahooFinanceProvider::new(), config.cache_ttl))
    } else {
        Arc::new(YahooFinanceProvider::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ticker() {
        assert_eq!(validate_ticker("AAPL").unwrap(), "AAPL");
        assert_eq!(validate_ticker(" 1155.KL\n").unwrap(), "1155.KL");
        assert_eq!(validate_ticker("BRK-B").unwrap(), "BRK-B");
        assert_eq!(validate_ticker("^GSPC").unwrap(), "^GSPC");

        assert!(validate_ticker("").is_err());
        assert!(validate_ticker("   ").is_err());
        assert!(validate_ticker("A B").is_err());
        assert!(validate_ticker("../x").is_err());
        assert!(validate_ticker("a\\b").is_err());
    }
}

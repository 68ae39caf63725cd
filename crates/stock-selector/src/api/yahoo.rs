//! Yahoo Finance price source

use super::MarketDataProvider;
use crate::engine::PricePoint;
use crate::error::{Result, SelectorError};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use time::{Date, Month, OffsetDateTime};
use yahoo_finance_api as yahoo;

/// Daily closing prices from Yahoo Finance
#[derive(Debug, Clone, Default)]
pub struct YahooFinanceProvider {}

impl YahooFinanceProvider {
    /// Create a new Yahoo Finance provider
    pub fn new() -> Self {
        Self {}
    }
}

/// Midnight UTC at the start of `date`
fn to_offset_datetime(date: NaiveDate) -> Result<OffsetDateTime> {
    let invalid = |e: time::error::ComponentRange| SelectorError::InvalidDate(format!("{date}: {e}"));

    let month = Month::try_from(date.month() as u8).map_err(invalid)?;
    let day = Date::from_calendar_date(date.year(), month, date.day() as u8).map_err(invalid)?;
    Ok(day.midnight().assume_utc())
}

fn provider_error(ticker: &str, e: impl std::fmt::Display) -> SelectorError {
    tracing::warn!(ticker, error = %e, "Yahoo Finance request failed");
    SelectorError::DataProvider {
        ticker: ticker.to_string(),
        reason: e.to_string(),
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn closing_prices(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>> {
        let provider = yahoo::YahooConnector::new().map_err(|e| provider_error(ticker, e))?;

        let start_odt = to_offset_datetime(start)?;
        let end_odt = to_offset_datetime(end)?;

        tracing::debug!(ticker, %start, %end, "Fetching quote history");
        let response = provider
            .get_quote_history(ticker, start_odt, end_odt)
            .await
            .map_err(|e| provider_error(ticker, e))?;

        let quotes = response.quotes().map_err(|e| provider_error(ticker, e))?;

        let mut points: Vec<PricePoint> = quotes
            .iter()
            .filter_map(|q| {
                let date = DateTime::<Utc>::from_timestamp(q.timestamp as i64, 0)?.date_naive();
                Some(PricePoint::new(date, q.close))
            })
            .collect();

        if points.is_empty() {
            return Err(SelectorError::NoPriceData {
                ticker: ticker.to_string(),
            });
        }

        points.sort_by_key(|p| p.date);
        Ok(points)
    }
}

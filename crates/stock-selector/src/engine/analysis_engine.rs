//! Closing price statistics

use crate::api::{MarketDataProvider, validate_ticker};
use crate::dates::validate_range;
use crate::error::{Result, SelectorError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::num::FpCategory;
use std::sync::Arc;

use super::result::{AnalysisResult, PricePoint};

/// Compute average, percent change, high and low over `series`
///
/// The series is taken in the order given: percent change compares the
/// first and last points by position, not by date or value. Sums and ratios
/// outside the decimal range are reported as [`SelectorError::Overflow`].
pub fn analyze(series: &[PricePoint]) -> Result<AnalysisResult> {
    let prices = series
        .iter()
        .map(|p| Decimal::from_f64(p.price).ok_or(SelectorError::InvalidPrice(p.price)))
        .collect::<Result<Vec<_>>>()?;

    let (Some(first_point), Some(&first), Some(&last)) =
        (series.first(), prices.first(), prices.last())
    else {
        return Err(SelectorError::NoPriceData {
            ticker: String::new(),
        });
    };

    if first_point.price.classify() == FpCategory::Zero {
        return Err(SelectorError::ZeroFirstPrice);
    }
    // Nonzero but too small for a decimal; dividing by it is meaningless
    if first.is_zero() {
        return Err(SelectorError::InvalidPrice(first_point.price));
    }

    let total = prices
        .iter()
        .try_fold(Decimal::ZERO, |acc, &price| acc.checked_add(price))
        .ok_or(SelectorError::Overflow("sum of prices"))?;
    let average = total / Decimal::from(prices.len());

    let percent_change = last
        .checked_sub(first)
        .and_then(|delta| delta.checked_div(first))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(SelectorError::Overflow("percentage change"))?;

    let highest = prices.iter().copied().max().unwrap_or(first);
    let lowest = prices.iter().copied().min().unwrap_or(first);

    Ok(AnalysisResult::new(average, percent_change, highest, lowest))
}

/// Fetches a ticker's closing prices and summarises them
pub struct StockAnalysisEngine {
    provider: Arc<dyn MarketDataProvider>,
}

impl StockAnalysisEngine {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Analyze `ticker` over `[start, end)`
    pub async fn analyze_ticker(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AnalysisResult> {
        let ticker = validate_ticker(ticker)?;
        validate_range(start, end)?;

        let series = self.provider.closing_prices(ticker, start, end).await?;
        tracing::debug!(ticker, points = series.len(), "Analyzing closing prices");

        analyze(&series).map_err(|e| match e {
            SelectorError::NoPriceData { .. } => SelectorError::NoPriceData {
                ticker: ticker.to_string(),
            },
            other => other,
        })
    }
}

//! Analysis result types

use crate::storage::MetricRow;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub const AVERAGE_PRICE: &str = "Average Price";
pub const PERCENTAGE_CHANGE: &str = "Percentage Change (%)";
pub const HIGHEST_PRICE: &str = "Highest Price";
pub const LOWEST_PRICE: &str = "Lowest Price";

/// Number of fraction digits kept on every statistic
pub const RESULT_SCALE: u32 = 2;

/// One closing price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Summary statistics over a closing price series
///
/// Every field is rounded half-to-even and held at exactly two fraction
/// digits, so `105` is stored and rendered as `105.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisResult {
    pub average_price: Decimal,
    pub percent_change: Decimal,
    pub highest_price: Decimal,
    pub lowest_price: Decimal,
}

impl AnalysisResult {
    pub fn new(
        average_price: Decimal,
        percent_change: Decimal,
        highest_price: Decimal,
        lowest_price: Decimal,
    ) -> Self {
        Self {
            average_price: round_to_scale(average_price),
            percent_change: round_to_scale(percent_change),
            highest_price: round_to_scale(highest_price),
            lowest_price: round_to_scale(lowest_price),
        }
    }

    /// Metrics in their display and storage order
    pub fn metrics(&self) -> [(&'static str, Decimal); 4] {
        [
            (AVERAGE_PRICE, self.average_price),
            (PERCENTAGE_CHANGE, self.percent_change),
            (HIGHEST_PRICE, self.highest_price),
            (LOWEST_PRICE, self.lowest_price),
        ]
    }

    pub fn to_rows(&self) -> Vec<MetricRow> {
        self.metrics()
            .into_iter()
            .map(|(metric, value)| MetricRow::new(metric, value.to_string()))
            .collect()
    }
}

/// Round half-to-even to [`RESULT_SCALE`] digits and pad to that scale
pub fn round_to_scale(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(RESULT_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(RESULT_SCALE);
    rounded
}

//! Error types for stock selection operations

use thiserror::Error;

/// Errors raised by the stock selection tool
#[derive(Debug, Error)]
pub enum SelectorError {
    /// Email does not look like `local@domain.tld`
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Password fails the strength policy
    #[error("Password must be at least 8 characters long and include both letters and numbers")]
    WeakPassword,

    /// Email is already present in the credential store
    #[error("Email already registered: {0}")]
    AlreadyRegistered(String),

    /// Credential store has never been written
    #[error("No user data available. Please register first")]
    NoUserData,

    /// Date is not a real `YYYY-MM-DD` calendar date
    #[error("Invalid date format: {0:?}. Please use YYYY-MM-DD")]
    InvalidDate(String),

    /// Start date is not before end date
    #[error("Invalid date range: start {start} must be before end {end}")]
    InvalidDateRange {
        start: String,
        end: String,
    },

    /// Ticker cannot be used as a storage key
    #[error("Invalid ticker: {0:?}")]
    InvalidTicker(String),

    /// Provider returned nothing for the requested range
    #[error("No data found for ticker {ticker} in the given date range")]
    NoPriceData {
        ticker: String,
    },

    /// Price is NaN or infinite
    #[error("Invalid price value: {0}")]
    InvalidPrice(f64),

    /// First price of the series is zero, so percent change is undefined
    #[error("Cannot compute percentage change: first price is zero")]
    ZeroFirstPrice,

    /// Price arithmetic left the representable decimal range
    #[error("Prices are too large to analyze: {0} overflowed")]
    Overflow(&'static str),

    /// Market data provider failed
    #[error("Error fetching data for ticker {ticker}: {reason}")]
    DataProvider {
        ticker: String,
        reason: String,
    },

    /// User has no saved analyses
    #[error("No saved data found")]
    NoSavedResults,

    /// Saved-file selection was not a listed number
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Menu input did not match any option
    #[error("Invalid choice. Please select 1, 2, or 3.")]
    InvalidChoice(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for stock selection operations
pub type Result<T> = std::result::Result<T, SelectorError>;

/// Convert anyhow::Error to SelectorError
impl From<anyhow::Error> for SelectorError {
    fn from(err: anyhow::Error) -> Self {
        SelectorError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelectorError::InvalidTicker("A B".to_string());
        assert_eq!(err.to_string(), "Invalid ticker: \"A B\"");

        let err = SelectorError::NoPriceData {
            ticker: "AAPL".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No data found for ticker AAPL in the given date range"
        );

        let err = SelectorError::DataProvider {
            ticker: "1155.KL".to_string(),
            reason: "timeout".to_string(),
        };
        assert_eq!(err.to_string(), "Error fetching data for ticker 1155.KL: timeout");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SelectorError = io_err.into();
        assert!(matches!(err, SelectorError::Io(_)));

        let err: SelectorError = anyhow::anyhow!("boom").into();
        match err {
            SelectorError::Other(msg) => assert_eq!(msg, "boom"),
            _ => panic!("Expected Other variant"),
        }
    }
}

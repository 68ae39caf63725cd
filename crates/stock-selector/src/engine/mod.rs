//! Stock Analysis Engine
//!
//! Turns a closing price series into four summary statistics

pub mod analysis_engine;
pub mod result;

pub use analysis_engine::{StockAnalysisEngine, analyze};
pub use result::{AnalysisResult, PricePoint};

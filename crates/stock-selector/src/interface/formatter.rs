//! Response formatting utilities

use crate::engine::AnalysisResult;
use crate::error::SelectorError;
use crate::results::StoredResultFile;
use comfy_table::{Table, presets::UTF8_FULL};

/// Plain-text rendering for the terminal session
#[derive(Debug, Clone, Copy, Default)]
pub struct CliFormatter;

impl CliFormatter {
    pub fn banner(&self) -> &'static str {
        "************************\n\
        *                      *\n\
        *      Welcome to      *\n\
        * Stock Selection Tool *\n\
        *        System        *\n\
        ************************"
    }

    pub fn format_analysis(&self, result: &AnalysisResult) -> String {
        let mut output = String::from("\nStock Analysis Results:\n");
        for (metric, value) in result.metrics() {
            output.push_str(&format!("{metric}: {value}\n"));
        }
        output
    }

    pub fn format_table(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(headers.to_vec());
        for row in rows {
            table.add_row(row.clone());
        }
        table.to_string()
    }

    pub fn format_listing(&self, names: &[String]) -> String {
        let mut output = String::from("Available analysis files:\n");
        for (i, name) in names.iter().enumerate() {
            output.push_str(&format!("{}. {name}\n", i + 1));
        }
        output
    }

    pub fn format_saved(&self, file: &StoredResultFile) -> String {
        let rows: Vec<Vec<String>> = file
            .rows
            .iter()
            .map(|r| vec![r.metric.clone(), r.value.clone()])
            .collect();
        format!(
            "\nData from {}:\n\n{}",
            file.name,
            self.format_table(&["Metric", "Value"], &rows)
        )
    }

    pub fn format_error(&self, error: &SelectorError) -> String {
        format!("❌ Error: {error}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MetricRow;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_analysis() {
        let result = AnalysisResult::new(dec!(105), dec!(20), dec!(120), dec!(90));
        let output = CliFormatter.format_analysis(&result);

        assert!(output.contains("Average Price: 105.00\n"));
        assert!(output.contains("Percentage Change (%): 20.00\n"));
        assert!(output.contains("Highest Price: 120.00\n"));
        assert!(output.contains("Lowest Price: 90.00\n"));
    }

    #[test]
    fn test_format_listing_is_one_based() {
        let names = vec!["a_AAPL.csv".to_string(), "a_MSFT.csv".to_string()];
        assert_eq!(
            CliFormatter.format_listing(&names),
            "Available analysis files:\n1. a_AAPL.csv\n2. a_MSFT.csv\n"
        );
    }

    #[test]
    fn test_format_saved() {
        let file = StoredResultFile {
            name: "a_AAPL.csv".to_string(),
            rows: vec![
                MetricRow::new("Average Price", "105.00"),
                MetricRow::new("Lowest Price", "90.00"),
            ],
        };
        let output = CliFormatter.format_saved(&file);

        assert!(output.starts_with("\nData from a_AAPL.csv:\n\n"));
        assert!(output.contains("Metric"));
        assert!(output.contains("Average Price"));
        assert!(output.contains("90.00"));
        let average = output.find("Average Price").unwrap();
        let lowest = output.find("Lowest Price").unwrap();
        assert!(average < lowest);
    }

    #[test]
    fn test_format_error() {
        let output = CliFormatter.format_error(&SelectorError::NoSavedResults);
        assert_eq!(output, "❌ Error: No saved data found");
    }
}

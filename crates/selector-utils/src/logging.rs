//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset; quiet enough for an interactive terminal
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Initialize tracing with [`DEFAULT_DIRECTIVE`] as the fallback filter
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_DIRECTIVE);
}

/// Initialize tracing with `default_directive` as the fallback filter
///
/// Events go to stderr; stdout belongs to the interactive menus.
pub fn init_tracing_with_default(default_directive: &str) {
    tracing_subscriber::registry()
        .with(build_filter(default_directive))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_falls_back_to_default() {
        // RUST_LOG is not set by the test harness
        if std::env::var("RUST_LOG").is_err() {
            let filter = build_filter("warn,stock_selector=debug");
            let rendered = filter.to_string();
            assert!(rendered.contains("stock_selector=debug"));
            assert!(rendered.contains("warn"));
        }
    }

    #[test]
    fn test_default_directive_parses() {
        if std::env::var("RUST_LOG").is_err() {
            assert!(build_filter(DEFAULT_DIRECTIVE).to_string().contains("warn"));
        }
    }
}

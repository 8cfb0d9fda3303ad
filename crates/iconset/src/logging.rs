//! Logging initialization.
//!
//! Uses the `tracing` ecosystem with either human-readable or JSON output.
//! Logs go to stderr; stdout is reserved for the usage message.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Resolved logging settings: config file values with the `-v` override applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Default filter directive when RUST_LOG is unset
    pub level: String,
    /// Emit JSON lines instead of pretty text
    pub json: bool,
}

impl LogSettings {
    /// `-v` forces DEBUG unless the config already asks for TRACE.
    pub fn resolve(config: &iconset_core::Config, verbose: bool) -> Self {
        let configured = config.logging.level.to_lowercase();
        let level = if verbose && configured != "trace" {
            "debug".to_string()
        } else {
            configured
        };
        Self {
            level,
            json: config.logging.format == "json",
        }
    }

    /// Install the global subscriber. RUST_LOG, if set, wins over `level`.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        if self.json {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr)
                        .with_ansi(true),
                )
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconset_core::Config;

    #[test]
    fn default_is_info_pretty() {
        let settings = LogSettings::resolve(&Config::default(), false);
        assert_eq!(settings.level, "info");
        assert!(!settings.json);
    }

    #[test]
    fn verbose_raises_to_debug() {
        let settings = LogSettings::resolve(&Config::default(), true);
        assert_eq!(settings.level, "debug");
    }

    #[test]
    fn verbose_keeps_trace() {
        let mut config = Config::default();
        config.logging.level = "TRACE".to_string();
        let settings = LogSettings::resolve(&config, true);
        assert_eq!(settings.level, "trace");
    }

    #[test]
    fn json_format_from_config() {
        let mut config = Config::default();
        config.logging.format = "json".to_string();
        assert!(LogSettings::resolve(&config, false).json);
    }
}

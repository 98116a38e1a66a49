//! Application configuration loaded from environment variables.

use std::env;

use crate::telemetry::TelemetryConfig;

const DEFAULT_TITLE: &str = "PESU Lost and Found";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Heading shown above the filter buttons.
    pub title: String,
    /// Start the session with the sample feed.
    pub seed_samples: bool,
    pub telemetry: TelemetryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            seed_samples: true,
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            title: lookup("BOARD_TITLE")
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            seed_samples: lookup("BOARD_SEED_SAMPLES")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            telemetry: TelemetryConfig {
                json_logs: lookup("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_in(&[]));
        assert_eq!(config.title, "PESU Lost and Found");
        assert!(config.seed_samples);
        assert!(!config.telemetry.json_logs);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_in(&[
            ("BOARD_TITLE", "  Campus Board "),
            ("BOARD_SEED_SAMPLES", "0"),
            ("LOG_FORMAT", "JSON"),
        ]));
        assert_eq!(config.title, "Campus Board");
        assert!(!config.seed_samples);
        assert!(config.telemetry.json_logs);
    }

    #[test]
    fn test_blank_title_falls_back() {
        let config = AppConfig::from_lookup(lookup_in(&[("BOARD_TITLE", "   ")]));
        assert_eq!(config.title, DEFAULT_TITLE);
    }
}

use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_SERVICE_NAME: &str = "ollama-mock";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    /// OTLP collector for span export; unset disables export.
    pub otlp_endpoint: Option<String>,
}

impl MockConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        Ok(Self::from_vars(common_config, |key| env::var(key).ok()))
    }

    /// Fill the service settings from `lookup`; unset and empty values fall
    /// back to defaults.
    fn from_vars(common: core_config::Config, lookup: impl Fn(&str) -> Option<String>) -> Self {
        MockConfig {
            common,
            service_name: get_var(&lookup, "SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            log_level: get_var(&lookup, "LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            otlp_endpoint: get_var(&lookup, "OTLP_ENDPOINT"),
        }
    }

    /// Settings for tests: random port on loopback, no exporter.
    pub fn for_tests() -> Self {
        MockConfig {
            common: core_config::Config {
                host: [127, 0, 0, 1].into(),
                port: 0,
            },
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        }
    }
}

fn get_var(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_binds_loopback_on_random_port() {
        let config = MockConfig::for_tests();
        assert_eq!(config.common.socket_addr().to_string(), "127.0.0.1:0");
        assert!(config.otlp_endpoint.is_none());
    }

    fn from_map(vars: &[(&str, &str)]) -> MockConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MockConfig::from_vars(core_config::Config::default(), |key| vars.get(key).cloned())
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = from_map(&[]);
        assert_eq!(config.service_name, "ollama-mock");
        assert_eq!(config.log_level, "info");
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn variables_override_defaults() {
        let config = from_map(&[
            ("SERVICE_NAME", "cards-mock"),
            ("LOG_LEVEL", "debug"),
            ("OTLP_ENDPOINT", "http://tempo:4317"),
        ]);
        assert_eq!(config.service_name, "cards-mock");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.otlp_endpoint.as_deref(), Some("http://tempo:4317"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = from_map(&[
            ("SERVICE_NAME", ""),
            ("LOG_LEVEL", ""),
            ("OTLP_ENDPOINT", ""),
        ]);
        assert_eq!(config.service_name, "ollama-mock");
        assert_eq!(config.log_level, "info");
        assert!(config.otlp_endpoint.is_none());
    }
}

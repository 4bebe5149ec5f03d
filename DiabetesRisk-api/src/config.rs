//! Server configuration read from the environment.

use std::time::Duration;

use tracing::warn;

use diabetes_risk_data::client::DEFAULT_TIMEOUT;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;
/// Default inference endpoint
pub const DEFAULT_INFERENCE_URL: &str = "http://localhost:5001/predict";
/// Default inference request timeout in seconds
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();

/// Runtime configuration of the API server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Allowed CORS origin; any origin when unset
    pub client_origin: Option<String>,
    /// Inference service endpoint the relay forwards to
    pub inference_url: String,
    /// Timeout applied to inference requests
    pub inference_timeout: Duration,
    /// Environment name reported by the health check
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            client_origin: None,
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            inference_timeout: DEFAULT_TIMEOUT,
            environment: "development".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!("Invalid PORT '{}', using default {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let inference_timeout = match non_empty("INFERENCE_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "Invalid INFERENCE_TIMEOUT_SECS '{}', using default {}",
                        raw, DEFAULT_INFERENCE_TIMEOUT_SECS
                    );
                    defaults.inference_timeout
                }
            },
            None => defaults.inference_timeout,
        };

        let inference_url = non_empty("INFERENCE_URL").unwrap_or_else(|| {
            warn!("INFERENCE_URL not set, using default {}", DEFAULT_INFERENCE_URL);
            defaults.inference_url
        });

        Self {
            port,
            client_origin: non_empty("CLIENT_ORIGIN"),
            inference_url,
            inference_timeout,
            environment: non_empty("APP_ENV").unwrap_or(defaults.environment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        assert_eq!(config_from(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().port, 5000);
        // Inference timeout follows the data layer's client default
        assert_eq!(ServerConfig::default().inference_timeout, DEFAULT_TIMEOUT);
        assert_eq!(DEFAULT_INFERENCE_TIMEOUT_SECS, 10);
    }

    #[test]
    fn test_reads_every_variable() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("CLIENT_ORIGIN", "http://localhost:3000"),
            ("INFERENCE_URL", "http://ml:5001/predict"),
            ("INFERENCE_TIMEOUT_SECS", "3"),
            ("APP_ENV", "production"),
        ]);

        assert_eq!(config.port, 8080);
        assert_eq!(config.client_origin.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.inference_url, "http://ml:5001/predict");
        assert_eq!(config.inference_timeout, Duration::from_secs(3));
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("INFERENCE_TIMEOUT_SECS", "0"), ("CLIENT_ORIGIN", "  ")]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.inference_timeout, Duration::from_secs(DEFAULT_INFERENCE_TIMEOUT_SECS));
        assert!(config.client_origin.is_none());
    }
}

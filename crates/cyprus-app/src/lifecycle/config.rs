//! # Runtime Configuration
//!
//! [`CyprusConfig`] carries the few knobs the system has. Defaults match the simulated
//! backend; environment variables override them at startup:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `CYPRUS_LATENCY_MS` | `latency_ms` | `1500` |
//! | `CYPRUS_CHANNEL_BUFFER` | `channel_buffer` | `32` |

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const LATENCY_ENV: &str = "CYPRUS_LATENCY_MS";
pub const CHANNEL_BUFFER_ENV: &str = "CYPRUS_CHANNEL_BUFFER";

const DEFAULT_CHANNEL_BUFFER: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CyprusConfig {
    /// Simulated round-trip time of every catalog request, in milliseconds.
    pub latency_ms: u64,
    /// Capacity of the catalog actor's request channel. tokio's mpsc rejects zero.
    pub channel_buffer: NonZeroUsize,
}

impl Default for CyprusConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl CyprusConfig {
    /// Defaults, overridden by `CYPRUS_*` environment variables when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LATENCY_ENV) {
            config.latency_ms = parse_value(LATENCY_ENV, &value)?;
            info!(latency_ms = config.latency_ms, "Latency override");
        }

        if let Some(value) = lookup(CHANNEL_BUFFER_ENV) {
            config.channel_buffer = parse_value(CHANNEL_BUFFER_ENV, &value)?;
            info!(channel_buffer = config.channel_buffer.get(), "Channel buffer override");
        }

        Ok(config)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CyprusConfig::default();
        assert_eq!(config.latency_ms, 1500);
        assert_eq!(config.channel_buffer.get(), 32);
        assert_eq!(config.latency(), Duration::from_millis(1500));
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = CyprusConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CyprusConfig::default());
    }

    #[test]
    fn test_overrides_apply() {
        let config = CyprusConfig::from_lookup(lookup_from(&[
            (LATENCY_ENV, "0"),
            (CHANNEL_BUFFER_ENV, "4"),
        ]))
        .unwrap();
        assert_eq!(config.latency_ms, 0);
        assert_eq!(config.channel_buffer.get(), 4);
    }

    #[test]
    fn test_malformed_values_are_rejected() {
        let err = CyprusConfig::from_lookup(lookup_from(&[(LATENCY_ENV, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: LATENCY_ENV.to_string(),
                value: "soon".to_string(),
            }
        );

        let err = CyprusConfig::from_lookup(lookup_from(&[(CHANNEL_BUFFER_ENV, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let config: CyprusConfig = serde_json::from_str(r#"{"latency_ms": 10}"#).unwrap();
        assert_eq!(config.latency_ms, 10);
        assert_eq!(config.channel_buffer.get(), 32);
    }

    #[test]
    fn test_zero_channel_buffer_is_rejected_when_deserializing() {
        let result = serde_json::from_str::<CyprusConfig>(r#"{"channel_buffer": 0}"#);
        assert!(result.is_err());
    }
}

//! Configuration for the response engine

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a [`crate::engine::ResponseEngine`]
///
/// The latency window emulates inference time: every call sleeps a uniform
/// draw from `[latency_min, latency_max]` before responding. Tests should
/// use [`EngineConfig::instant`] so nothing depends on wall-clock timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Lower bound of the simulated processing delay
    pub latency_min: Duration,

    /// Upper bound of the simulated processing delay
    pub latency_max: Duration,

    /// Maximum accepted input size; longer input fails fast at the boundary
    pub max_input_bytes: usize,

    /// Advisory number of history entries to replay for prompt context
    pub history_replay: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            latency_min: Duration::from_secs(1),
            latency_max: Duration::from_secs(3),
            max_input_bytes: 16 * 1024,
            history_replay: 20,
        }
    }
}

impl EngineConfig {
    /// Create a new configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Configuration with the latency simulation disabled, for tests and
    /// batch callers
    pub fn instant() -> Self {
        Self {
            latency_min: Duration::ZERO,
            latency_max: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.latency_min > self.latency_max {
            return Err(EngineError::ConfigError(
                "latency_min exceeds latency_max".to_string(),
            ));
        }

        if self.max_input_bytes == 0 {
            return Err(EngineError::ConfigError(
                "max_input_bytes must be greater than 0".to_string(),
            ));
        }

        if self.history_replay == 0 {
            return Err(EngineError::ConfigError(
                "history_replay must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for EngineConfig
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    latency_min: Option<Duration>,
    latency_max: Option<Duration>,
    max_input_bytes: Option<usize>,
    history_replay: Option<usize>,
}

impl EngineConfigBuilder {
    /// Set the lower latency bound
    pub fn latency_min(mut self, duration: Duration) -> Self {
        self.latency_min = Some(duration);
        self
    }

    /// Set the upper latency bound
    pub fn latency_max(mut self, duration: Duration) -> Self {
        self.latency_max = Some(duration);
        self
    }

    /// Set both latency bounds at once
    pub fn latency(mut self, min: Duration, max: Duration) -> Self {
        self.latency_min = Some(min);
        self.latency_max = Some(max);
        self
    }

    /// Set the maximum accepted input size
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = Some(bytes);
        self
    }

    /// Set the advisory history replay count
    pub fn history_replay(mut self, entries: usize) -> Self {
        self.history_replay = Some(entries);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let defaults = EngineConfig::default();

        let config = EngineConfig {
            latency_min: self.latency_min.unwrap_or(defaults.latency_min),
            latency_max: self.latency_max.unwrap_or(defaults.latency_max),
            max_input_bytes: self.max_input_bytes.unwrap_or(defaults.max_input_bytes),
            history_replay: self.history_replay.unwrap_or(defaults.history_replay),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.latency_min, Duration::from_secs(1));
        assert_eq!(config.latency_max, Duration::from_secs(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_instant_config() {
        let config = EngineConfig::instant();
        assert!(config.latency_min.is_zero());
        assert!(config.latency_max.is_zero());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::builder()
            .latency(Duration::from_millis(10), Duration::from_millis(50))
            .max_input_bytes(1024)
            .build()
            .unwrap();

        assert_eq!(config.latency_max, Duration::from_millis(50));
        assert_eq!(config.max_input_bytes, 1024);
    }

    #[test]
    fn test_validation_inverted_latency() {
        let config = EngineConfig {
            latency_min: Duration::from_secs(5),
            latency_max: Duration::from_secs(1),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_max_input() {
        let result = EngineConfig::builder().max_input_bytes(0).build();
        assert!(result.is_err());
    }
}

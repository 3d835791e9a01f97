//! Loop configuration types and builder

use core::time::Duration;

pub use crate::error::ConfigError;

/// Default interval between two polls, in milliseconds
///
/// Longer intervals lower CPU and power use at the cost of input latency.
pub const POLL_INTERVAL_MS: u32 = 100;

/// Event loop configuration
///
/// Use [`LoopConfig::builder`] to override the defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopConfig {
    poll_interval_ms: u32,
}

impl LoopConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> LoopConfigBuilder {
        LoopConfigBuilder::default()
    }

    /// Sleep between two polls, in milliseconds
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_ms
    }

    /// Sleep between two polls
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms))
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

/// Builder for constructing a [`LoopConfig`]
///
/// # Example
///
/// ```
/// use boilerboard::{LoopConfig, ConfigError};
///
/// let config = LoopConfig::builder().poll_interval_ms(50).build().unwrap();
/// assert_eq!(config.poll_interval_ms(), 50);
///
/// let result = LoopConfig::builder().poll_interval_ms(0).build();
/// assert_eq!(result, Err(ConfigError::ZeroPollInterval));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LoopConfigBuilder {
    poll_interval_ms: u32,
}

impl Default for LoopConfigBuilder {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

impl LoopConfigBuilder {
    /// Set the poll interval in milliseconds
    pub fn poll_interval_ms(mut self, ms: u32) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroPollInterval` if the interval is zero
    pub fn build(self) -> Result<LoopConfig, ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(LoopConfig {
            poll_interval_ms: self.poll_interval_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_100ms() {
        let config = LoopConfig::default();
        assert_eq!(config.poll_interval_ms(), 100);
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
    }

    #[test]
    fn builder_without_overrides_matches_default() {
        assert_eq!(LoopConfig::builder().build(), Ok(LoopConfig::default()));
    }

    #[test]
    fn builder_rejects_zero_interval() {
        assert_eq!(
            LoopConfig::builder().poll_interval_ms(0).build(),
            Err(ConfigError::ZeroPollInterval)
        );
    }
}

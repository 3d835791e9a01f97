//! Error types for the event loop
//!
//! - [`Error`] - Fatal runtime errors raised while the loop is running
//! - [`ConfigError`] - Errors during [`LoopConfig`](crate::LoopConfig) construction
//!
//! Panel-level errors live next to the driver in
//! [`PanelError`](crate::panel::PanelError).

use core::fmt;

use crate::panel::{MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};

/// Fatal errors that end [`EventLoop::run`](crate::EventLoop::run)
///
/// Generic over the input source and display error types so callers can match
/// on the underlying hardware error. Neither variant is retried by the loop.
#[derive(Debug, PartialEq)]
pub enum Error<SE, DE> {
    /// The input source could not complete a poll
    InputSource(SE),
    /// Filling or presenting the frame buffer failed during initialization
    Display(DE),
}

impl<SE: fmt::Debug, DE: fmt::Debug> fmt::Display for Error<SE, DE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputSource(e) => write!(f, "Input source failure: {e:?}"),
            Error::Display(e) => write!(f, "Display failure: {e:?}"),
        }
    }
}

impl<SE: fmt::Debug, DE: fmt::Debug> core::error::Error for Error<SE, DE> {}

/// Errors that can occur when building configuration
///
/// Covers both [`LoopConfig`](crate::LoopConfig) and
/// [`PanelConfig`](crate::PanelConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero poll interval would turn the loop into a busy spin
    ZeroPollInterval,
    /// Panel geometry outside the controller's limits
    ///
    /// Dimensions must satisfy:
    /// - 1 <= rows <= MAX_GATE_OUTPUTS (680)
    /// - 8 <= cols <= MAX_SOURCE_OUTPUTS (960)
    /// - cols must be a multiple of 8
    InvalidPanelDimensions {
        /// Number of rows (gate lines) requested
        rows: u16,
        /// Number of columns (source lines) requested
        cols: u16,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroPollInterval => write!(f, "Poll interval must be at least 1 ms"),
            ConfigError::InvalidPanelDimensions { rows, cols } => write!(
                f,
                "Invalid panel dimensions {rows}x{cols} (max {MAX_GATE_OUTPUTS}x{MAX_SOURCE_OUTPUTS}, cols must be multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_failing_side() {
        let input: Error<&str, ()> = Error::InputSource("adc stuck");
        assert_eq!(input.to_string(), "Input source failure: \"adc stuck\"");

        let display: Error<(), &str> = Error::Display("busy");
        assert_eq!(display.to_string(), "Display failure: \"busy\"");
    }
}

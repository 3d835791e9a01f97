//! Monochrome panel drivers
//!
//! A [`FramePanel`] accepts a whole packed 1bpp frame and puts it on the
//! glass. [`Ssd1677Panel`] drives an SSD1677 e-paper controller over
//! embedded-hal v1.0 SPI and GPIO.
//!
//! ## Hardware Requirements
//!
//! The SSD1677 requires:
//! - SPI bus (MOSI + SCK)
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input, active high)

mod command;
mod ssd1677;

use core::fmt::Debug;

use embedded_graphics_core::geometry::Size;

use crate::error::ConfigError;

pub use self::ssd1677::{PanelError, Ssd1677Panel};

/// Maximum gate outputs (rows) supported by the SSD1677 controller
pub const MAX_GATE_OUTPUTS: u16 = 680;

/// Maximum source outputs (columns) supported by the SSD1677 controller
pub const MAX_SOURCE_OUTPUTS: u16 = 960;

/// Default time to wait for BUSY to deassert after a refresh
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 30_000;

/// A display that takes whole packed frames
pub trait FramePanel {
    /// Error type for panel operations
    type Error: Debug;

    /// Native panel size in pixels (width = columns, height = rows)
    fn native_size(&self) -> Size;

    /// Transfer `frame` to the panel and refresh it
    ///
    /// # Errors
    ///
    /// Returns an error if the frame has the wrong size or the hardware
    /// does not respond.
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error>;
}

impl<P: FramePanel + ?Sized> FramePanel for &mut P {
    type Error = P::Error;

    fn native_size(&self) -> Size {
        (**self).native_size()
    }

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        (**self).write_frame(frame)
    }
}

/// Panel geometry and timing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    rows: u16,
    cols: u16,
    busy_timeout_ms: u32,
}

impl PanelConfig {
    /// Create a configuration with validation
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPanelDimensions` if:
    /// - rows > MAX_GATE_OUTPUTS
    /// - cols > MAX_SOURCE_OUTPUTS
    /// - cols % 8 != 0 (must be byte-aligned for memory)
    pub fn new(rows: u16, cols: u16) -> Result<Self, ConfigError> {
        if rows == 0 || rows > MAX_GATE_OUTPUTS {
            return Err(ConfigError::InvalidPanelDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_SOURCE_OUTPUTS || cols % 8 != 0 {
            return Err(ConfigError::InvalidPanelDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        })
    }

    /// Override how long a refresh may keep BUSY asserted
    pub fn with_busy_timeout_ms(mut self, ms: u32) -> Self {
        self.busy_timeout_ms = ms;
        self
    }

    /// Gate lines
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Source lines
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// BUSY timeout in milliseconds
    pub fn busy_timeout_ms(&self) -> u32 {
        self.busy_timeout_ms
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.rows as usize * self.cols as usize) / 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_panel_fits_the_controller() {
        let config = PanelConfig::new(480, 800).unwrap();
        assert_eq!(config.buffer_size(), 48_000);
        assert_eq!(config.busy_timeout_ms(), DEFAULT_BUSY_TIMEOUT_MS);
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(
            PanelConfig::new(0, 800),
            Err(ConfigError::InvalidPanelDimensions { rows: 0, cols: 800 })
        );
        assert_eq!(
            PanelConfig::new(681, 800),
            Err(ConfigError::InvalidPanelDimensions { rows: 681, cols: 800 })
        );
        assert_eq!(
            PanelConfig::new(480, 804),
            Err(ConfigError::InvalidPanelDimensions { rows: 480, cols: 804 })
        );
        assert!(PanelConfig::new(480, 968).is_err());
    }
}

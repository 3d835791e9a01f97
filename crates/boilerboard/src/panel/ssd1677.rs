//! SSD1677 e-paper controller

use core::fmt::Debug;

use embedded_graphics_core::geometry::Size;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

use super::command::*;
use super::{FramePanel, PanelConfig};

/// Errors that can occur while talking to the panel
///
/// Generic over SPI and GPIO error types.
#[derive(Debug, PartialEq)]
pub enum PanelError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
    /// Frame length does not match the panel geometry
    BufferSize {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// BUSY stayed asserted past the configured timeout
    Timeout,
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for PanelError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PanelError::Spi(e) => write!(f, "SPI error: {e:?}"),
            PanelError::Pin(e) => write!(f, "Pin error: {e:?}"),
            PanelError::BufferSize { required, provided } => write!(
                f,
                "Frame size mismatch: required {required} bytes, provided {provided}"
            ),
            PanelError::Timeout => write!(f, "Timeout waiting for display"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for PanelError<SpiErr, PinErr> {}

/// SSD1677 driver owning its bus, pins and delay
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
/// * `D` - Delay used for reset timing and BUSY polling
pub struct Ssd1677Panel<SPI, DC, RST, BUSY, D> {
    spi: SPI,
    dc: DC,
    rst: RST,
    busy: BUSY,
    delay: D,
    config: PanelConfig,
    is_display_on: bool,
}

type Result<T, SPI, PinErr> =
    core::result::Result<T, PanelError<<SPI as embedded_hal::spi::ErrorType>::Error, PinErr>>;

impl<SPI, DC, RST, BUSY, D, PinErr> Ssd1677Panel<SPI, DC, RST, BUSY, D>
where
    SPI: SpiDevice,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    D: DelayNs,
{
    /// Create a driver; nothing is sent until [`init`](Self::init)
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY, delay: D, config: PanelConfig) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            delay,
            config,
            is_display_on: false,
        }
    }

    /// Hardware reset, software reset, and controller setup
    ///
    /// Leaves both RAM planes cleared to white.
    pub fn init(&mut self) -> Result<(), SPI, PinErr> {
        // Reset sequence: LOW -> wait 10ms -> HIGH -> wait 10ms
        self.rst.set_low().map_err(PanelError::Pin)?;
        self.delay.delay_ms(10);
        self.rst.set_high().map_err(PanelError::Pin)?;
        self.delay.delay_ms(10);

        self.send_command(SOFT_RESET)?;
        self.busy_wait()?;

        self.send_command(TEMP_SENSOR_CONTROL)?;
        self.send_data(&[0x80])?; // internal sensor

        self.send_command(BOOSTER_SOFT_START)?;
        self.send_data(&[0xAE, 0xC7, 0xC3, 0xC0, 0x40])?;

        let last_row = self.config.rows() - 1;
        self.send_command(DRIVER_OUTPUT_CONTROL)?;
        self.send_data(&[low(last_row), high(last_row), GATE_SCAN_DEFAULT])?;

        self.send_command(BORDER_WAVEFORM)?;
        self.send_data(&[0x01])?;

        self.send_command(AUTO_WRITE_BW_RAM)?;
        self.send_data(&[AUTO_WRITE_WHITE])?;
        self.busy_wait()?;

        self.send_command(AUTO_WRITE_RED_RAM)?;
        self.send_data(&[AUTO_WRITE_WHITE])?;
        self.busy_wait()?;

        log::debug!(
            "SSD1677: initialized {}x{}",
            self.config.cols(),
            self.config.rows()
        );
        Ok(())
    }

    /// Write a full frame to BW RAM and run a full refresh
    pub fn update(&mut self, frame: &[u8]) -> Result<(), SPI, PinErr> {
        let required = self.config.buffer_size();
        if frame.len() != required {
            return Err(PanelError::BufferSize {
                required,
                provided: frame.len(),
            });
        }

        self.set_full_window()?;

        self.send_command(WRITE_RAM_BW)?;
        self.send_data(frame)?;

        self.send_command(DISPLAY_UPDATE_CTRL1)?;
        self.send_data(&[CTRL1_BYPASS_RED])?;

        let mut display_mode = FULL_REFRESH_BITS;
        if !self.is_display_on {
            display_mode |= POWER_ON_BITS;
        }
        self.send_command(DISPLAY_UPDATE_CTRL2)?;
        self.send_data(&[display_mode])?;
        self.send_command(MASTER_ACTIVATION)?;
        self.is_display_on = true;

        self.busy_wait()
    }

    /// Power the analog rails down and enter deep sleep
    ///
    /// RAM content is retained; a hardware reset is needed to wake up.
    pub fn deep_sleep(&mut self) -> Result<(), SPI, PinErr> {
        if self.is_display_on {
            self.send_command(DISPLAY_UPDATE_CTRL1)?;
            self.send_data(&[CTRL1_BYPASS_RED])?;
            self.send_command(DISPLAY_UPDATE_CTRL2)?;
            self.send_data(&[POWER_OFF_BITS])?;
            self.send_command(MASTER_ACTIVATION)?;
            self.busy_wait()?;
            self.is_display_on = false;
        }

        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[0x01])
    }

    /// Panel configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Give the bus, pins and delay back
    pub fn release(self) -> (SPI, DC, RST, BUSY, D) {
        (self.spi, self.dc, self.rst, self.busy, self.delay)
    }

    fn set_full_window(&mut self) -> Result<(), SPI, PinErr> {
        let x_end = self.config.cols() - 1;
        // Y runs from the last gate down to 0
        let y_start = self.config.rows() - 1;

        self.send_command(DATA_ENTRY_MODE)?;
        self.send_data(&[DATA_ENTRY_X_INC_Y_DEC])?;

        self.send_command(SET_RAM_X_RANGE)?;
        self.send_data(&[0, 0, low(x_end), high(x_end)])?;

        self.send_command(SET_RAM_Y_RANGE)?;
        self.send_data(&[low(y_start), high(y_start), 0, 0])?;

        self.send_command(SET_RAM_X_COUNTER)?;
        self.send_data(&[0, 0])?;

        self.send_command(SET_RAM_Y_COUNTER)?;
        self.send_data(&[low(y_start), high(y_start)])
    }

    fn busy_wait(&mut self) -> Result<(), SPI, PinErr> {
        let mut waited_ms = 0u32;
        loop {
            if !self.busy.is_high().map_err(PanelError::Pin)? {
                return Ok(());
            }
            self.delay.delay_ms(1);
            waited_ms += 1;
            if waited_ms >= self.config.busy_timeout_ms() {
                log::warn!("SSD1677: BUSY still high after {waited_ms} ms");
                return Err(PanelError::Timeout);
            }
        }
    }

    fn send_command(&mut self, command: u8) -> Result<(), SPI, PinErr> {
        self.dc.set_low().map_err(PanelError::Pin)?;
        self.spi.write(&[command]).map_err(PanelError::Spi)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), SPI, PinErr> {
        self.dc.set_high().map_err(PanelError::Pin)?;
        self.spi.write(data).map_err(PanelError::Spi)
    }
}

fn low(value: u16) -> u8 {
    (value % 256) as u8
}

fn high(value: u16) -> u8 {
    (value / 256) as u8
}

impl<SPI, DC, RST, BUSY, D, PinErr> FramePanel for Ssd1677Panel<SPI, DC, RST, BUSY, D>
where
    SPI: SpiDevice,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = PanelError<SPI::Error, PinErr>;

    fn native_size(&self) -> Size {
        Size::new(u32::from(self.config.cols()), u32::from(self.config.rows()))
    }

    fn write_frame(&mut self, frame: &[u8]) -> core::result::Result<(), Self::Error> {
        self.update(frame)
    }
}

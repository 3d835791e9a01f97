//! Boilerboard firmware for the ESP32-C3 reference board.
//!
//! Wires the resistor-ladder buttons, the SSD1677 panel and the FreeRTOS
//! delay into the event loop. Any fatal error restarts the chip.

use std::convert::Infallible;
use std::error::Error;

use esp_idf_svc::hal::{
    delay::FreeRtos,
    gpio::{Gpio3, Input, PinDriver, Pull},
    peripherals::Peripherals,
};
use esp_idf_svc::sys;

use boilerboard::{BoardInput, ButtonLines, EventLoop, LogReporter, LoopConfig};

const ADC_WIDTH_BIT_12: u32 = 3;
const ADC_ATTEN_DB_11: u32 = 3;

/// Consecutive identical samples before a press or release is accepted
const DEBOUNCE_SAMPLES: u8 = 2;

/// Pause before restarting so the last log lines reach the console
const RESTART_DELAY_MS: u32 = 1000;

fn init_adc() {
    unsafe {
        sys::adc1_config_width(ADC_WIDTH_BIT_12);
        sys::adc1_config_channel_atten(sys::adc_channel_t_ADC_CHANNEL_1, ADC_ATTEN_DB_11);
        sys::adc1_config_channel_atten(sys::adc_channel_t_ADC_CHANNEL_2, ADC_ATTEN_DB_11);
    }
}

fn read_adc(channel: sys::adc_channel_t) -> i32 {
    unsafe { sys::adc1_get_raw(channel) }
}

/// Power button on GPIO3 (active low) plus the two ADC1 ladder channels
struct AdcButtons {
    power: PinDriver<'static, Gpio3, Input>,
}

impl ButtonLines for AdcButtons {
    type Error = Infallible;

    fn power_pressed(&mut self) -> Result<bool, Self::Error> {
        Ok(self.power.is_low())
    }

    fn ladder_readings(&mut self) -> Result<[i32; 2], Self::Error> {
        Ok([
            read_adc(sys::adc_channel_t_ADC_CHANNEL_1),
            read_adc(sys::adc_channel_t_ADC_CHANNEL_2),
        ])
    }
}

fn main() {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    match start() {
        Ok(never) => match never {},
        Err(err) => log::error!("Fatal: {}", err),
    }

    log::warn!("Restarting in {} ms", RESTART_DELAY_MS);
    FreeRtos::delay_ms(RESTART_DELAY_MS);
    unsafe { sys::esp_restart() }
}

fn start() -> Result<Infallible, Box<dyn Error>> {
    let peripherals = Peripherals::take()?;

    let mut power = PinDriver::input(peripherals.pins.gpio3)?;
    power.set_pull(Pull::Up)?;
    init_adc();

    let input = BoardInput::new(AdcButtons { power }, DEBOUNCE_SAMPLES)?
        .with_adc_trace(cfg!(feature = "adc-trace"));
    let event_loop = EventLoop::new(input, LogReporter, FreeRtos, LoopConfig::default());

    log::info!("Press a button!");

    #[cfg(feature = "headless")]
    {
        let mut event_loop = event_loop;
        match event_loop.run()? {}
    }

    #[cfg(not(feature = "headless"))]
    {
        use boilerboard::{BufferedDisplay, PanelConfig, Rotation, Ssd1677Panel};
        use esp_idf_svc::hal::spi::{config::Config, SpiDeviceDriver, SpiDriver, SpiDriverConfig};
        use esp_idf_svc::hal::units::Hertz;

        let spi = SpiDriver::new(
            peripherals.spi2,
            peripherals.pins.gpio8,
            peripherals.pins.gpio10,
            Some(peripherals.pins.gpio7),
            &SpiDriverConfig::default(),
        )?;
        let spi_config = Config::default()
            .baudrate(Hertz(40_000_000))
            .data_mode(embedded_hal::spi::Mode {
                polarity: embedded_hal::spi::Polarity::IdleLow,
                phase: embedded_hal::spi::Phase::CaptureOnFirstTransition,
            });
        let spi_device = SpiDeviceDriver::new(&spi, Some(peripherals.pins.gpio21), &spi_config)?;

        let dc = PinDriver::output(peripherals.pins.gpio4)?;
        let rst = PinDriver::output(peripherals.pins.gpio5)?;
        let busy = PinDriver::input(peripherals.pins.gpio6)?;

        // rows = gates, cols = sources; the 800x480 panel is mounted in portrait
        let config = PanelConfig::new(480, 800)?;
        let mut panel = Ssd1677Panel::new(spi_device, dc, rst, busy, FreeRtos, config);
        log::info!("Resetting display...");
        panel.init()?;

        let display = BufferedDisplay::new(panel, Rotation::Rotate90);
        let mut event_loop = event_loop.with_display(display);
        match event_loop.run()? {}
    }
}

//! Button wiring of the reference board.
//!
//! Six buttons sit on two resistor ladders (ADC1 and ADC2) and the power
//! button is a digital, active-low input. [`BoardInput`] turns raw readings
//! of those lines into debounced [`Button`] samples; the hardware access
//! itself is behind [`ButtonLines`].

use crate::debounce::Debouncer;
use crate::input::InputSource;
use crate::ladder::{
    Ladder, LadderError, ADC1_BUTTONS, ADC1_THRESHOLDS, ADC2_BUTTONS, ADC2_THRESHOLDS,
    ADC_NO_BUTTON,
};
use crate::Button;

/// Raw access to the board's button lines
pub trait ButtonLines {
    /// Error raised when a line cannot be read
    type Error: core::fmt::Debug;

    /// Whether the power button is held (pin pulled low)
    fn power_pressed(&mut self) -> Result<bool, Self::Error>;

    /// Raw readings of ADC1 and ADC2, in that order
    fn ladder_readings(&mut self) -> Result<[i32; 2], Self::Error>;
}

impl<L: ButtonLines + ?Sized> ButtonLines for &mut L {
    type Error = L::Error;

    fn power_pressed(&mut self) -> Result<bool, Self::Error> {
        (**self).power_pressed()
    }

    fn ladder_readings(&mut self) -> Result<[i32; 2], Self::Error> {
        (**self).ladder_readings()
    }
}

/// Debounced input source for the reference board
pub struct BoardInput<L> {
    lines: L,
    adc1: Ladder<'static, Button>,
    adc2: Ladder<'static, Button>,
    debouncer: Debouncer<Button>,
    trace_adc: bool,
}

impl<L: ButtonLines> BoardInput<L> {
    /// Wrap `lines`; a change must be seen on `debounce_samples` polls in a row
    ///
    /// # Errors
    ///
    /// Returns `LadderError` if the built-in ladder tables are inconsistent.
    pub fn new(lines: L, debounce_samples: u8) -> Result<Self, LadderError> {
        Ok(Self {
            lines,
            adc1: Ladder::new(&ADC1_THRESHOLDS, &ADC1_BUTTONS)?,
            adc2: Ladder::new(&ADC2_THRESHOLDS, &ADC2_BUTTONS)?,
            debouncer: Debouncer::new(debounce_samples),
            trace_adc: false,
        })
    }

    /// Log raw ADC values whenever a ladder is pulled below idle
    pub fn with_adc_trace(mut self, enabled: bool) -> Self {
        self.trace_adc = enabled;
        self
    }

    /// Read the lines once, without debouncing
    ///
    /// The power button wins over the ladders, ADC1 wins over ADC2.
    pub fn sample_raw(&mut self) -> Result<Option<Button>, L::Error> {
        if self.lines.power_pressed()? {
            return Ok(Some(Button::Power));
        }

        let [adc1, adc2] = self.lines.ladder_readings()?;
        if self.trace_adc && (adc1 < ADC_NO_BUTTON || adc2 < ADC_NO_BUTTON) {
            log::info!("ADC1: {}, ADC2: {}", adc1, adc2);
        }

        Ok(self.adc1.decode(adc1).or_else(|| self.adc2.decode(adc2)))
    }

    /// The wrapped lines
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Mutable access to the wrapped lines
    pub fn lines_mut(&mut self) -> &mut L {
        &mut self.lines
    }
}

impl<L: ButtonLines> InputSource for BoardInput<L> {
    type Button = Button;
    type Error = L::Error;

    fn poll_pressed_button(&mut self) -> Result<Option<Button>, Self::Error> {
        let raw = self.sample_raw()?;
        Ok(self.debouncer.update(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const IDLE: i32 = 4095;

    /// Replays (power, adc1, adc2) triples
    struct Replay(Vec<(bool, i32, i32)>);

    impl ButtonLines for Replay {
        type Error = &'static str;

        fn power_pressed(&mut self) -> Result<bool, Self::Error> {
            self.0.first().map(|s| s.0).ok_or("no sample")
        }

        fn ladder_readings(&mut self) -> Result<[i32; 2], Self::Error> {
            if self.0.is_empty() {
                return Err("no sample");
            }
            let (_, adc1, adc2) = self.0.remove(0);
            Ok([adc1, adc2])
        }
    }

    impl Replay {
        fn one(power: bool, adc1: i32, adc2: i32) -> Self {
            Replay(alloc::vec![(power, adc1, adc2)])
        }
    }

    #[test]
    fn idle_lines_mean_no_button() {
        let mut input = BoardInput::new(Replay::one(false, IDLE, IDLE), 1).unwrap();
        assert_eq!(input.sample_raw(), Ok(None));
    }

    #[test]
    fn power_wins_over_ladders() {
        let mut input = BoardInput::new(Replay::one(true, 0, 0), 1).unwrap();
        assert_eq!(input.sample_raw(), Ok(Some(Button::Power)));
    }

    #[test]
    fn adc1_wins_over_adc2() {
        let mut input = BoardInput::new(Replay::one(false, 3000, 500), 1).unwrap();
        assert_eq!(input.sample_raw(), Ok(Some(Button::Confirm)));
    }

    #[test]
    fn adc2_decoded_when_adc1_idle() {
        let mut input = BoardInput::new(Replay::one(false, IDLE, 500), 1).unwrap();
        assert_eq!(input.sample_raw(), Ok(Some(Button::VolumeDown)));
    }

    #[test]
    fn poll_is_debounced() {
        let lines = Replay(alloc::vec![
            (false, 700, IDLE),
            (false, IDLE, IDLE),
            (false, 700, IDLE),
            (false, 700, IDLE),
        ]);
        let mut input = BoardInput::new(lines, 2).unwrap();
        let polled: Vec<_> = (0..4)
            .map(|_| input.poll_pressed_button().unwrap())
            .collect();
        assert_eq!(polled, [None, None, None, Some(Button::Right)]);
    }

    #[test]
    fn read_failure_propagates() {
        let mut input = BoardInput::new(Replay(Vec::new()), 1).unwrap();
        assert_eq!(input.poll_pressed_button(), Err("no sample"));
    }
}

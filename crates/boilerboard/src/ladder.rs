//! Resistor-ladder button decoding.
//!
//! Several buttons share one ADC channel through a resistor ladder; each
//! button pulls the channel into its own voltage band. Bands are given as
//! descending thresholds `[t0, t1, ..., tn]` and reading `v` selects button
//! `i` when `t(i+1) < v <= t(i)`. Anything above `t0` means no button.

use core::fmt;

use crate::Button;

/// Raw reading at or above which no ladder button is pressed (12-bit ADC, 11 dB)
pub const ADC_NO_BUTTON: i32 = 3800;

/// ADC1 ladder thresholds
pub const ADC1_THRESHOLDS: [i32; 5] = [ADC_NO_BUTTON, 3100, 2090, 750, i32::MIN];
/// ADC1 ladder buttons, one per band
pub const ADC1_BUTTONS: [Button; 4] = [Button::Back, Button::Confirm, Button::Left, Button::Right];

/// ADC2 ladder thresholds
pub const ADC2_THRESHOLDS: [i32; 3] = [ADC_NO_BUTTON, 1120, i32::MIN];
/// ADC2 ladder buttons, one per band
pub const ADC2_BUTTONS: [Button; 2] = [Button::VolumeUp, Button::VolumeDown];

/// Errors that can occur when describing a ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LadderError {
    /// There must be exactly one more threshold than buttons
    BandCountMismatch {
        /// Number of thresholds provided
        thresholds: usize,
        /// Number of buttons provided
        buttons: usize,
    },
    /// Thresholds must be strictly descending
    NotDescending {
        /// Index of the first threshold that is not below its predecessor
        index: usize,
    },
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LadderError::BandCountMismatch {
                thresholds,
                buttons,
            } => write!(
                f,
                "Ladder needs one more threshold than buttons: {thresholds} thresholds, {buttons} buttons"
            ),
            LadderError::NotDescending { index } => {
                write!(f, "Ladder threshold {index} is not below the previous one")
            }
        }
    }
}

impl core::error::Error for LadderError {}

/// Band table for one ADC channel
#[derive(Clone, Copy, Debug)]
pub struct Ladder<'a, B> {
    thresholds: &'a [i32],
    buttons: &'a [B],
}

impl<'a, B: Copy> Ladder<'a, B> {
    /// Create a ladder with validation
    ///
    /// # Errors
    ///
    /// Returns `LadderError` if the band count does not match or the
    /// thresholds are not strictly descending
    pub fn new(thresholds: &'a [i32], buttons: &'a [B]) -> Result<Self, LadderError> {
        if thresholds.len() != buttons.len() + 1 {
            return Err(LadderError::BandCountMismatch {
                thresholds: thresholds.len(),
                buttons: buttons.len(),
            });
        }
        if let Some(index) = thresholds
            .windows(2)
            .position(|pair| pair[1] >= pair[0])
        {
            return Err(LadderError::NotDescending { index: index + 1 });
        }
        Ok(Self {
            thresholds,
            buttons,
        })
    }

    /// Map a raw reading onto the button whose band contains it
    pub fn decode(&self, reading: i32) -> Option<B> {
        self.thresholds
            .windows(2)
            .zip(self.buttons)
            .find(|(band, _)| band[1] < reading && reading <= band[0])
            .map(|(_, button)| *button)
    }
}

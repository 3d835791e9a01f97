//! Physical buttons on the board.

use core::fmt;

/// Physical device buttons (directly maps to hardware)
///
/// The event loop never looks inside this value; it is only forwarded to the
/// reporter. Its [`Display`](fmt::Display) rendering is stable per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    // ADC1 ladder
    Back,
    Confirm,
    Left,
    Right,
    // ADC2 ladder
    VolumeUp,
    VolumeDown,
    // Navigation pair on boards with a four-way rocker
    Up,
    Down,
    // Digital input, active LOW
    Power,
}

impl Button {
    /// Every button, in wiring order.
    pub const ALL: [Button; 9] = [
        Button::Back,
        Button::Confirm,
        Button::Left,
        Button::Right,
        Button::VolumeUp,
        Button::VolumeDown,
        Button::Up,
        Button::Down,
        Button::Power,
    ];

    /// Stable lowercase name used when reporting.
    pub const fn name(self) -> &'static str {
        match self {
            Button::Back => "back",
            Button::Confirm => "confirm",
            Button::Left => "left",
            Button::Right => "right",
            Button::VolumeUp => "volume_up",
            Button::VolumeDown => "volume_down",
            Button::Up => "up",
            Button::Down => "down",
            Button::Power => "power",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn names_are_unique() {
        for (i, a) in Button::ALL.iter().enumerate() {
            for b in &Button::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Button::VolumeUp.to_string(), "volume_up");
        assert_eq!(Button::Power.to_string(), "power");
    }
}

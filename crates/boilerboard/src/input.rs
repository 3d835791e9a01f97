//! Input source abstraction.

/// A debounced source of button presses
///
/// Implementations own debouncing and any electrical noise filtering; the
/// event loop only ever sees stable results.
pub trait InputSource {
    /// Identifier of a physical button
    ///
    /// Opaque to the loop: it is forwarded to the reporter untouched.
    type Button: core::fmt::Display;

    /// Error raised when the hardware cannot be sampled
    type Error: core::fmt::Debug;

    /// Return the button currently held down, if any
    ///
    /// Must not block for longer than one poll interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying hardware cannot be read. The event
    /// loop treats this as fatal.
    fn poll_pressed_button(&mut self) -> Result<Option<Self::Button>, Self::Error>;
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    type Button = S::Button;
    type Error = S::Error;

    fn poll_pressed_button(&mut self) -> Result<Option<Self::Button>, Self::Error> {
        (**self).poll_pressed_button()
    }
}

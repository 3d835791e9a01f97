//! Display abstraction used by the event loop
//!
//! The loop only needs two steps from a display: fill the frame buffer with
//! one value, then push the buffer to the glass. [`BufferedDisplay`] provides
//! them on top of any [`FramePanel`]; [`NoDisplay`] stands in when the loop
//! runs without a panel.

use embedded_graphics_core::pixelcolor::BinaryColor;

use crate::frame_buffer::{FrameBuffer, Rotation};
use crate::panel::FramePanel;

/// Frame-buffered monochrome display
pub trait FrameDisplay {
    /// Error type for present operations
    type Error: core::fmt::Debug;

    /// Set every pixel of the frame buffer to `color`
    fn fill_buffer(&mut self, color: BinaryColor);

    /// Push the frame buffer to the physical panel
    ///
    /// # Errors
    ///
    /// Returns an error if the panel does not accept the frame.
    fn present(&mut self) -> Result<(), Self::Error>;
}

impl<D: FrameDisplay + ?Sized> FrameDisplay for &mut D {
    type Error = D::Error;

    fn fill_buffer(&mut self, color: BinaryColor) {
        (**self).fill_buffer(color);
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        (**self).present()
    }
}

/// Placeholder for a loop without a display
///
/// Uninhabited: an [`EventLoop`](crate::EventLoop) typed with it can never
/// hold a display, so the initialization step is skipped.
#[derive(Debug)]
pub enum NoDisplay {}

impl FrameDisplay for NoDisplay {
    type Error = core::convert::Infallible;

    fn fill_buffer(&mut self, _color: BinaryColor) {
        match *self {}
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }
}

/// A [`FrameBuffer`] paired with the panel it is presented on
pub struct BufferedDisplay<P> {
    frame: FrameBuffer,
    panel: P,
    presents: u32,
}

impl<P: FramePanel> BufferedDisplay<P> {
    /// Allocate a white frame matching the panel's native size
    pub fn new(panel: P, rotation: Rotation) -> Self {
        let size = panel.native_size();
        Self {
            frame: FrameBuffer::new(size.width, size.height, rotation),
            panel,
            presents: 0,
        }
    }

    /// Frame buffer, for drawing with embedded-graphics
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Mutable frame buffer, for drawing with embedded-graphics
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Underlying panel
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Mutable access to the underlying panel
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Number of frames successfully presented so far
    pub fn presents(&self) -> u32 {
        self.presents
    }
}

impl<P: FramePanel> FrameDisplay for BufferedDisplay<P> {
    type Error = P::Error;

    fn fill_buffer(&mut self, color: BinaryColor) {
        self.frame.fill(color);
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.panel.write_frame(self.frame.buffer())?;
        self.presents = self.presents.saturating_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_graphics_core::geometry::Size;

    /// Panel that keeps every frame it receives
    struct RecordingPanel {
        frames: Vec<Vec<u8>>,
        fail: bool,
    }

    impl FramePanel for RecordingPanel {
        type Error = &'static str;

        fn native_size(&self) -> Size {
            Size::new(16, 2)
        }

        fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err("panel not responding");
            }
            self.frames.push(frame.to_vec());
            Ok(())
        }
    }

    #[test]
    fn frame_matches_panel_size() {
        let display = BufferedDisplay::new(
            RecordingPanel {
                frames: Vec::new(),
                fail: false,
            },
            Rotation::Rotate0,
        );
        assert_eq!(display.frame().buffer().len(), 4);
    }

    #[test]
    fn present_sends_current_frame() {
        let mut display = BufferedDisplay::new(
            RecordingPanel {
                frames: Vec::new(),
                fail: false,
            },
            Rotation::Rotate0,
        );
        display.fill_buffer(BinaryColor::On);
        display.present().unwrap();

        assert_eq!(display.panel().frames, [alloc::vec![0x00; 4]]);
        assert_eq!(display.presents(), 1);
    }

    #[test]
    fn failed_present_is_not_counted() {
        let mut display = BufferedDisplay::new(
            RecordingPanel {
                frames: Vec::new(),
                fail: true,
            },
            Rotation::Rotate0,
        );
        assert_eq!(display.present(), Err("panel not responding"));
        assert_eq!(display.presents(), 0);
    }
}

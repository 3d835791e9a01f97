//! Button-polling event loop for a battery-powered board with a button
//! matrix and a monochrome frame-buffered display.
//!
//! The [`EventLoop`] samples an [`InputSource`] at a fixed cadence, forwards
//! every pressed button to a [`Reporter`], and sleeps between samples. A
//! [`FrameDisplay`] can be attached so the panel is driven to a known state
//! before the first sample.
//!
//! ```
//! use core::convert::Infallible;
//! use boilerboard::{Button, EventLoop, InputSource, LoopConfig};
//!
//! struct Held(Button);
//!
//! impl InputSource for Held {
//!     type Button = Button;
//!     type Error = Infallible;
//!
//!     fn poll_pressed_button(&mut self) -> Result<Option<Button>, Infallible> {
//!         Ok(Some(self.0))
//!     }
//! }
//!
//! struct NoSleep;
//!
//! impl embedded_hal::delay::DelayNs for NoSleep {
//!     fn delay_ns(&mut self, _ns: u32) {}
//! }
//!
//! let mut event_loop = EventLoop::new(Held(Button::Confirm), Vec::new(), NoSleep, LoopConfig::default());
//! event_loop.step().unwrap();
//! event_loop.step().unwrap();
//! assert_eq!(event_loop.reporter(), &[Button::Confirm, Button::Confirm]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod board;
pub mod button;
pub mod config;
pub mod debounce;
#[cfg(feature = "std")]
pub mod delay;
pub mod display;
pub mod error;
pub mod event_loop;
pub mod frame_buffer;
pub mod input;
pub mod ladder;
pub mod panel;
pub mod report;

pub use board::{BoardInput, ButtonLines};
pub use button::Button;
pub use config::{LoopConfig, LoopConfigBuilder, POLL_INTERVAL_MS};
pub use debounce::Debouncer;
#[cfg(feature = "std")]
pub use delay::StdDelay;
pub use display::{BufferedDisplay, FrameDisplay, NoDisplay};
pub use error::{ConfigError, Error};
pub use event_loop::{EventLoop, Phase};
pub use frame_buffer::{FrameBuffer, Rotation};
pub use input::InputSource;
pub use ladder::{Ladder, LadderError};
pub use panel::{FramePanel, PanelConfig, PanelError, Ssd1677Panel};
pub use report::{LogReporter, Reporter, WriteReporter};
#[cfg(feature = "std")]
pub use report::IoWriter;

//! The sampling loop
//!
//! Every iteration is strictly poll, then report, then sleep:
//!
//! 1. ask the [`InputSource`] for the button currently held down,
//! 2. hand a `Some(button)` result to the [`Reporter`] exactly once,
//! 3. sleep for the configured poll interval.
//!
//! The loop is a level sampler: a button held across several polls is
//! reported on each of them. Edge detection and debouncing belong to the
//! input source. Nothing is carried from one iteration to the next.
//!
//! When a [`FrameDisplay`] is attached, the frame buffer is filled with
//! [`BinaryColor::On`] and presented once before the first poll.

use core::convert::Infallible;

use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_hal::delay::DelayNs;

use crate::config::LoopConfig;
use crate::display::{FrameDisplay, NoDisplay};
use crate::error::Error;
use crate::input::InputSource;
use crate::report::Reporter;

/// Lifecycle of an [`EventLoop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The display (if any) has not been brought to its initial state yet
    Uninitialized,
    /// Polling
    Running,
}

type LoopResult<T, S, P> =
    Result<T, Error<<S as InputSource>::Error, <P as FrameDisplay>::Error>>;

/// Polls an input source at a fixed cadence and reports every press
///
/// Collaborators are injected at construction and owned by the loop; pass
/// `&mut` references to keep access to them from the outside.
pub struct EventLoop<S, R, D, P = NoDisplay> {
    input: S,
    reporter: R,
    delay: D,
    display: Option<P>,
    config: LoopConfig,
    phase: Phase,
    polls: u64,
}

impl<S, R, D> EventLoop<S, R, D, NoDisplay>
where
    S: InputSource,
    R: Reporter<S::Button>,
    D: DelayNs,
{
    /// Create a loop without a display
    pub fn new(input: S, reporter: R, delay: D, config: LoopConfig) -> Self {
        Self {
            input,
            reporter,
            delay,
            display: None,
            config,
            phase: Phase::Uninitialized,
            polls: 0,
        }
    }

    /// Attach a display to be initialized before the first poll
    pub fn with_display<P: FrameDisplay>(self, display: P) -> EventLoop<S, R, D, P> {
        EventLoop {
            input: self.input,
            reporter: self.reporter,
            delay: self.delay,
            display: Some(display),
            config: self.config,
            phase: Phase::Uninitialized,
            polls: self.polls,
        }
    }
}

impl<S, R, D, P> EventLoop<S, R, D, P>
where
    S: InputSource,
    R: Reporter<S::Button>,
    D: DelayNs,
    P: FrameDisplay,
{
    /// Fill the frame buffer with the "on" value and present it
    ///
    /// Always repaints, whatever the panel showed before, and moves the loop
    /// to [`Phase::Running`]. Without a display only the phase changes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Display` if the panel rejects the frame. The loop
    /// stays [`Phase::Uninitialized`].
    pub fn initialize_display(&mut self) -> LoopResult<(), S, P> {
        if let Some(display) = self.display.as_mut() {
            display.fill_buffer(BinaryColor::On);
            display.present().map_err(Error::Display)?;
            log::info!("Display initialized");
        }
        self.phase = Phase::Running;
        Ok(())
    }

    /// Run one iteration: poll, report, sleep
    ///
    /// The first call initializes the display if that has not happened yet.
    /// Returns whether a press was reported.
    ///
    /// # Errors
    ///
    /// A failed poll returns `Error::InputSource` right away: nothing is
    /// reported and the loop does not sleep.
    pub fn step(&mut self) -> LoopResult<bool, S, P> {
        if self.phase == Phase::Uninitialized {
            self.initialize_display()?;
        }

        let polled = self.input.poll_pressed_button().map_err(Error::InputSource)?;
        self.polls = self.polls.wrapping_add(1);

        let pressed = match polled {
            Some(button) => {
                log::debug!("Poll {}: {} held", self.polls, button);
                self.reporter.report(&button);
                true
            }
            None => false,
        };

        self.delay.delay_ms(self.config.poll_interval_ms());
        Ok(pressed)
    }

    /// Sample forever
    ///
    /// Never returns under normal operation: the only exit is a fatal error
    /// from the input source or the display. There is no retry at this
    /// layer; restarting is up to the caller or a supervisor.
    ///
    /// # Errors
    ///
    /// Returns the first `Error::Display` or `Error::InputSource` raised.
    pub fn run(&mut self) -> LoopResult<Infallible, S, P> {
        log::info!(
            "Starting event loop, polling every {} ms",
            self.config.poll_interval_ms()
        );
        loop {
            if let Err(err) = self.step() {
                log::error!("Event loop stopped after {} polls: {}", self.polls, err);
                return Err(err);
            }
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of successful polls so far
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Loop configuration
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// The input source
    pub fn input(&self) -> &S {
        &self.input
    }

    /// The reporter, e.g. to inspect captured presses
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// The attached display, if any
    pub fn display(&self) -> Option<&P> {
        self.display.as_ref()
    }

    /// Tear the loop down into its collaborators
    pub fn into_parts(self) -> (S, R, D, Option<P>) {
        (self.input, self.reporter, self.delay, self.display)
    }
}

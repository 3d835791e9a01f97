//! Reporting sinks for detected presses.

use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Receives every press the event loop observes
pub trait Reporter<B> {
    /// Emit one press
    fn report(&mut self, button: &B);
}

impl<B, R: Reporter<B> + ?Sized> Reporter<B> for &mut R {
    fn report(&mut self, button: &B) {
        (**self).report(button);
    }
}

/// Collects presses in order; used to capture output
impl<B: Clone> Reporter<B> for Vec<B> {
    fn report(&mut self, button: &B) {
        self.push(button.clone());
    }
}

/// Reports presses through the `log` facade at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl<B: Display> Reporter<B> for LogReporter {
    fn report(&mut self, button: &B) {
        log::info!("Button pressed: {}", button);
    }
}

/// Writes one line per press, `"{button}\n"`, to any [`fmt::Write`] sink
///
/// Write errors are counted instead of propagated: losing a console line is
/// not a reason to stop sampling.
#[derive(Debug, Default)]
pub struct WriteReporter<W> {
    out: W,
    dropped: u32,
}

impl<W: fmt::Write> WriteReporter<W> {
    /// Wrap `out`
    pub fn new(out: W) -> Self {
        Self { out, dropped: 0 }
    }

    /// Lines that could not be written
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Sink written so far
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwrap the sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<B: Display, W: fmt::Write> Reporter<B> for WriteReporter<W> {
    fn report(&mut self, button: &B) {
        if writeln!(self.out, "{button}").is_err() {
            self.dropped = self.dropped.saturating_add(1);
            log::warn!("Dropped report for {}", button);
        }
    }
}

/// Adapter from [`std::io::Write`] to [`fmt::Write`], for stdout and files
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct IoWriter<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> fmt::Write for IoWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)?;
        self.0.flush().map_err(|_| fmt::Error)
    }
}

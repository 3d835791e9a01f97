//! Scripted collaborators shared by the event loop tests.
//!
//! Every fake appends to one [`Timeline`] so tests can assert the exact order
//! of polls, reports, sleeps and display operations.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use boilerboard::{FrameDisplay, InputSource, Reporter};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_hal::delay::DelayNs;

/// Something one of the fakes did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Poll,
    Report(String),
    Sleep(u32),
    Fill(BinaryColor),
    Present,
}

/// Shared, ordered record of fake activity
#[derive(Clone, Default)]
pub struct Timeline(Rc<RefCell<Vec<Event>>>);

impl Timeline {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn reports(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Report(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.0.borrow().iter().filter(|e| *e == event).count()
    }
}

/// Poll failure raised by [`ScriptedInput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFault {
    /// Injected hardware fault
    Hardware,
    /// Script ran out of results
    Exhausted,
}

/// Input source replaying a fixed list of poll results
pub struct ScriptedInput {
    script: VecDeque<Result<Option<&'static str>, InputFault>>,
    timeline: Timeline,
}

impl ScriptedInput {
    pub fn new(
        results: impl IntoIterator<Item = Result<Option<&'static str>, InputFault>>,
        timeline: &Timeline,
    ) -> Self {
        Self {
            script: results.into_iter().collect(),
            timeline: timeline.clone(),
        }
    }

    /// Successful polls only
    pub fn polls(results: &[Option<&'static str>], timeline: &Timeline) -> Self {
        Self::new(results.iter().copied().map(Ok), timeline)
    }
}

impl InputSource for ScriptedInput {
    type Button = &'static str;
    type Error = InputFault;

    fn poll_pressed_button(&mut self) -> Result<Option<&'static str>, InputFault> {
        self.timeline.push(Event::Poll);
        self.script.pop_front().unwrap_or(Err(InputFault::Exhausted))
    }
}

/// Reporter writing into the timeline
pub struct TimelineReporter(pub Timeline);

impl<B: std::fmt::Display> Reporter<B> for TimelineReporter {
    fn report(&mut self, button: &B) {
        self.0.push(Event::Report(button.to_string()));
    }
}

/// Delay that records instead of sleeping
pub struct FakeClock(pub Timeline);

impl DelayNs for FakeClock {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::Sleep(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::Sleep(ms));
    }
}

/// Display with an inspectable frame
pub struct FakeDisplay {
    pub pixels: Vec<BinaryColor>,
    pub fail_present: bool,
    timeline: Timeline,
}

impl FakeDisplay {
    pub fn new(pixels: Vec<BinaryColor>, timeline: &Timeline) -> Self {
        Self {
            pixels,
            fail_present: false,
            timeline: timeline.clone(),
        }
    }
}

impl FrameDisplay for FakeDisplay {
    type Error = &'static str;

    fn fill_buffer(&mut self, color: BinaryColor) {
        self.timeline.push(Event::Fill(color));
        self.pixels.fill(color);
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.timeline.push(Event::Present);
        if self.fail_present {
            return Err("display not responding");
        }
        Ok(())
    }
}

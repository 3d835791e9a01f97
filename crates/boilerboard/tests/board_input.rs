//! The reference board's input source driving the event loop.

use boilerboard::{BoardInput, Button, ButtonLines, Error, EventLoop, LoopConfig, WriteReporter};
use embedded_hal::delay::DelayNs;

const IDLE: i32 = 4095;

/// Replays recorded line states; fails like a dead ADC when out of samples
struct Recording {
    samples: std::vec::IntoIter<(bool, i32, i32)>,
    current: Option<(bool, i32, i32)>,
}

impl Recording {
    fn new(samples: Vec<(bool, i32, i32)>) -> Self {
        Self {
            samples: samples.into_iter(),
            current: None,
        }
    }
}

impl ButtonLines for Recording {
    type Error = &'static str;

    fn power_pressed(&mut self) -> Result<bool, Self::Error> {
        self.current = self.samples.next();
        self.current.map(|s| s.0).ok_or("adc timeout")
    }

    fn ladder_readings(&mut self) -> Result<[i32; 2], Self::Error> {
        self.current.map(|s| [s.1, s.2]).ok_or("adc timeout")
    }
}

struct NoSleep;

impl DelayNs for NoSleep {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[test]
fn debounced_presses_are_written_one_per_line() {
    let samples = vec![
        (false, IDLE, IDLE),
        (false, 3000, IDLE), // Confirm, first sighting
        (false, 3000, IDLE), // Confirm, stable
        (false, 3000, IDLE), // still held
        (false, IDLE, IDLE), // release not yet confirmed
        (false, IDLE, IDLE), // released
        (true, IDLE, IDLE),
        (true, IDLE, IDLE), // Power
        (false, IDLE, 200), // Power still stable
        (false, IDLE, 200), // VolumeDown
    ];
    let input = BoardInput::new(Recording::new(samples), 2).unwrap();
    let mut event_loop = EventLoop::new(
        input,
        WriteReporter::new(String::new()),
        NoSleep,
        LoopConfig::default(),
    );

    let err = match event_loop.run() {
        Ok(never) => match never {},
        Err(err) => err,
    };

    assert_eq!(err, Error::InputSource("adc timeout"));
    assert_eq!(
        event_loop.reporter().get_ref(),
        "confirm\nconfirm\nconfirm\npower\npower\nvolume_down\n"
    );
}

#[test]
fn glitches_shorter_than_the_window_are_not_reported() {
    let samples = vec![
        (false, 700, IDLE),
        (false, IDLE, IDLE),
        (true, IDLE, IDLE),
        (false, IDLE, IDLE),
    ];
    let input = BoardInput::new(Recording::new(samples), 2).unwrap();
    let mut event_loop = EventLoop::new(input, Vec::<Button>::new(), NoSleep, LoopConfig::default());

    assert!(event_loop.run().is_err());
    assert!(event_loop.reporter().is_empty());
}

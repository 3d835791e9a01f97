//! Wall-clock spacing between polls with the real thread delay.

#![cfg(feature = "std")]

use std::time::{Duration, Instant};

use boilerboard::{EventLoop, InputSource, LoopConfig, StdDelay};

/// Records when each poll happened and fails after `limit` polls
struct Stamped {
    stamps: Vec<Instant>,
    limit: usize,
}

impl InputSource for Stamped {
    type Button = u8;
    type Error = ();

    fn poll_pressed_button(&mut self) -> Result<Option<u8>, ()> {
        if self.stamps.len() == self.limit {
            return Err(());
        }
        self.stamps.push(Instant::now());
        Ok(Some(1))
    }
}

#[test]
fn consecutive_polls_are_at_least_one_interval_apart() {
    let interval_ms = 15;
    let config = LoopConfig::builder()
        .poll_interval_ms(interval_ms)
        .build()
        .unwrap();
    let mut input = Stamped {
        stamps: Vec::new(),
        limit: 5,
    };
    let mut event_loop = EventLoop::new(&mut input, Vec::<u8>::new(), StdDelay, config);

    assert!(event_loop.run().is_err());
    assert_eq!(event_loop.reporter().len(), 5);
    drop(event_loop);

    // Scheduler jitter only ever makes gaps longer
    for pair in input.stamps.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(
            gap >= Duration::from_millis(u64::from(interval_ms)),
            "polls only {gap:?} apart"
        );
    }
}

//! Sample-count debouncer for noisy button readings.
//!
//! A raw reading only becomes the stable value after it has been seen on
//! `threshold` consecutive samples. Anything shorter is treated as contact
//! bounce or ADC noise and ignored. The unit of time is one sample, so the
//! settling time is `threshold * sample period`.

/// Default number of identical consecutive samples before a change is accepted
pub const DEFAULT_THRESHOLD: u8 = 3;

/// Stability filter for a single-button-at-a-time input
#[derive(Clone, Debug)]
pub struct Debouncer<B> {
    stable: Option<B>,
    candidate: Option<B>,
    count: u8,
    threshold: u8,
}

impl<B: Copy + PartialEq> Debouncer<B> {
    /// Create a debouncer that needs `threshold` matching samples per change
    ///
    /// A threshold of 0 or 1 passes raw samples straight through.
    pub fn new(threshold: u8) -> Self {
        Self {
            stable: None,
            candidate: None,
            count: 0,
            threshold,
        }
    }

    /// Feed one raw sample and return the current stable value
    pub fn update(&mut self, raw: Option<B>) -> Option<B> {
        if raw == self.stable {
            self.candidate = raw;
            self.count = 0;
            return self.stable;
        }

        if raw == self.candidate {
            self.count = self.count.saturating_add(1);
        } else {
            self.candidate = raw;
            self.count = 1;
        }

        if self.count >= self.threshold {
            self.stable = raw;
            self.count = 0;
        }
        self.stable
    }

    /// Last accepted value, without feeding a sample
    pub fn stable(&self) -> Option<B> {
        self.stable
    }

    /// Forget all history
    pub fn reset(&mut self) {
        self.stable = None;
        self.candidate = None;
        self.count = 0;
    }
}

impl<B: Copy + PartialEq> Default for Debouncer<B> {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

//! Hold/decay smoothing of per-window estimates.
//!
//! A window without detections does not reset the estimate immediately: the
//! previous value is held for up to `hold_limit` windows, after which it
//! decays to zero. This keeps classification steady across short pauses and
//! across steps that straddle a window boundary.

/// Held value and the number of consecutive windows it has been held
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EstimateHold {
    pub last: f32,
    pub held: u32,
}

impl EstimateHold {
    /// Take a fresh estimate, or fall back to the held one.
    ///
    /// Once the hold count exceeds `hold_limit` the estimate becomes 0.0 and
    /// the count starts over.
    pub fn apply(&mut self, fresh: Option<f32>, hold_limit: u32) -> f32 {
        let mut estimate = match fresh {
            Some(value) => {
                self.held = 0;
                value
            }
            None => {
                self.held += 1;
                self.last
            }
        };

        if self.held > hold_limit {
            self.held = 0;
            estimate = 0.0;
        }

        self.last = estimate;
        estimate
    }
}

/// Smoothed amplitude and frequency, each with an independent hold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateSmoother {
    pub amplitude: EstimateHold,
    pub frequency: EstimateHold,
    hold_limit: u32,
}

impl EstimateSmoother {
    pub fn new(hold_limit: u32) -> Self {
        Self {
            amplitude: EstimateHold::default(),
            frequency: EstimateHold::default(),
            hold_limit,
        }
    }

    /// Returns the smoothed `(amplitude, frequency)` pair
    pub fn apply(&mut self, amplitude: Option<f32>, frequency: Option<f32>) -> (f32, f32) {
        (
            self.amplitude.apply(amplitude, self.hold_limit),
            self.frequency.apply(frequency, self.hold_limit),
        )
    }
}

/// Second-order filter stages
///
/// Two fixed designs feed the pipeline: a low-pass that smooths the raw axis
/// and a lead-lag that estimates its time derivative. Both are tuned for the
/// coefficient set below and are never reset during a run.
mod biquad;

pub use biquad::{BiquadFilter, Coefficients};

/// Upper bound on a filter's settling delay, in samples
pub const MAX_TC_SAMPLES: usize = 20;

/// Filter purpose, selecting coefficients and settling time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// 3 Hz low-pass applied to every raw sample
    Smoothing,

    /// 4 Hz lead-lag approximating d/dt of the smoothed signal
    Derivative,
}

impl FilterKind {
    /// Coefficients designed for a 104 Hz sample rate
    pub const fn coefficients(&self) -> Coefficients {
        match self {
            FilterKind::Smoothing => Coefficients {
                b0: 7.226_946_3e-3,
                b1: 1.445_389_3e-2,
                b2: 7.226_946_3e-3,
                a1: -1.745_532_2,
                a2: 7.744_400_3e-1,
            },
            FilterKind::Derivative => Coefficients {
                b0: 2.536_936_3,
                b1: 0.0,
                b2: -2.536_936_3,
                a1: -1.664_191_2,
                a2: 7.129_784_2e-1,
            },
        }
    }

    /// Time, in seconds, after which the filter output is considered settled
    pub const fn settle_time(&self) -> f32 {
        match self {
            FilterKind::Smoothing => 0.075,
            FilterKind::Derivative => 0.06,
        }
    }

    /// Settling delay in whole samples at `sample_rate_hz`.
    ///
    /// The fractional part is truncated before adding the extra sample, and
    /// the result is capped at [`MAX_TC_SAMPLES`].
    pub fn tc_samples(&self, sample_rate_hz: u32) -> usize {
        let delay = (sample_rate_hz as f32 * self.settle_time()) as usize + 1;
        delay.min(MAX_TC_SAMPLES)
    }
}

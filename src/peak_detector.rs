//! Extremum search over one window of smoothed samples.
//!
//! Maxima and minima of the smoothed signal are found at the zero-crossings
//! of its derivative. Because the lead-lag derivative trails the smoothed
//! signal by its settling delay, derivative `i` is paired with entry `i` of
//! the extended buffer (previous tail followed by this window), which is the
//! smoothed sample that many steps earlier.
//!
//! Candidates are filtered by three guards:
//! - debounce: an extremum closer than `debounce_s` to the last one of the same kind is skipped
//! - clamp: the reference timestamp is pulled forward so a long pause contributes at most `max_period_s`
//! - swing: the candidate must differ from the opposite extremum by more than `min_swing`

use heapless::Vec;
use libm::fabsf;

use crate::config::DetectionLimits;
use crate::filters::{BiquadFilter, FilterKind};
use crate::state::PeakState;
use crate::window::{MAX_WINDOW_LEN, Sample, SampleWindow, Tail};

/// Derivative magnitude below which no zero-crossing is reported
pub const EPSILON: f64 = 1e-6;

/// Detections accumulated over one window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowDetection {
    pub maxima: u32,
    /// Completed max→min pairs, i.e. steps
    pub minima: u32,
    /// Sum of the periods implied by every accepted extremum (s)
    pub period_sum: f32,
    /// Sum of max-to-min swings of the completed pairs (m/s²)
    pub amplitude_sum: f32,
}

impl WindowDetection {
    pub fn steps(&self) -> u32 {
        self.minima
    }

    /// Mean swing per step, if any step completed
    pub fn amplitude(&self) -> Option<f32> {
        (self.minima > 0).then(|| self.amplitude_sum / self.minima as f32)
    }

    /// Step rate from the mean period, if that period is usable
    pub fn frequency(&self) -> Option<f32> {
        let detections = self.maxima + self.minima;
        let mut period = self.period_sum;
        if detections > 0 {
            period /= detections as f32;
        }

        (f64::from(period) > EPSILON).then(|| 1.0 / period)
    }
}

/// Derivative stage plus the state that links consecutive windows
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDetector {
    derivative: BiquadFilter,
    tail: Tail,
    last_derivative: f32,
    limits: DetectionLimits,
}

impl PeakDetector {
    pub fn new(sample_rate_hz: u32, limits: DetectionLimits) -> Self {
        let derivative = BiquadFilter::for_kind(FilterKind::Derivative, sample_rate_hz);
        Self {
            tail: Tail::zeroed(derivative.tc_samples()),
            derivative,
            last_derivative: 0.0,
            limits,
        }
    }

    /// Search `window` for extrema, updating `peaks` with every accepted one.
    ///
    /// The search mode is re-read from `peaks` at each sample, so maxima and
    /// minima strictly alternate, also across window boundaries.
    pub fn process(&mut self, window: &SampleWindow, peaks: &mut PeakState) -> WindowDetection {
        let mut derivative: Vec<f32, MAX_WINDOW_LEN> = Vec::new();
        for sample in window.as_slice() {
            // Same capacity as the window
            let _ = derivative.push(self.derivative.apply(sample.value));
        }

        let extended = self.tail.extend(window);
        let mut detection = WindowDetection::default();
        let mut previous = self.last_derivative;

        for (&current, &aligned) in derivative.iter().zip(extended.iter()) {
            if peaks.seeking_max() {
                if is_falling_crossing(previous, current) {
                    self.consider_max(aligned, peaks, &mut detection);
                }
            } else if is_rising_crossing(previous, current) {
                self.consider_min(aligned, peaks, &mut detection);
            }
            previous = current;
        }

        self.tail.carry_tail(window);
        self.last_derivative = previous;

        detection
    }

    fn consider_max(&self, candidate: Sample, peaks: &mut PeakState, detection: &mut WindowDetection) {
        let limits = &self.limits;

        if candidate.timestamp - peaks.max.timestamp > limits.debounce_s
            && fabsf(candidate.value) > limits.min_swing
        {
            // Clamped reference stays even if the swing check below fails
            if candidate.timestamp > peaks.max.timestamp + limits.max_period_s {
                peaks.max.timestamp = candidate.timestamp - limits.max_period_s;
            }

            if candidate.value - peaks.min.value > limits.min_swing {
                detection.period_sum += candidate.timestamp - peaks.max.timestamp;
                detection.maxima += 1;
                peaks.max = candidate;
                log_trace!("max {} at {}s", candidate.value, candidate.timestamp);
            }
        }
    }

    fn consider_min(&self, candidate: Sample, peaks: &mut PeakState, detection: &mut WindowDetection) {
        let limits = &self.limits;

        if candidate.timestamp - peaks.min.timestamp > limits.debounce_s {
            if candidate.timestamp > peaks.min.timestamp + limits.max_period_s {
                peaks.min.timestamp = candidate.timestamp - limits.max_period_s;
            }

            let swing = peaks.max.value - candidate.value;
            if swing > limits.min_swing {
                detection.period_sum += candidate.timestamp - peaks.min.timestamp;
                detection.amplitude_sum += swing;
                detection.minima += 1;
                peaks.min = candidate;
                log_trace!("min {} at {}s, swing {}", candidate.value, candidate.timestamp, swing);
            }
        }
    }

    /// Smoothed samples that will prefix the next window
    pub fn tail(&self) -> &Tail {
        &self.tail
    }

    /// Last derivative value of the previous window
    pub fn last_derivative(&self) -> f32 {
        self.last_derivative
    }
}

/// Derivative turns negative: a maximum of the smoothed signal
fn is_falling_crossing(previous: f32, current: f32) -> bool {
    f64::from(current) < -EPSILON && previous >= 0.0
}

/// Derivative turns positive: a minimum of the smoothed signal
fn is_rising_crossing(previous: f32, current: f32) -> bool {
    f64::from(current) > EPSILON && previous <= 0.0
}

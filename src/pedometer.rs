use num_traits::AsPrimitive;

use crate::classifier::{StepTally, classify};
use crate::config::{Config, ConfigError};
use crate::hysteresis::EstimateSmoother;
use crate::peak_detector::{PeakDetector, WindowDetection};
use crate::state::{AlgoOutput, Estimates, RunSummary};
use crate::window::WindowAccumulator;

/// Step counting pipeline for one accelerometer axis.
///
/// Owns every piece of state that survives between samples. Feed samples in
/// time order; the returned [`AlgoOutput`] changes only when a window
/// completes and is otherwise the result of the last full window.
#[derive(Debug, Clone)]
pub struct Pedometer {
    config: Config,
    accumulator: WindowAccumulator,
    detector: PeakDetector,
    smoother: EstimateSmoother,
    tally: StepTally,
    output: AlgoOutput,
    estimates: Estimates,
    last_detection: WindowDetection,
    sample_interval: f32,
    clock: f32,
}

impl Pedometer {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            accumulator: WindowAccumulator::new(config.sample_rate_hz, config.window_len()),
            detector: PeakDetector::new(config.sample_rate_hz, config.detection),
            smoother: EstimateSmoother::new(config.detection.hold_limit),
            tally: StepTally::default(),
            output: AlgoOutput::default(),
            estimates: Estimates::default(),
            last_detection: WindowDetection::default(),
            sample_interval: config.sample_interval(),
            clock: 0.0,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Feed the next raw sample, stamped one sample interval after the previous.
    ///
    /// The clock is a running sum, so the first sample is stamped at one
    /// interval rather than zero.
    pub fn update<T>(&mut self, raw: T) -> AlgoOutput
    where
        T: AsPrimitive<f32>,
    {
        let timestamp = self.clock + self.sample_interval;
        self.push_sample(raw, timestamp)
    }

    /// Feed a raw sample with a caller-supplied timestamp in seconds.
    ///
    /// Timestamps must not decrease; out-of-order samples corrupt the
    /// derivative and the max/min alternation for the rest of the run.
    pub fn push_sample<T>(&mut self, raw: T, timestamp: f32) -> AlgoOutput
    where
        T: AsPrimitive<f32>,
    {
        self.clock = timestamp;

        if self.accumulator.push(raw.as_(), timestamp) {
            self.run_window();
        }

        self.output
    }

    fn run_window(&mut self) {
        let detection = self
            .detector
            .process(self.accumulator.window(), &mut self.output.peaks);

        let (amplitude, frequency) = self
            .smoother
            .apply(detection.amplitude(), detection.frequency());
        let motion = classify(amplitude, frequency, &self.config.thresholds);
        let steps = detection.steps();

        // Overall count includes steps found in Stationary windows; the tally does not
        self.output.step_count += steps;
        self.output.motion = motion;
        self.tally.record(motion, steps);

        self.estimates = Estimates {
            amplitude,
            frequency,
        };
        self.last_detection = detection;

        log_debug!(
            "window at {}s: {} steps, amplitude {}, frequency {}, {}",
            self.clock,
            steps,
            amplitude,
            frequency,
            motion
        );
    }

    /// Result of the most recent full window
    pub fn output(&self) -> AlgoOutput {
        self.output
    }

    pub fn tally(&self) -> &StepTally {
        &self.tally
    }

    /// Smoothed amplitude and frequency behind the current classification
    pub fn estimates(&self) -> Estimates {
        self.estimates
    }

    /// Raw detections of the most recent full window, before hold/decay
    pub fn last_detection(&self) -> &WindowDetection {
        &self.last_detection
    }

    /// Timestamp of the last sample, in seconds
    pub fn elapsed(&self) -> f32 {
        self.clock
    }

    /// Samples buffered towards the next window
    pub fn pending_samples(&self) -> usize {
        let window = self.accumulator.window();
        if window.is_full() { 0 } else { window.len() }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            elapsed_s: self.clock,
            walk: self.tally.walk,
            run: self.tally.run,
            hop: self.tally.hop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_changes_only_on_window_boundaries() {
        let mut pedometer = Pedometer::new(Config::default()).unwrap();

        for i in 0..51 {
            pedometer.update(9.81_f32 + (i % 3) as f32);
            assert_eq!(pedometer.pending_samples(), i + 1);
        }
        pedometer.update(9.81_f32);
        assert_eq!(pedometer.pending_samples(), 0);
    }

    #[test]
    fn accepts_integer_counts() {
        let mut pedometer = Pedometer::new(Config::default()).unwrap();
        let output = pedometer.update(512_i16);
        assert_eq!(output, AlgoOutput::default());
    }

    #[test]
    fn clock_advances_by_sample_interval() {
        let mut pedometer = Pedometer::new(Config::default()).unwrap();
        pedometer.update(0.0_f32);
        assert_eq!(pedometer.elapsed(), 1.0 / 104.0);
        pedometer.update(0.0_f32);
        assert_eq!(pedometer.elapsed(), 1.0 / 104.0 + 1.0 / 104.0);
    }
}

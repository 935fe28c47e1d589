use crate::filters::MAX_TC_SAMPLES;
use crate::window::MAX_WINDOW_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSampleRate,
    InvalidAmplitudeBand,
    InvalidFrequencyBand,
    InvalidDetectionLimits,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidSampleRate => write!(
                f,
                "sample rate must give a window of {}..={} samples",
                MAX_TC_SAMPLES, MAX_WINDOW_LEN
            ),
            ConfigError::InvalidAmplitudeBand => {
                write!(f, "small_amplitude must be less than large_amplitude")
            }
            ConfigError::InvalidFrequencyBand => {
                write!(f, "slow_frequency must be less than fast_frequency")
            }
            ConfigError::InvalidDetectionLimits => {
                write!(f, "detection limits must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Guards applied while searching for extrema
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionLimits {
    /// Minimum time between two accepted extrema of the same kind (s)
    pub debounce_s: f32,
    /// Minimum swing between a candidate and the opposite extremum (m/s²).
    /// Maxima must also exceed it in magnitude.
    pub min_swing: f32,
    /// Longest period a single step may contribute to the frequency estimate (s)
    pub max_period_s: f32,
    /// Windows an estimate is held without fresh detections before decaying to zero
    pub hold_limit: u32,
}

impl Default for DetectionLimits {
    fn default() -> Self {
        Self {
            debounce_s: 0.2,
            min_swing: 1.5,
            max_period_s: 1.5,
            hold_limit: 2,
        }
    }
}

/// Amplitude (m/s²) and step-rate (Hz) bands used by the classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionThresholds {
    pub small_amplitude: f32,
    pub large_amplitude: f32,
    pub slow_frequency: f32,
    pub fast_frequency: f32,
}

impl Default for MotionThresholds {
    fn default() -> Self {
        Self {
            small_amplitude: 5.0,
            large_amplitude: 15.0,
            slow_frequency: 0.5,
            fast_frequency: 2.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Sets the window length and settling delays. The filter coefficients
    /// are fixed for 104 Hz, so at any other rate the 3 Hz smoothing and
    /// 4 Hz derivative cutoffs scale with `sample_rate_hz / 104`.
    pub sample_rate_hz: u32,
    pub detection: DetectionLimits,
    pub thresholds: MotionThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate_hz: 104,
            detection: DetectionLimits::default(),
            thresholds: MotionThresholds::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The tail carried between windows must fit inside one window
        let window_len = self.window_len();
        if !(MAX_TC_SAMPLES..=MAX_WINDOW_LEN).contains(&window_len) {
            return Err(ConfigError::InvalidSampleRate);
        }

        let t = &self.thresholds;
        if !(t.small_amplitude < t.large_amplitude) {
            return Err(ConfigError::InvalidAmplitudeBand);
        }
        if !(t.slow_frequency < t.fast_frequency) {
            return Err(ConfigError::InvalidFrequencyBand);
        }

        let d = &self.detection;
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;
        if !(non_negative(d.debounce_s) && non_negative(d.min_swing) && non_negative(d.max_period_s)) {
            return Err(ConfigError::InvalidDetectionLimits);
        }

        Ok(())
    }

    /// Samples per processing window, half a second of data
    pub fn window_len(&self) -> usize {
        (self.sample_rate_hz / 2) as usize
    }

    /// Seconds between consecutive samples
    pub fn sample_interval(&self) -> f32 {
        1.0 / self.sample_rate_hz as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_52_samples() {
        let config = Config::default();
        assert_eq!(config.window_len(), 52);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn error_messages_name_the_field() {
        use core::fmt::Write;

        let mut buf: heapless::String<96> = heapless::String::new();
        write!(buf, "{}", ConfigError::InvalidAmplitudeBand).unwrap();
        assert!(buf.contains("small_amplitude"));
    }
}

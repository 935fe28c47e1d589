use stride_core::{Config, ConfigError, DetectionLimits, MotionThresholds, Pedometer};

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert_eq!(config.sample_rate_hz, 104);
    assert_eq!(config.window_len(), 52);
    assert!((config.sample_interval() - 1.0 / 104.0).abs() < 1e-9);
    assert!(Pedometer::new(config).is_ok());
}

#[test]
fn test_zero_sample_rate() {
    let config = Config {
        sample_rate_hz: 0,
        ..Default::default()
    };

    let result = Pedometer::new(config);
    assert!(matches!(result, Err(ConfigError::InvalidSampleRate)));
}

#[test]
fn test_window_shorter_than_tail() {
    // 38 Hz gives 19-sample windows, shorter than the longest tail
    let config = Config {
        sample_rate_hz: 38,
        ..Default::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidSampleRate));

    let config = Config {
        sample_rate_hz: 40,
        ..Default::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_window_longer_than_buffer() {
    let config = Config {
        sample_rate_hz: 258,
        ..Default::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidSampleRate));

    let config = Config {
        sample_rate_hz: 256,
        ..Default::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_inverted_amplitude_band() {
    let config = Config {
        thresholds: MotionThresholds {
            small_amplitude: 15.0,
            large_amplitude: 5.0,
            ..Default::default()
        },
        ..Default::default()
    };

    let result = Pedometer::new(config);
    assert!(matches!(result, Err(ConfigError::InvalidAmplitudeBand)));
}

#[test]
fn test_degenerate_frequency_band() {
    let config = Config {
        thresholds: MotionThresholds {
            slow_frequency: 2.2,
            fast_frequency: 2.2,
            ..Default::default()
        },
        ..Default::default()
    };

    assert_eq!(config.validate(), Err(ConfigError::InvalidFrequencyBand));
}

#[test]
fn test_nan_threshold_rejected() {
    let config = Config {
        thresholds: MotionThresholds {
            small_amplitude: f32::NAN,
            ..Default::default()
        },
        ..Default::default()
    };

    assert_eq!(config.validate(), Err(ConfigError::InvalidAmplitudeBand));
}

#[test]
fn test_negative_detection_limits() {
    let config = Config {
        detection: DetectionLimits {
            debounce_s: -0.1,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidDetectionLimits));

    let config = Config {
        detection: DetectionLimits {
            max_period_s: f32::INFINITY,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::InvalidDetectionLimits));
}

#[test]
fn test_error_display() {
    assert_eq!(
        ConfigError::InvalidFrequencyBand.to_string(),
        "slow_frequency must be less than fast_frequency"
    );
    assert_eq!(
        ConfigError::InvalidSampleRate.to_string(),
        "sample rate must give a window of 20..=128 samples"
    );
}

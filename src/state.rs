use crate::classifier::MotionType;
use crate::window::Sample;

/// Last accepted maximum and minimum of the smoothed signal.
///
/// The timestamps encode which extremum comes next: while the maximum is not
/// newer than the minimum the detector looks for a maximum, otherwise for a
/// minimum. A step completes when a maximum is followed by a minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeakState {
    pub max: Sample,
    pub min: Sample,
}

impl PeakState {
    pub fn seeking_max(&self) -> bool {
        self.max.timestamp <= self.min.timestamp
    }
}

/// Result published after every completed window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlgoOutput {
    /// Accepted max→min pairs since start, regardless of motion type
    pub step_count: u32,
    pub motion: MotionType,
    pub peaks: PeakState,
}

/// Amplitude and frequency after hold/decay, as used by the last classification
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Estimates {
    /// Mean max-to-min swing (m/s²)
    pub amplitude: f32,
    /// Step rate (Hz)
    pub frequency: f32,
}

/// End-of-run figures for reporting
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    /// Timestamp of the last sample, in seconds
    pub elapsed_s: f32,
    pub walk: u32,
    pub run: u32,
    pub hop: u32,
}

impl RunSummary {
    pub fn total_steps(&self) -> u32 {
        self.walk + self.run + self.hop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_seeking_max() {
        assert!(PeakState::default().seeking_max());
    }

    #[test]
    fn newer_max_switches_to_min_search() {
        let peaks = PeakState {
            max: Sample::new(12.0, 1.2),
            min: Sample::new(4.0, 0.9),
        };
        assert!(!peaks.seeking_max());
    }
}

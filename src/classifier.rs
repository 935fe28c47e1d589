//! Motion classification from per-window amplitude and step rate.
//!
//! Each window is classified on its own; only [`StepTally`] carries history.
//!
//! | amplitude              | frequency         | result     |
//! |------------------------|-------------------|------------|
//! | <= small               | <= slow           | Stationary |
//! | <= small               | > slow            | Walk       |
//! | >= large               | >= fast           | Run        |
//! | >= large               | < fast            | Hop        |
//! | between small and large| >= fast           | Run        |
//! | between small and large| < fast            | Walk       |

use crate::config::MotionThresholds;

/// Locomotion category, with stable numeric codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MotionType {
    #[default]
    Stationary = 0,
    Walk = 1,
    Hop = 2,
    Run = 3,
}

const LABELS: [&str; 4] = ["STATIONARY", "WALKING", "HOPPING", "RUNNING"];

impl MotionType {
    pub const ALL: [MotionType; 4] = [
        MotionType::Stationary,
        MotionType::Walk,
        MotionType::Hop,
        MotionType::Run,
    ];

    /// Upper-case label used in reports
    pub const fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

impl core::fmt::Display for MotionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a window's amplitude (m/s²) and step rate (Hz) to a motion category
pub fn classify(amplitude: f32, frequency: f32, thresholds: &MotionThresholds) -> MotionType {
    if amplitude <= thresholds.small_amplitude {
        if frequency <= thresholds.slow_frequency {
            MotionType::Stationary
        } else {
            MotionType::Walk
        }
    } else if amplitude >= thresholds.large_amplitude {
        if frequency >= thresholds.fast_frequency {
            MotionType::Run
        } else {
            MotionType::Hop
        }
    } else if frequency >= thresholds.fast_frequency {
        MotionType::Run
    } else {
        MotionType::Walk
    }
}

/// Cumulative steps attributed to each moving category.
///
/// Steps found in a Stationary window are counted in
/// [`AlgoOutput::step_count`](crate::AlgoOutput) but credited to no category
/// here, so `total()` can fall behind the overall count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepTally {
    pub walk: u32,
    pub run: u32,
    pub hop: u32,
}

impl StepTally {
    pub fn record(&mut self, motion: MotionType, steps: u32) {
        match motion {
            MotionType::Stationary => {}
            MotionType::Walk => self.walk += steps,
            MotionType::Run => self.run += steps,
            MotionType::Hop => self.hop += steps,
        }
    }

    pub fn get(&self, motion: MotionType) -> u32 {
        match motion {
            MotionType::Stationary => 0,
            MotionType::Walk => self.walk,
            MotionType::Run => self.run,
            MotionType::Hop => self.hop,
        }
    }

    pub fn total(&self) -> u32 {
        self.walk + self.run + self.hop
    }
}

//! Step counting and motion classification from one accelerometer axis.
//!
//! Raw samples are smoothed, gathered into half-second windows and searched
//! for alternating maxima and minima. Each completed max→min pair is a step;
//! the mean swing and step rate of a window decide whether the wearer is
//! stationary, walking, hopping or running.
//!
//! ```
//! use stride_core::{Config, Pedometer};
//!
//! let mut pedometer = Pedometer::new(Config::default()).unwrap();
//! for _ in 0..104 {
//!     pedometer.update(9.81_f32);
//! }
//!
//! // A constant reading completes no step
//! assert_eq!(pedometer.output().step_count, 0);
//! assert_eq!(pedometer.summary().total_steps(), 0);
//! ```
#![no_std]

#[macro_use]
mod macros;

mod config;
mod pedometer;
mod state;
pub mod classifier;
pub mod filters;
pub mod hysteresis;
pub mod peak_detector;
pub mod window;

pub use config::{Config, ConfigError, DetectionLimits, MotionThresholds};
pub use state::{AlgoOutput, Estimates, PeakState, RunSummary};
pub use pedometer::Pedometer;
pub use classifier::{MotionType, StepTally, classify};
pub use filters::{BiquadFilter, FilterKind};
pub use hysteresis::{EstimateHold, EstimateSmoother};
pub use peak_detector::{PeakDetector, WindowDetection};
pub use window::{Sample, SampleWindow, Tail, WindowAccumulator};

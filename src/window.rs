//! Sample blocks handed to the peak detector.
//!
//! Smoothed samples are gathered into half-second windows so the detector
//! only wakes once per block. The detector also needs the last few samples of
//! the previous block, since its derivative lags the smoothed signal by the
//! lead-lag filter's settling delay. [`Tail`] keeps those samples and
//! [`Tail::extend`] glues them in front of the next window.

use heapless::Vec;

use crate::filters::{BiquadFilter, FilterKind, MAX_TC_SAMPLES};

/// Largest window the fixed buffers can hold
pub const MAX_WINDOW_LEN: usize = 128;

/// Longest tail-plus-window sequence
pub const MAX_EXTENDED_LEN: usize = MAX_WINDOW_LEN + MAX_TC_SAMPLES;

/// A smoothed sample and its timestamp in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    pub value: f32,
    pub timestamp: f32,
}

impl Sample {
    pub const fn new(value: f32, timestamp: f32) -> Self {
        Self { value, timestamp }
    }
}

/// Fixed-capacity block of consecutive smoothed samples
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    samples: Vec<Sample, MAX_WINDOW_LEN>,
    capacity: usize,
}

impl SampleWindow {
    /// `capacity` is clamped to [`MAX_WINDOW_LEN`]
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::new(),
            capacity: capacity.min(MAX_WINDOW_LEN),
        }
    }

    /// Build a full window from existing samples, taking at most `MAX_WINDOW_LEN`
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut window = Self::new(samples.len());
        for &sample in samples.iter().take(window.capacity) {
            // Capacity was sized from the slice above
            let _ = window.samples.push(sample);
        }
        window
    }

    /// Append a sample. Returns it back when the window is already full.
    pub fn push(&mut self, sample: Sample) -> Result<(), Sample> {
        if self.is_full() {
            return Err(sample);
        }
        self.samples.push(sample)
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Samples carried over from the end of the previous window
#[derive(Debug, Clone, PartialEq)]
pub struct Tail {
    samples: Vec<Sample, MAX_TC_SAMPLES>,
}

impl Tail {
    /// Zero-filled tail of `len` samples, as seen before the first window.
    /// `len` is clamped to [`MAX_TC_SAMPLES`].
    pub fn zeroed(len: usize) -> Self {
        let mut samples = Vec::new();
        for _ in 0..len.min(MAX_TC_SAMPLES) {
            let _ = samples.push(Sample::default());
        }
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Extended buffer: this tail followed by every sample of `window`
    pub fn extend(&self, window: &SampleWindow) -> Vec<Sample, MAX_EXTENDED_LEN> {
        let mut extended = Vec::new();
        for &sample in self.samples.iter().chain(window.as_slice()) {
            // Both parts are bounded by their own capacities
            let _ = extended.push(sample);
        }
        extended
    }

    /// Advance the tail past `window`, keeping its length.
    ///
    /// The tail becomes the last `len()` samples of the stream so far. A
    /// window shorter than the tail only shifts out as many old samples as it
    /// brings in.
    pub fn carry_tail(&mut self, window: &SampleWindow) {
        let len = self.samples.len();
        let incoming = window.as_slice();
        let kept = len.saturating_sub(incoming.len());
        let start = incoming.len().saturating_sub(len);

        let mut next: Vec<Sample, MAX_TC_SAMPLES> = Vec::new();
        for &sample in self.samples[len - kept..].iter().chain(&incoming[start..]) {
            // kept + (incoming.len() - start) == len
            let _ = next.push(sample);
        }
        self.samples = next;
    }
}

/// Smooths raw samples and collects them into windows
#[derive(Debug, Clone)]
pub struct WindowAccumulator {
    smoothing: BiquadFilter,
    window: SampleWindow,
}

impl WindowAccumulator {
    pub fn new(sample_rate_hz: u32, capacity: usize) -> Self {
        Self {
            smoothing: BiquadFilter::for_kind(FilterKind::Smoothing, sample_rate_hz),
            window: SampleWindow::new(capacity),
        }
    }

    /// Smooth `raw` and store it with `timestamp`.
    ///
    /// Returns `true` when this sample completed the window. The full window
    /// stays readable through [`window`](Self::window) until the next push,
    /// which starts a fresh one.
    pub fn push(&mut self, raw: f32, timestamp: f32) -> bool {
        if self.window.is_full() {
            self.window.clear();
        }

        let smoothed = self.smoothing.apply(raw);
        // Cannot fail: a full window was cleared above
        let _ = self.window.push(Sample::new(smoothed, timestamp));

        self.window.is_full()
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize) -> SampleWindow {
        let mut window = SampleWindow::new(len);
        for i in 0..len {
            window.push(Sample::new(i as f32, i as f32 * 0.01)).unwrap();
        }
        window
    }

    #[test]
    fn push_rejects_past_capacity() {
        let mut window = ramp(4);
        assert!(window.is_full());
        assert_eq!(window.push(Sample::new(9.0, 9.0)), Err(Sample::new(9.0, 9.0)));
        assert_eq!(window.len(), 4);
    }

    #[test]
    fn zeroed_tail_prefixes_first_window() {
        let tail = Tail::zeroed(3);
        let extended = tail.extend(&ramp(5));

        assert_eq!(extended.len(), 8);
        assert_eq!(extended[0], Sample::default());
        assert_eq!(extended[2], Sample::default());
        assert_eq!(extended[3].value, 0.0);
        assert_eq!(extended[7].value, 4.0);
    }

    #[test]
    fn carry_tail_keeps_last_samples() {
        let mut tail = Tail::zeroed(3);
        tail.carry_tail(&ramp(10));

        let values: Vec<f32, 3> = tail.as_slice().iter().map(|s| s.value).collect();
        assert_eq!(values.as_slice(), &[7.0, 8.0, 9.0]);
    }

    #[test]
    fn short_window_shifts_tail() {
        let mut tail = Tail::zeroed(3);
        tail.carry_tail(&ramp(10));
        tail.carry_tail(&SampleWindow::from_samples(&[Sample::new(20.0, 1.0)]));

        let values: Vec<f32, 3> = tail.as_slice().iter().map(|s| s.value).collect();
        assert_eq!(values.as_slice(), &[8.0, 9.0, 20.0]);

        tail.carry_tail(&SampleWindow::new(4));
        assert_eq!(tail.len(), 3);
        assert!(!tail.is_empty());
    }

    #[test]
    fn accumulator_restarts_after_full_window() {
        let mut acc = WindowAccumulator::new(104, 4);
        assert!(!acc.push(1.0, 0.1));
        assert!(!acc.push(1.0, 0.2));
        assert!(!acc.push(1.0, 0.3));
        assert!(acc.push(1.0, 0.4));
        assert_eq!(acc.window().len(), 4);

        assert!(!acc.push(1.0, 0.5));
        assert_eq!(acc.window().len(), 1);
        assert_eq!(acc.window().get(0).map(|s| s.timestamp), Some(0.5));
    }
}

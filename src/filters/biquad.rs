use super::FilterKind;

/// Direct-form I biquad coefficients, with a0 normalized to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub b0: f32,
    pub b1: f32,
    pub b2: f32,
    pub a1: f32,
    pub a2: f32,
}

/// Second-order IIR filter state
///
/// y(n) = b0*x(n) + b1*x(n-1) + b2*x(n-2) - a1*y(n-1) - a2*y(n-2)
///
/// Non-finite input is not rejected; once NaN enters the history it stays there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadFilter {
    coefficients: Coefficients,
    prev_in: f32,
    prev_prev_in: f32,
    prev_out: f32,
    prev_prev_out: f32,
    tc_samples: usize,
}

impl BiquadFilter {
    /// Create a filter with zeroed history
    pub const fn new(coefficients: Coefficients, tc_samples: usize) -> Self {
        Self {
            coefficients,
            prev_in: 0.0,
            prev_prev_in: 0.0,
            prev_out: 0.0,
            prev_prev_out: 0.0,
            tc_samples,
        }
    }

    /// Create one of the predefined filters for the given sample rate
    pub fn for_kind(kind: FilterKind, sample_rate_hz: u32) -> Self {
        Self::new(kind.coefficients(), kind.tc_samples(sample_rate_hz))
    }

    /// Filter one sample and shift the history
    #[inline]
    pub fn apply(&mut self, input: f32) -> f32 {
        let c = &self.coefficients;
        let output = c.b0 * input + c.b1 * self.prev_in + c.b2 * self.prev_prev_in
            - c.a1 * self.prev_out
            - c.a2 * self.prev_prev_out;

        self.prev_prev_in = self.prev_in;
        self.prev_in = input;
        self.prev_prev_out = self.prev_out;
        self.prev_out = output;

        output
    }

    /// Settling delay in samples
    pub fn tc_samples(&self) -> usize {
        self.tc_samples
    }

    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Most recent output, or 0.0 before the first sample
    pub fn last_output(&self) -> f32 {
        self.prev_out
    }
}

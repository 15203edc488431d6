use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed interval `[lo, hi]` sampled uniformly
///
/// A zero-width interval is a fixed value; sampling it returns `lo` without
/// touching the generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Range {
    pub lo: f64,
    pub hi: f64,
}

impl Range {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub const fn fixed(value: f64) -> Self {
        Self {
            lo: value,
            hi: value,
        }
    }

    /// Both ends finite and `lo <= hi`
    pub fn is_valid(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && self.lo <= self.hi
    }

    pub fn is_fixed(&self) -> bool {
        self.lo == self.hi
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    /// Uniform sample in `[lo, hi]`
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        if self.lo >= self.hi {
            return self.lo;
        }
        // Float rounding in the inclusive sampler may land one ulp past `hi`
        rng.random_range(self.lo..=self.hi).clamp(self.lo, self.hi)
    }
}

impl From<[f64; 2]> for Range {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self { lo, hi }
    }
}

impl From<Range> for [f64; 2] {
    fn from(range: Range) -> Self {
        [range.lo, range.hi]
    }
}

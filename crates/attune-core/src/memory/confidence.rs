use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::constants;

/// Confidence score clamped to [0.0, 1.0].
/// Represents how strongly the system believes a memory still holds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Retrieval floor: memories below this are invisible to retrieval.
    pub const MINIMUM: f64 = constants::MIN_RETRIEVAL_CONFIDENCE;
    /// Reinforcement ceiling: boosts converge toward but never reach this.
    pub const CEILING: f64 = constants::REINFORCEMENT_CEILING;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if confidence is at or above the retrieval floor.
    pub fn is_retrievable(self) -> bool {
        self.0 >= Self::MINIMUM
    }

    /// Apply one diminishing-returns reinforcement step:
    /// `c + 0.1 * (1 - c)`, capped at the 0.95 ceiling.
    pub fn reinforced(self) -> Self {
        let boosted = self.0 + constants::REINFORCEMENT_RATE * (1.0 - self.0);
        Self(boosted.min(Self::CEILING))
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(constants::DEFAULT_MEMORY_CONFIDENCE)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Add for Confidence {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Confidence {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl Mul<f64> for Confidence {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

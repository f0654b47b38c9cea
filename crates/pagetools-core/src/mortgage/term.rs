//! Loan-term slider with step buttons.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_YEARS: u32 = 1;
pub const DEFAULT_MAX_YEARS: u32 = 40;
pub const DEFAULT_YEARS: u32 = 25;

/// Term in years, always within `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermControl {
    years: u32,
    min: u32,
    max: u32,
}

impl Default for TermControl {
    fn default() -> Self {
        Self::new(DEFAULT_YEARS, DEFAULT_MIN_YEARS, DEFAULT_MAX_YEARS)
    }
}

impl TermControl {
    /// Bounds are swapped if given in the wrong order.
    pub fn new(years: u32, min: u32, max: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            years: years.clamp(min, max),
            min,
            max,
        }
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    /// Step by `delta` years, clamped to the bounds. Returns the new value.
    pub fn adjust(&mut self, delta: i64) -> u32 {
        let next = i64::from(self.years).saturating_add(delta);
        self.years = next.clamp(i64::from(self.min), i64::from(self.max)) as u32;
        self.years
    }

    /// Set directly from the slider, clamped to the bounds.
    pub fn set(&mut self, years: u32) -> u32 {
        self.years = years.clamp(self.min, self.max);
        self.years
    }

    pub fn display(&self) -> String {
        self.years.to_string()
    }
}

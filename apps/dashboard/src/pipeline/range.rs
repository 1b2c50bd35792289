//! Range Edit Boundary — the dual-thumb slider model behind score and
//! experience filters.
//!
//! Invariant: thumbs may touch but never cross. A proposed edit that would
//! cross is rejected outright — the prior state is kept, nothing is clamped
//! to the other thumb or swapped. Domain clamping of raw UI values happens
//! first; the no-crossing check applies to the clamped value.

#![allow(dead_code)]

/// Experience slider domain, in months.
pub const EXPERIENCE_MONTHS_CEIL: f64 = 24.0;

/// A two-ended range control over a bounded numeric domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeControl {
    lower: f64,
    upper: f64,
    floor: f64,
    ceil: f64,
}

impl RangeControl {
    /// A control with both thumbs at the domain edges (no constraint).
    pub fn new(floor: f64, ceil: f64) -> Self {
        Self {
            lower: floor,
            upper: ceil,
            floor,
            ceil,
        }
    }

    /// Seeds a control from historical values (e.g. a parsed URL). Values
    /// are clamped into the domain; a crossed pair is malformed and falls
    /// back to the unconstrained control.
    pub fn with_values(floor: f64, ceil: f64, lower: f64, upper: f64) -> Self {
        let lower = lower.clamp(floor, ceil);
        let upper = upper.clamp(floor, ceil);
        if lower > upper {
            return Self::new(floor, ceil);
        }
        Self {
            lower,
            upper,
            floor,
            ceil,
        }
    }

    /// Proposes a new lower thumb position. Returns false (state unchanged)
    /// when the clamped value would cross the upper thumb.
    pub fn set_lower(&mut self, proposed: f64) -> bool {
        let value = proposed.clamp(self.floor, self.ceil);
        if value > self.upper {
            return false;
        }
        self.lower = value;
        true
    }

    /// Proposes a new upper thumb position; same rejection rule.
    pub fn set_upper(&mut self, proposed: f64) -> bool {
        let value = proposed.clamp(self.floor, self.ceil);
        if value < self.lower {
            return false;
        }
        self.upper = value;
        true
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Converts thumb positions into criteria bounds. A thumb resting on a
    /// domain edge means "no constraint" and never becomes an explicit bound.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        let lower = (self.lower > self.floor).then_some(self.lower);
        let upper = (self.upper < self.ceil).then_some(self.upper);
        (lower, upper)
    }
}

/// The experience slider: 0–24 months internally.
pub fn experience_months_control() -> RangeControl {
    RangeControl::new(0.0, EXPERIENCE_MONTHS_CEIL)
}

/// The score slider: the full 0–100 match-score domain.
pub fn score_control() -> RangeControl {
    RangeControl::new(0.0, 100.0)
}

/// Converts experience thumb positions (months) into criteria bounds
/// (years). Domain edges become `None` before the conversion, so `[0, 24]`
/// sends no bounds at all rather than a meaningless explicit `[0, 2]`.
pub fn experience_bounds_years(control: &RangeControl) -> (Option<f64>, Option<f64>) {
    let (lower, upper) = control.bounds();
    (lower.map(|m| m / 12.0), upper.map(|m| m / 12.0))
}

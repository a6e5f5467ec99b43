//! Simulated time.
//!
//! Engines move one distance unit per time unit, so every arrival happens at
//! a whole unit. Head-on meetings happen at the midpoint of two whole
//! instants, which may fall on a half unit. Storing time in half units keeps
//! every instant exact, hashable and totally ordered.

use std::fmt;
use std::ops::Add;

use serde::{Serialize, Serializer};

/// An instant of simulated time, counted from 0 at the start of every route.
///
/// # Examples
///
/// ```
/// use railcrash::domain::SimTime;
///
/// let a = SimTime::from_units(0);
/// let b = SimTime::from_units(3);
/// assert_eq!(SimTime::midpoint(a, b).to_string(), "1.5");
/// assert_eq!(b.to_string(), "3.0");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SimTime {
    halves: u64,
}

impl SimTime {
    /// Time zero.
    pub const ZERO: SimTime = SimTime { halves: 0 };

    /// Create an instant from whole time units.
    pub const fn from_units(units: u64) -> Self {
        Self { halves: units * 2 }
    }

    /// The instant halfway between `a` and `b`.
    ///
    /// Only ever applied to whole-unit instants, so the result is exact.
    pub fn midpoint(a: SimTime, b: SimTime) -> Self {
        Self {
            halves: (a.halves + b.halves) / 2,
        }
    }

    /// Returns true if this instant falls on a whole unit.
    pub fn is_whole(self) -> bool {
        self.halves % 2 == 0
    }

    /// Returns the instant as a floating-point number of units.
    pub fn as_f64(self) -> f64 {
        self.halves as f64 / 2.0
    }
}

/// Advance by a branch length.
impl Add<u32> for SimTime {
    type Output = SimTime;

    fn add(self, length: u32) -> SimTime {
        SimTime {
            halves: self.halves + u64::from(length) * 2,
        }
    }
}

impl fmt::Debug for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimTime({})", self)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.halves / 2;
        let frac = if self.is_whole() { 0 } else { 5 };
        write!(f, "{whole}.{frac}")
    }
}

impl Serialize for SimTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_whole_and_half() {
        assert_eq!(SimTime::ZERO.to_string(), "0.0");
        assert_eq!(SimTime::from_units(12).to_string(), "12.0");
        let half = SimTime::midpoint(SimTime::from_units(1), SimTime::from_units(2));
        assert_eq!(half.to_string(), "1.5");
        assert!(!half.is_whole());
    }

    #[test]
    fn add_branch_length() {
        let t = SimTime::from_units(4) + 3;
        assert_eq!(t, SimTime::from_units(7));
    }

    #[test]
    fn midpoint_of_equal_instants() {
        let t = SimTime::from_units(5);
        assert_eq!(SimTime::midpoint(t, t), t);
    }

    #[test]
    fn ordering_across_halves() {
        let half = SimTime::midpoint(SimTime::ZERO, SimTime::from_units(1));
        assert!(SimTime::ZERO < half);
        assert!(half < SimTime::from_units(1));
    }

    #[test]
    fn as_f64_and_json() {
        let t = SimTime::midpoint(SimTime::ZERO, SimTime::from_units(5));
        assert_eq!(t.as_f64(), 2.5);
        assert_eq!(serde_json::to_string(&t).unwrap(), "2.5");
        assert_eq!(serde_json::to_string(&SimTime::from_units(1)).unwrap(), "1.0");
    }
}

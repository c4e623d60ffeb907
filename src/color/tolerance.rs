//! Validated match tolerance.

use crate::util::{GridMatchError, GridMatchResult};

/// Upper bound on color distance for two colors to count as equal.
///
/// A pair of colors matches when `distance <= tolerance`. Values are finite
/// and lie in `[0, 1]`, the range of every [`Metric`](crate::color::Metric).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Only identical colors match.
    pub const EXACT: Tolerance = Tolerance(0.0);
    /// Every pair of colors matches.
    pub const ANY: Tolerance = Tolerance(1.0);

    /// Creates a tolerance, rejecting NaN, infinities and values outside `[0, 1]`.
    pub fn new(value: f64) -> GridMatchResult<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(GridMatchError::InvalidTolerance(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the raw threshold.
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub(crate) fn admits(self, distance: f64) -> bool {
        distance <= self.0
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = GridMatchError;

    fn try_from(value: f64) -> GridMatchResult<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Tolerance;
    use crate::util::GridMatchError;

    #[test]
    fn rejects_values_outside_unit_range() {
        for bad in [-0.01, 1.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Tolerance::new(bad),
                Err(GridMatchError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(Tolerance::new(0.0).unwrap(), Tolerance::EXACT);
        assert_eq!(Tolerance::new(1.0).unwrap(), Tolerance::ANY);
        assert!(Tolerance::EXACT.admits(0.0));
        assert!(!Tolerance::EXACT.admits(1e-9));
    }
}

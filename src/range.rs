//! Normalized value ranges.
//!
//! [`NormalizedRange`] stores a value as a fraction in `[0, 1]` of a
//! `min..=max` interval. Controls keep their state in this form so the knob
//! position can be derived directly from the fraction, while callers always
//! see the denormalized value.
//!
//! # Example
//!
//! ```
//! use ringtoy::NormalizedRange;
//!
//! let mut range = NormalizedRange::with_bounds(1.0, 100.0).unwrap();
//! range.set_value(50.5);
//! assert!((range.fraction() - 0.5).abs() < 1e-6);
//!
//! // Out-of-range values clamp to the nearest bound.
//! range.set_value(500.0);
//! assert_eq!(range.value(), 100.0);
//! ```

use crate::error::RangeError;

/// A value held as a fraction of a `min..=max` interval.
///
/// The invariant `min < max` holds after every mutation; any assignment that
/// would break it is rejected with [`RangeError`] and leaves the range as it
/// was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRange {
    min: f32,
    max: f32,
    fraction: f32,
}

impl NormalizedRange {
    /// Create a range over `0.0..=1.0` with the value at `0.0`.
    pub fn new() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            fraction: 0.0,
        }
    }

    /// Create a range over `min..=max` with the value at `min`.
    pub fn with_bounds(min: f32, max: f32) -> Result<Self, RangeError> {
        check_bounds(min, max)?;
        Ok(Self {
            min,
            max,
            fraction: 0.0,
        })
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Current position in `[0, 1]`.
    #[inline]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Current denormalized value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.denormalize(self.fraction)
    }

    /// Map a fraction onto this range without changing the stored value.
    #[inline]
    pub fn denormalize(&self, fraction: f32) -> f32 {
        fraction * (self.max - self.min) + self.min
    }

    /// Set the value, clamping it into `min..=max`.
    ///
    /// NaN is treated as `min`.
    pub fn set_value(&mut self, value: f32) {
        let clamped = if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };
        self.fraction = ((clamped - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
    }

    /// Replace both bounds at once.
    ///
    /// The current value is kept if it still lies inside the new range,
    /// otherwise it is clamped to the nearest new bound.
    pub fn set_range(&mut self, min: f32, max: f32) -> Result<(), RangeError> {
        check_bounds(min, max)?;
        let value = self.value();
        self.min = min;
        self.max = max;
        self.set_value(value);
        Ok(())
    }

    /// Replace the lower bound. Fails if `min >= max`.
    pub fn set_min(&mut self, min: f32) -> Result<(), RangeError> {
        self.set_range(min, self.max)
    }

    /// Replace the upper bound. Fails if `max <= min`.
    pub fn set_max(&mut self, max: f32) -> Result<(), RangeError> {
        self.set_range(self.min, max)
    }
}

impl Default for NormalizedRange {
    fn default() -> Self {
        Self::new()
    }
}

fn check_bounds(min: f32, max: f32) -> Result<(), RangeError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(RangeError::new(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-4 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn test_defaults() {
        let range = NormalizedRange::new();
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 1.0);
        assert_eq!(range.fraction(), 0.0);
        assert_eq!(range.value(), 0.0);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let min: f32 = rng.gen_range(-1000.0..1000.0);
            let max = min + rng.gen_range(0.01..1000.0);
            let v = rng.gen_range(min..=max);

            let mut range = NormalizedRange::new();
            range.set_range(min, max).unwrap();
            range.set_value(v);
            assert!(approx(range.value(), v), "{} != {} in {}..{}", range.value(), v, min, max);
        }
    }

    #[test]
    fn test_clamp() {
        let mut range = NormalizedRange::with_bounds(0.05, 2.0).unwrap();
        range.set_value(-3.0);
        assert_eq!(range.value(), 0.05);
        assert_eq!(range.fraction(), 0.0);

        range.set_value(9.0);
        assert_eq!(range.value(), 2.0);
        assert_eq!(range.fraction(), 1.0);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut range = NormalizedRange::with_bounds(0.0, 10.0).unwrap();
        range.set_value(4.0);

        let err = range.set_range(5.0, 1.0).unwrap_err();
        assert_eq!(err, RangeError::new(5.0, 1.0));
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 10.0);
        assert!(approx(range.value(), 4.0));
    }

    #[test]
    fn test_collapsed_range_rejected() {
        assert!(NormalizedRange::with_bounds(1.0, 1.0).is_err());

        let mut range = NormalizedRange::new();
        assert!(range.set_min(1.0).is_err());
        assert!(range.set_max(0.0).is_err());
        assert!(range.set_range(f32::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_rebounding_clamps_value() {
        let mut range = NormalizedRange::with_bounds(0.0, 10.0).unwrap();
        range.set_value(8.0);

        range.set_max(5.0).unwrap();
        assert_eq!(range.value(), 5.0);
        assert_eq!(range.fraction(), 1.0);

        range.set_min(-5.0).unwrap();
        assert!(approx(range.value(), 5.0));

        range.set_min(6.0).unwrap_err();
        range.set_range(6.0, 7.0).unwrap();
        assert_eq!(range.value(), 6.0);
    }

    #[test]
    fn test_rebounding_keeps_inner_value() {
        let mut range = NormalizedRange::new();
        range.set_value(0.5);
        range.set_range(0.0, 2.0).unwrap();
        assert!(approx(range.value(), 0.5));
        assert!(approx(range.fraction(), 0.25));
    }

    #[test]
    fn test_nan_value_goes_to_min() {
        let mut range = NormalizedRange::with_bounds(2.0, 4.0).unwrap();
        range.set_value(3.0);
        range.set_value(f32::NAN);
        assert_eq!(range.value(), 2.0);
    }
}

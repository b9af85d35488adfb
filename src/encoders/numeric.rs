//! Numeric Encoder implementation.
//!
//! The Numeric Encoder tracks the running minimum and maximum of a field and
//! projects values onto `[0, 1]` by linear min-max scaling.

use crate::encoders::{Encoder, Fit};
use crate::error::{FtrGenError, Result};
use crate::types::{Real, SparseVector};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for creating a Numeric Encoder.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericParams {
    /// Whether to scale values by the fitted min/max.
    /// If false, values pass through unchanged.
    pub normalize: bool,
}

impl Default for NumericParams {
    fn default() -> Self {
        Self { normalize: true }
    }
}

/// Encodes a number as a single, optionally min-max scaled, dimension.
///
/// Before the first update the bounds hold identity sentinels (`f64::MAX` for
/// the minimum, `f64::MIN` for the maximum) and scaling yields 0.
///
/// # Example
///
/// ```rust
/// use ftrgen::encoders::{Numeric, NumericParams, Encoder};
///
/// let mut encoder = Numeric::new(NumericParams { normalize: true });
/// encoder.update(2.0);
/// encoder.update(8.0);
///
/// assert_eq!(encoder.get_ftr(5.0), 0.5);
///
/// let vector = encoder.encode_to_vector(8.0).unwrap();
/// assert_eq!(vector.entries(), &[(0, 1.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Numeric {
    normalize: bool,
    min: Real,
    max: Real,
}

impl Numeric {
    /// Creates a new, unfitted Numeric Encoder.
    pub fn new(params: NumericParams) -> Self {
        Self {
            normalize: params.normalize,
            min: Real::MAX,
            max: Real::MIN,
        }
    }

    /// Observes a value.
    ///
    /// The first value sets both bounds. NaN and infinite values are accepted;
    /// a NaN reaching a bound stays there.
    pub fn update(&mut self, value: Real) {
        if !self.is_fitted() {
            self.min = value;
            self.max = value;
            return;
        }
        if value.is_nan() || value < self.min {
            self.min = value;
        }
        if value.is_nan() || value > self.max {
            self.max = value;
        }
    }

    /// Returns the feature value for `value`.
    ///
    /// With normalization this is `(value - min) / (max - min)`, or 0 when the
    /// fitted range is empty. Without normalization `value` is returned as is.
    pub fn get_ftr(&self, value: Real) -> Real {
        if !self.normalize {
            return value;
        }
        if !self.has_range() {
            return 0.0;
        }
        let span = self.max - self.min;
        if span.is_infinite() {
            // Finite bounds whose difference overflows.
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        } else {
            (value - self.min) / span
        }
    }

    /// False for unfitted, degenerate or NaN bounds.
    fn has_range(&self) -> bool {
        self.max > self.min
    }

    /// Writes the feature value into `output[offset]`, zero or not.
    ///
    /// # Errors
    ///
    /// Returns an error if `offset` is past the end of `output`.
    pub fn encode_dense(&self, value: Real, output: &mut [Real], offset: usize) -> Result<()> {
        let size = output.len();
        let slot = output
            .get_mut(offset)
            .ok_or(FtrGenError::IndexOutOfBounds { index: offset, size })?;
        *slot = self.get_ftr(value);
        Ok(())
    }

    /// Returns true once at least one value has been observed.
    pub fn is_fitted(&self) -> bool {
        !(self.min == Real::MAX && self.max == Real::MIN)
    }

    /// Returns whether values are scaled.
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// Returns the smallest value observed.
    pub fn min(&self) -> Real {
        self.min
    }

    /// Returns the largest value observed.
    pub fn max(&self) -> Real {
        self.max
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Self::new(NumericParams::default())
    }
}

impl Fit<Real> for Numeric {
    fn update(&mut self, value: Real) {
        Numeric::update(self, value);
    }
}

impl Encoder<Real> for Numeric {
    fn size(&self) -> usize {
        1
    }

    fn encode(&self, value: Real, output: &mut SparseVector, offset: usize) -> Result<()> {
        let ftr = self.get_ftr(value);
        if ftr != 0.0 {
            output.push(offset, ftr);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted(values: &[Real]) -> Numeric {
        let mut encoder = Numeric::default();
        for &v in values {
            encoder.update(v);
        }
        encoder
    }

    #[test]
    fn test_min_max_scaling() {
        let encoder = fitted(&[2.0, 8.0]);

        assert_eq!(encoder.get_ftr(2.0), 0.0);
        assert_eq!(encoder.get_ftr(8.0), 1.0);
        assert_eq!(encoder.get_ftr(5.0), 0.5);
    }

    #[test]
    fn test_values_outside_range_are_not_clipped() {
        let encoder = fitted(&[0.0, 10.0]);
        assert_eq!(encoder.get_ftr(20.0), 2.0);
        assert_eq!(encoder.get_ftr(-5.0), -0.5);
    }

    #[test]
    fn test_degenerate_range() {
        let encoder = fitted(&[3.0, 3.0]);
        assert_eq!(encoder.get_ftr(3.0), 0.0);
        assert_eq!(encoder.get_ftr(100.0), 0.0);
    }

    #[test]
    fn test_unfitted() {
        let encoder = Numeric::default();
        assert!(!encoder.is_fitted());
        assert_eq!(encoder.get_ftr(42.0), 0.0);
        assert!(encoder.encode_to_vector(42.0).unwrap().is_empty());
    }

    #[test]
    fn test_no_normalization() {
        let mut encoder = Numeric::new(NumericParams { normalize: false });
        encoder.update(1.0);
        encoder.update(3.0);

        assert!(!encoder.normalize());
        assert_eq!(encoder.get_ftr(7.5), 7.5);
    }

    #[test]
    fn test_encode_skips_zero() {
        let encoder = fitted(&[1.0, 5.0]);

        let mut out = SparseVector::new();
        encoder.encode(1.0, &mut out, 4).unwrap();
        assert!(out.is_empty());

        encoder.encode(5.0, &mut out, 4).unwrap();
        assert_eq!(out.entries(), &[(4, 1.0)]);
    }

    #[test]
    fn test_encode_dense() {
        let encoder = fitted(&[0.0, 4.0]);
        let mut dense = vec![9.0; 3];

        encoder.encode_dense(0.0, &mut dense, 1).unwrap();
        encoder.encode_dense(1.0, &mut dense, 2).unwrap();
        assert_eq!(dense, vec![9.0, 0.0, 0.25]);

        let result = encoder.encode_dense(1.0, &mut dense, 3);
        assert!(matches!(
            result,
            Err(FtrGenError::IndexOutOfBounds { index: 3, size: 3 })
        ));
    }

    #[test]
    fn test_nan_propagates() {
        let mut encoder = fitted(&[1.0, 2.0]);
        encoder.update(Real::NAN);
        encoder.update(0.0);

        assert!(encoder.min().is_nan());
        assert!(encoder.max().is_nan());
        assert!(encoder.is_fitted());
        assert_eq!(encoder.get_ftr(1.5), 0.0);

        let first_nan = fitted(&[Real::NAN, 3.0]);
        assert!(first_nan.min().is_nan());
        assert_eq!(first_nan.get_ftr(3.0), 0.0);
    }

    #[test]
    fn test_span_overflowing_f64() {
        let encoder = fitted(&[-1e308, 1e308]);

        assert_eq!(encoder.get_ftr(-1e308), 0.0);
        assert_eq!(encoder.get_ftr(1e308), 1.0);
        assert_eq!(encoder.get_ftr(0.0), 0.5);

        let encoder = fitted(&[Real::MIN, Real::MAX]);
        assert_eq!(encoder.get_ftr(Real::MIN), 0.0);
        assert_eq!(encoder.get_ftr(Real::MAX), 1.0);
    }

    #[test]
    fn test_single_infinite_value() {
        for value in [Real::NEG_INFINITY, Real::INFINITY] {
            let encoder = fitted(&[value]);

            assert!(encoder.is_fitted());
            assert_eq!(encoder.min(), value);
            assert_eq!(encoder.max(), value);
            assert_eq!(encoder.get_ftr(0.0), 0.0);
            assert!(encoder.encode_to_vector(1.0).unwrap().is_empty());
        }
    }

    #[test]
    fn test_first_value_sets_both_bounds() {
        let encoder = fitted(&[Real::MAX]);
        assert_eq!(encoder.min(), Real::MAX);
        assert_eq!(encoder.max(), Real::MAX);
        assert!(encoder.is_fitted());

        let encoder = fitted(&[Real::MIN, 0.0]);
        assert_eq!(encoder.min(), Real::MIN);
        assert_eq!(encoder.max(), 0.0);
    }

    #[test]
    fn test_infinity_accepted() {
        let encoder = fitted(&[Real::NEG_INFINITY, 1.0]);
        assert_eq!(encoder.min(), Real::NEG_INFINITY);
        assert_eq!(encoder.max(), 1.0);
    }
}

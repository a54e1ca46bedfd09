//! Curve fitting for masked-sequence interpolation.
//!
//! ## Purpose
//!
//! This module defines the `CurveFitter` capability consumed by the spline
//! interpolator, and `SplineFitter`, the default implementation: an
//! interpolating B-spline of configurable degree through integer sample
//! positions.
//!
//! ## Design notes
//!
//! * **Injected**: The interpolator only depends on the trait, so tests and
//!   callers may substitute their own fitting engine.
//! * **Interpolating**: `SplineFitter` passes exactly through every sample
//!   (the `s = 0` case of a smoothing spline).
//! * **Banded**: The collocation system is solved in band form, in time linear
//!   in the number of samples.
//! * **Validated**: Fitting rejects unordered positions, non-finite values and
//!   sample sets too small for the requested degree.
//!
//! ## Key concepts
//!
//! * **Collocation**: Coefficients solve `sum_j B_j(x_i) c_j = y_i` for every sample `i`.
//! * **Polynomial reproduction**: A degree-`k` spline reproduces any polynomial of degree `<= k`.
//!
//! ## Invariants
//!
//! * A fit of degree `k` needs at least `k + 1` samples.
//! * The fitted curve passes through every sample.
//!
//! ## Non-goals
//!
//! * This module does not decide which positions are filled.
//! * This module does not smooth noisy data (no smoothing factor).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::bspline;
use crate::math::linalg::BandedMatrix;
use crate::primitives::errors::MaskfillError;

// ============================================================================
// CurveFitter Trait
// ============================================================================

/// Capability to fit a curve through samples and evaluate it elsewhere.
pub trait CurveFitter<T: Float> {
    /// Fitted curve representation.
    type Curve;

    /// Fit a curve of `degree` through `(positions[i], values[i])`.
    fn fit(
        &self,
        positions: &[usize],
        values: &[T],
        degree: usize,
    ) -> Result<Self::Curve, MaskfillError>;

    /// Evaluate `curve` at each of `positions`.
    fn evaluate(&self, curve: &Self::Curve, positions: &[usize]) -> Vec<T>;
}

// ============================================================================
// Fitted Spline
// ============================================================================

/// A B-spline in knot/coefficient form.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedSpline<T> {
    /// Clamped knot vector.
    pub knots: Vec<T>,

    /// One coefficient per sample.
    pub coefficients: Vec<T>,

    /// Polynomial degree of each piece.
    pub degree: usize,
}

impl<T: Float> FittedSpline<T> {
    /// Evaluate the spline at `x`.
    #[inline]
    pub fn value_at(&self, x: T) -> T {
        bspline::evaluate(&self.knots, &self.coefficients, self.degree, x)
    }
}

// ============================================================================
// Spline Fitter
// ============================================================================

/// Default fitting engine: interpolating B-spline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplineFitter;

impl SplineFitter {
    fn validate<T: Float>(
        positions: &[usize],
        values: &[T],
        degree: usize,
    ) -> Result<(), MaskfillError> {
        if positions.len() != values.len() {
            return Err(MaskfillError::MismatchedInputs {
                data_len: values.len(),
                mask_len: positions.len(),
            });
        }
        if degree == 0 {
            return Err(MaskfillError::InvalidDegree(degree));
        }
        if positions.len() < degree + 1 {
            return Err(MaskfillError::TooFewPoints {
                got: positions.len(),
                min: degree + 1,
            });
        }
        if let Some(i) = positions.windows(2).position(|w| w[0] >= w[1]) {
            return Err(MaskfillError::NonIncreasingPositions { index: i + 1 });
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(MaskfillError::InvalidNumericValue(format!(
                "values[{}]={}",
                i,
                values[i].to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }
}

impl<T: Float> CurveFitter<T> for SplineFitter {
    type Curve = FittedSpline<T>;

    fn fit(
        &self,
        positions: &[usize],
        values: &[T],
        degree: usize,
    ) -> Result<FittedSpline<T>, MaskfillError> {
        Self::validate(positions, values, degree)?;

        let x: Vec<T> = positions.iter().map(|&p| to_float(p)).collect();
        let knots = bspline::interpolating_knots(&x, degree);

        // Row i is non-zero only in columns first..=first + degree.
        let rows: Vec<(usize, Vec<T>)> = x
            .iter()
            .map(|&xi| {
                let span = bspline::find_span(&knots, degree, xi);
                let basis = bspline::basis_functions(&knots, degree, span, xi);
                (span - degree, basis)
            })
            .collect();

        let lower = rows
            .iter()
            .enumerate()
            .map(|(i, (first, _))| i.saturating_sub(*first))
            .max()
            .unwrap_or(0);
        let upper = rows
            .iter()
            .enumerate()
            .map(|(i, (first, _))| (first + degree).saturating_sub(i))
            .max()
            .unwrap_or(0);

        let m = x.len();
        let mut collocation = BandedMatrix::zeros(m, lower, upper);
        for (i, (first, basis)) in rows.iter().enumerate() {
            for (r, &b) in basis.iter().enumerate() {
                collocation.set(i, first + r, b);
            }
        }

        let coefficients = collocation
            .solve(values)
            .ok_or(MaskfillError::SingularSystem)?;

        Ok(FittedSpline {
            knots,
            coefficients,
            degree,
        })
    }

    fn evaluate(&self, curve: &FittedSpline<T>, positions: &[usize]) -> Vec<T> {
        positions
            .iter()
            .map(|&p| curve.value_at(to_float(p)))
            .collect()
    }
}

#[inline]
fn to_float<T: Float>(position: usize) -> T {
    T::from(position).unwrap_or_else(T::max_value)
}

//! Tests for the default spline fitter.
//!
//! These tests verify `SplineFitter`, the interpolating B-spline engine:
//! - Interpolation through every sample
//! - Polynomial reproduction for each degree
//! - Input validation and error reporting
//!
//! ## Test Organization
//!
//! 1. **Fitting** - Knots, coefficients and sample reproduction
//! 2. **Validation** - Degree, sample count, ordering, finiteness

use approx::assert_relative_eq;

use maskfill::prelude::*;

// ============================================================================
// Fitting Tests
// ============================================================================

/// Test that the fitted curve passes through every sample.
#[test]
fn test_spline_interpolates_samples() {
    let positions = [0usize, 1, 3, 4, 6, 9, 10];
    let values = [1.0f64, -2.0, 0.5, 3.0, 2.0, -1.0, 4.0];

    for degree in [1, 2, 3, 5] {
        let curve = SplineFitter.fit(&positions, &values, degree).unwrap();
        let at_samples = SplineFitter.evaluate(&curve, &positions);

        for (got, expected) in at_samples.iter().zip(values.iter()) {
            assert_relative_eq!(*got, *expected, epsilon = 1e-9);
        }
    }
}

/// Test knot vector length and clamping.
#[test]
fn test_spline_knot_vector_shape() {
    let positions = [0usize, 2, 3, 5, 8, 9];
    let values = [0.0f64; 6];
    let curve = SplineFitter.fit(&positions, &values, 3).unwrap();

    assert_eq!(curve.knots.len(), positions.len() + 3 + 1);
    assert_eq!(curve.coefficients.len(), positions.len());
    assert_eq!(&curve.knots[..4], &[0.0; 4]);
    assert_eq!(&curve.knots[curve.knots.len() - 4..], &[9.0; 4]);
    // Odd degree: interior knots at x[2..m-2]
    assert_eq!(&curve.knots[4..6], &[3.0, 5.0]);
}

/// Test midpoint interior knots for even degree.
#[test]
fn test_spline_even_degree_knots() {
    let positions = [0usize, 2, 4, 6, 8];
    let values = [1.0f64; 5];
    let curve = SplineFitter.fit(&positions, &values, 2).unwrap();

    assert_eq!(&curve.knots[3..5], &[3.0, 5.0]);
}

/// Test that a linear spline is piecewise linear between samples.
#[test]
fn test_linear_spline_piecewise() {
    let curve = SplineFitter.fit(&[0usize, 4, 6], &[0.0f64, 8.0, 2.0], 1).unwrap();
    let out = SplineFitter.evaluate(&curve, &[1, 2, 3, 5]);

    assert_relative_eq!(out[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(out[1], 4.0, epsilon = 1e-12);
    assert_relative_eq!(out[2], 6.0, epsilon = 1e-12);
    assert_relative_eq!(out[3], 5.0, epsilon = 1e-12);
}

/// Test that a cubic through exactly four samples is the unique cubic.
#[test]
fn test_cubic_minimum_samples() {
    let f = |x: f64| x * x * x - x;
    let positions = [0usize, 1, 3, 5];
    let values: Vec<f64> = positions.iter().map(|&p| f(p as f64)).collect();

    let curve = SplineFitter.fit(&positions, &values, 3).unwrap();
    let out = SplineFitter.evaluate(&curve, &[2, 4]);

    assert_relative_eq!(out[0], f(2.0), epsilon = 1e-9);
    assert_relative_eq!(out[1], f(4.0), epsilon = 1e-9);
}

/// Test the fitter with `f32` values.
#[test]
fn test_spline_f32() {
    let curve = SplineFitter.fit(&[0usize, 2], &[1.0f32, 3.0], 1).unwrap();
    let out = SplineFitter.evaluate(&curve, &[1]);

    assert_relative_eq!(out[0], 2.0f32, epsilon = 1e-6);
}

/// Test fitting a long, unevenly spaced sample set.
#[test]
fn test_spline_long_uneven_samples() {
    let positions: Vec<usize> = (0..40_000).map(|i| i * 3 + i % 2).collect();
    let values: Vec<f64> = positions.iter().map(|&p| (p as f64 / 30.0).cos()).collect();

    for degree in [1, 3, 5] {
        let curve = SplineFitter.fit(&positions, &values, degree).unwrap();
        assert_eq!(curve.coefficients.len(), positions.len());

        let checked: Vec<usize> = positions.iter().step_by(997).copied().collect();
        let at_samples = SplineFitter.evaluate(&curve, &checked);
        for (&p, got) in checked.iter().zip(at_samples.iter()) {
            assert_relative_eq!(*got, (p as f64 / 30.0).cos(), epsilon = 1e-9);
        }
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that too few samples are rejected.
#[test]
fn test_spline_too_few_points() {
    let err = SplineFitter.fit(&[0usize, 1, 2], &[1.0f64, 2.0, 3.0], 3).unwrap_err();

    assert_eq!(err, MaskfillError::TooFewPoints { got: 3, min: 4 });
}

/// Test that degree zero is rejected.
#[test]
fn test_spline_invalid_degree() {
    let err = SplineFitter.fit(&[0usize, 1], &[1.0f64, 2.0], 0).unwrap_err();

    assert_eq!(err, MaskfillError::InvalidDegree(0));
}

/// Test that unordered or duplicate positions are rejected.
#[test]
fn test_spline_non_increasing_positions() {
    let err = SplineFitter.fit(&[0usize, 2, 2, 3], &[1.0f64, 2.0, 3.0, 4.0], 1).unwrap_err();
    assert_eq!(err, MaskfillError::NonIncreasingPositions { index: 2 });

    let err = SplineFitter.fit(&[3usize, 1], &[1.0f64, 2.0], 1).unwrap_err();
    assert_eq!(err, MaskfillError::NonIncreasingPositions { index: 1 });
}

/// Test that mismatched positions and values are rejected.
#[test]
fn test_spline_mismatched_lengths() {
    let err = SplineFitter.fit(&[0usize, 1, 2], &[1.0f64, 2.0], 1).unwrap_err();

    assert_eq!(
        err,
        MaskfillError::MismatchedInputs {
            data_len: 2,
            mask_len: 3
        }
    );
}

/// Test that infinite values are rejected.
#[test]
fn test_spline_infinite_value() {
    let err = SplineFitter
        .fit(&[0usize, 1], &[1.0f64, f64::INFINITY], 1)
        .unwrap_err();

    assert!(matches!(err, MaskfillError::InvalidNumericValue(_)));
    assert!(err.is_fitting_error());
}

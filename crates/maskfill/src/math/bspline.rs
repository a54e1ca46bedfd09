//! B-spline knot placement and basis evaluation.
//!
//! ## Purpose
//!
//! This module provides the B-spline building blocks used by the spline
//! fitter: the knot vector of an interpolating spline, span lookup, and
//! evaluation of the non-zero basis functions at a point.
//!
//! ## Design notes
//!
//! * **Clamped**: The knot vector repeats the first and last sample position
//!   `degree + 1` times.
//! * **Interpolating knots**: Interior knots follow FITPACK's `s = 0` placement:
//!   sample positions for odd degrees, midpoints between samples for even degrees.
//! * **Local support**: At most `degree + 1` basis functions are non-zero at any point.
//!
//! ## Key concepts
//!
//! * **Span**: Index `l` with `t[l] <= x < t[l + 1]`, restricted to `[degree, n_coef - 1]`.
//! * **Cox-de Boor recursion**: Triangular evaluation of the non-zero basis values.
//!
//! ## Invariants
//!
//! * For `m` samples and degree `k`, the knot vector has `m + k + 1` entries
//!   and the spline has `m` coefficients.
//! * Non-zero basis values at any point inside the knot span sum to one.
//!
//! ## Non-goals
//!
//! * This module does not solve for spline coefficients.
//! * This module does not compute derivatives.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::iter::repeat;
use num_traits::Float;

// ============================================================================
// Knot Vector
// ============================================================================

/// Knot vector for a spline of `degree` interpolating samples at `x`.
///
/// `x` must be strictly increasing with at least `degree + 1` entries.
pub fn interpolating_knots<T: Float>(x: &[T], degree: usize) -> Vec<T> {
    let m = x.len();
    let mut knots = Vec::with_capacity(m + degree + 1);
    knots.extend(repeat(x[0]).take(degree + 1));

    let interior = m - degree - 1;
    let offset = degree / 2 + 1;
    if degree % 2 == 1 {
        knots.extend_from_slice(&x[offset..offset + interior]);
    } else {
        let half = T::from(0.5).unwrap();
        for l in 0..interior {
            knots.push((x[offset + l - 1] + x[offset + l]) * half);
        }
    }

    knots.extend(repeat(x[m - 1]).take(degree + 1));
    knots
}

// ============================================================================
// Basis Evaluation
// ============================================================================

/// Find the knot span containing `x`.
///
/// Points left of the domain map to the first span and points at or right
/// of the domain end map to the last span.
pub fn find_span<T: Float>(knots: &[T], degree: usize, x: T) -> usize {
    let n_coef = knots.len() - degree - 1;
    if x >= knots[n_coef] {
        return n_coef - 1;
    }
    if x <= knots[degree] {
        return degree;
    }

    let mut low = degree;
    let mut high = n_coef;
    let mut mid = (low + high) / 2;
    while x < knots[mid] || x >= knots[mid + 1] {
        if x < knots[mid] {
            high = mid;
        } else {
            low = mid;
        }
        mid = (low + high) / 2;
    }
    mid
}

/// Values of the `degree + 1` basis functions that are non-zero on `span`.
///
/// Entry `r` of the result belongs to coefficient `span - degree + r`.
pub fn basis_functions<T: Float>(knots: &[T], degree: usize, span: usize, x: T) -> Vec<T> {
    let mut n = vec![T::zero(); degree + 1];
    let mut left = vec![T::zero(); degree + 1];
    let mut right = vec![T::zero(); degree + 1];
    n[0] = T::one();

    for j in 1..=degree {
        left[j] = x - knots[span + 1 - j];
        right[j] = knots[span + j] - x;
        let mut saved = T::zero();
        for r in 0..j {
            let temp = n[r] / (right[r + 1] + left[j - r]);
            n[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        n[j] = saved;
    }

    n
}

/// Evaluate the spline with `coefficients` at `x`.
pub fn evaluate<T: Float>(knots: &[T], coefficients: &[T], degree: usize, x: T) -> T {
    let span = find_span(knots, degree, x);
    let basis = basis_functions(knots, degree, span, x);
    basis
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (r, &b)| acc + b * coefficients[span - degree + r])
}

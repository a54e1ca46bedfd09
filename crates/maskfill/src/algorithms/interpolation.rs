//! Spline interpolation of interior missing values.
//!
//! ## Purpose
//!
//! This module fills missing values that lie between the first and last
//! valid positions of a sequence, by fitting a curve of the selected degree
//! through every valid sample and evaluating it at the missing positions.
//!
//! ## Design notes
//!
//! * **Closed modes**: Interpolation kinds form a closed enum, parsed
//!   case-insensitively from strings; unknown names are rejected at parse time.
//! * **Delegation**: `Constant` is an unbounded forward fill.
//! * **Injected fitter**: The curve is produced by any `CurveFitter<f64>`.
//! * **Casting**: Samples are fitted in `f64` and estimates are cast back to
//!   the element type; integer sequences truncate toward zero.
//!
//! ## Key concepts
//!
//! * **Interior missing set**: Missing positions strictly between the edges.
//! * **No extrapolation**: Leading and trailing missing values stay missing.
//!
//! ## Invariants
//!
//! * Valid positions are never modified.
//! * Fewer than two valid samples leaves the sequence unchanged.
//!
//! ## Non-goals
//!
//! * This module does not validate sample counts beyond the two-sample minimum;
//!   fitting errors come from the fitter unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use num_traits::{NumCast, ToPrimitive};

// Internal dependencies
use crate::algorithms::fill::forward_fill;
use crate::algorithms::spline::CurveFitter;
use crate::primitives::errors::MaskfillError;
use crate::primitives::sequence::MaskedSequence;

// ============================================================================
// Interpolation Kind
// ============================================================================

/// Interpolation mode for interior missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationKind {
    /// Hold the last valid value (unbounded forward fill).
    Constant,

    /// Piecewise linear (degree 1 spline).
    #[default]
    Linear,

    /// Cubic spline (degree 3).
    Cubic,

    /// Quintic spline (degree 5).
    Quintic,
}

impl InterpolationKind {
    /// Spline degree, or `None` for `Constant`.
    pub fn degree(self) -> Option<usize> {
        match self {
            Self::Constant => None,
            Self::Linear => Some(1),
            Self::Cubic => Some(3),
            Self::Quintic => Some(5),
        }
    }

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Linear => "linear",
            Self::Cubic => "cubic",
            Self::Quintic => "quintic",
        }
    }
}

impl FromStr for InterpolationKind {
    type Err = MaskfillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kinds = [Self::Constant, Self::Linear, Self::Cubic, Self::Quintic];
        kinds
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MaskfillError::UnsupportedKind(s.to_string()))
    }
}

impl Display for InterpolationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Interpolation
// ============================================================================

/// Interpolate interior missing values of `seq` with `fitter`.
pub fn interpolate_masked<T, F>(
    seq: &MaskedSequence<T>,
    kind: InterpolationKind,
    fitter: &F,
) -> Result<MaskedSequence<T>, MaskfillError>
where
    T: Copy + NumCast,
    F: CurveFitter<f64>,
{
    let mut out = seq.clone();
    if !out.has_missing() {
        return Ok(out);
    }

    let valid = out.valid_indices();
    if valid.len() < 2 {
        log::debug!("{} valid samples, nothing to interpolate", valid.len());
        return Ok(out);
    }

    let degree = match kind.degree() {
        Some(degree) => degree,
        None => return Ok(forward_fill(&out, None)),
    };

    let (first_valid, last_valid) = match out.edges() {
        Some(edges) => edges,
        None => return Ok(out),
    };

    let values = valid
        .iter()
        .map(|&i| sample_to_f64(out.data()[i], i))
        .collect::<Result<Vec<f64>, _>>()?;
    let curve = fitter.fit(&valid, &values, degree)?;

    let interior: Vec<usize> = out
        .missing_indices()
        .into_iter()
        .filter(|&i| i > first_valid && i < last_valid)
        .collect();
    log::debug!(
        "{} interpolation (degree {}) of {} interior positions from {} samples",
        kind,
        degree,
        interior.len(),
        valid.len()
    );

    let estimates = fitter.evaluate(&curve, &interior);
    for (&i, &estimate) in interior.iter().zip(estimates.iter()) {
        let value = <T as NumCast>::from(estimate).ok_or_else(|| {
            MaskfillError::InvalidNumericValue(format!(
                "estimate {estimate} at index {i} does not fit the element type"
            ))
        })?;
        out.set_valid(i, value);
    }

    Ok(out)
}

#[inline]
fn sample_to_f64<T: ToPrimitive>(value: T, index: usize) -> Result<f64, MaskfillError> {
    value.to_f64().ok_or_else(|| {
        MaskfillError::InvalidNumericValue(format!(
            "value at index {index} is not representable as f64"
        ))
    })
}

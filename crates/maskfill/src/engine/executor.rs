//! Execution engine for fill operations.
//!
//! ## Purpose
//!
//! This module dispatches a configured fill method (forward fill, backward
//! fill, or spline interpolation) over a masked sequence and assembles the
//! result.
//!
//! ## Design notes
//!
//! * Dispatch over a closed `FillMethod` enum.
//! * The curve fitter is a type parameter; only spline methods call it.
//! * Generic over `Copy + NumCast` element types (floats and integers).
//!
//! ## Invariants
//!
//! * The input sequence is never mutated.
//! * Valid positions of the input are valid, with the same value, in the output.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not convert foreign inputs (handled by `MaskedInput`).

// External dependencies
use num_traits::NumCast;

// Internal dependencies
use crate::algorithms::fill::{backward_fill, forward_fill};
use crate::algorithms::interpolation::{interpolate_masked, InterpolationKind};
use crate::algorithms::spline::CurveFitter;
use crate::engine::output::FillResult;
use crate::primitives::errors::MaskfillError;
use crate::primitives::sequence::MaskedSequence;

// ============================================================================
// Fill Method
// ============================================================================

/// How missing values are replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMethod {
    /// Propagate the last valid value forward (default).
    #[default]
    ForwardFill,

    /// Propagate the next valid value backward.
    BackwardFill,

    /// Fit a curve through valid samples and fill interior gaps.
    Spline(InterpolationKind),
}

impl FillMethod {
    /// Human-readable method name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ForwardFill => "ForwardFill",
            Self::BackwardFill => "BackwardFill",
            Self::Spline(_) => "Spline",
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs a fill method with a fixed configuration.
#[derive(Debug, Clone)]
pub struct FillExecutor<F> {
    /// Fill method.
    pub method: FillMethod,

    /// Maximum run length filled by the fill methods.
    pub max_gap: Option<usize>,

    /// Curve fitter for spline methods.
    pub fitter: F,
}

impl<F> FillExecutor<F> {
    /// Create an executor.
    pub fn new(method: FillMethod, max_gap: Option<usize>, fitter: F) -> Self {
        Self {
            method,
            max_gap,
            fitter,
        }
    }

    /// Fill `seq`, returning only the filled sequence.
    pub fn run<T>(&self, seq: &MaskedSequence<T>) -> Result<MaskedSequence<T>, MaskfillError>
    where
        T: Copy + NumCast,
        F: CurveFitter<f64>,
    {
        match self.method {
            FillMethod::ForwardFill => Ok(forward_fill(seq, self.max_gap)),
            FillMethod::BackwardFill => Ok(backward_fill(seq, self.max_gap)),
            FillMethod::Spline(kind) => interpolate_masked(seq, kind, &self.fitter),
        }
    }

    /// Fill `seq` and record what changed.
    pub fn run_with_summary<T>(
        &self,
        seq: &MaskedSequence<T>,
    ) -> Result<FillResult<T>, MaskfillError>
    where
        T: Copy + NumCast,
        F: CurveFitter<f64>,
    {
        let sequence = self.run(seq)?;
        let filled_indices = seq
            .missing_indices()
            .into_iter()
            .filter(|&i| !sequence.is_missing(i))
            .collect();

        Ok(FillResult {
            sequence,
            method: self.method,
            max_gap: self.max_gap,
            filled_indices,
        })
    }
}

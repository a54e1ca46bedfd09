//! High-level API for filling masked sequences.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: one-shot functions
//! (`forward_fill`, `backward_fill`, `interpolate`) and a fluent builder for
//! reusable, validated fill configurations.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic inputs**: Every entry point accepts any `MaskedInput`.
//! * **Validated**: Configuration is validated when `.build()` is called.
//! * **Type-Safe**: Generic over the element type (floats or integers).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MaskFillBuilder`] via `MaskFill::new()`.
//! 2. Chain configuration methods (`.method()`, `.max_gap()`).
//! 3. Call `.build()` (default spline fitter) or `.build_with_fitter(fitter)`.

// External dependencies
use num_traits::NumCast;

// Internal dependencies
use crate::algorithms::fill;
use crate::algorithms::interpolation::interpolate_masked;
use crate::engine::executor::FillExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::interpolation::InterpolationKind;
pub use crate::algorithms::spline::{CurveFitter, FittedSpline, SplineFitter};
pub use crate::engine::executor::FillMethod;
pub use crate::engine::output::FillResult;
pub use crate::primitives::errors::MaskfillError;
pub use crate::primitives::input::MaskedInput;
pub use crate::primitives::sequence::MaskedSequence;

// ============================================================================
// One-shot Functions
// ============================================================================

/// Forward fill missing values in runs of at most `max_gap` (all runs if `None`).
///
/// Position 0 is never filled, as it has no predecessor.
pub fn forward_fill<T, I>(
    input: &I,
    max_gap: Option<usize>,
) -> Result<MaskedSequence<T>, MaskfillError>
where
    T: Copy,
    I: MaskedInput<T> + ?Sized,
{
    let seq = input.to_masked_sequence()?;
    Ok(fill::forward_fill(&seq, max_gap))
}

/// Backward fill missing values in runs of at most `max_gap` (all runs if `None`).
///
/// The last position is never filled, as it has no successor.
pub fn backward_fill<T, I>(
    input: &I,
    max_gap: Option<usize>,
) -> Result<MaskedSequence<T>, MaskfillError>
where
    T: Copy,
    I: MaskedInput<T> + ?Sized,
{
    let seq = input.to_masked_sequence()?;
    Ok(fill::backward_fill(&seq, max_gap))
}

/// Interpolate interior missing values with the default spline fitter.
///
/// Samples are fitted in `f64`; estimates are cast back to `T`, truncating
/// toward zero for integer element types.
pub fn interpolate<T, I>(
    input: &I,
    kind: InterpolationKind,
) -> Result<MaskedSequence<T>, MaskfillError>
where
    T: Copy + NumCast,
    I: MaskedInput<T> + ?Sized,
{
    interpolate_with(input, kind, &SplineFitter)
}

/// Interpolate interior missing values with a caller-provided fitter.
pub fn interpolate_with<T, I, F>(
    input: &I,
    kind: InterpolationKind,
    fitter: &F,
) -> Result<MaskedSequence<T>, MaskfillError>
where
    T: Copy + NumCast,
    I: MaskedInput<T> + ?Sized,
    F: CurveFitter<f64>,
{
    let seq = input.to_masked_sequence()?;
    interpolate_masked(&seq, kind, fitter)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for fill configurations.
#[derive(Debug, Clone, Default)]
pub struct MaskFillBuilder {
    /// Fill method (default: ForwardFill).
    pub method: Option<FillMethod>,

    /// Maximum run length filled (fill methods only).
    pub max_gap: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl MaskFillBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill method.
    pub fn method(mut self, method: FillMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the maximum gap: longer runs of missing values are left missing.
    pub fn max_gap(mut self, max_gap: usize) -> Self {
        if self.max_gap.is_some() {
            self.duplicate_param = Some("max_gap");
        }
        self.max_gap = Some(max_gap);
        self
    }

    /// Build with the default spline fitter.
    pub fn build(self) -> Result<MaskFiller<SplineFitter>, MaskfillError> {
        self.build_with_fitter(SplineFitter)
    }

    /// Build with a caller-provided curve fitter.
    pub fn build_with_fitter<F>(self, fitter: F) -> Result<MaskFiller<F>, MaskfillError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let method = self.method.unwrap_or_default();
        Validator::validate_max_gap(method, self.max_gap)?;

        Ok(MaskFiller {
            executor: FillExecutor::new(method, self.max_gap, fitter),
        })
    }
}

// ============================================================================
// Filler
// ============================================================================

/// A validated, reusable fill configuration.
#[derive(Debug, Clone)]
pub struct MaskFiller<F = SplineFitter> {
    executor: FillExecutor<F>,
}

impl<F> MaskFiller<F> {
    /// Configured fill method.
    pub fn method(&self) -> FillMethod {
        self.executor.method
    }

    /// Configured maximum gap.
    pub fn max_gap(&self) -> Option<usize> {
        self.executor.max_gap
    }

    /// Fill `input`, returning a new sequence.
    pub fn apply<T, I>(&self, input: &I) -> Result<MaskedSequence<T>, MaskfillError>
    where
        T: Copy + NumCast,
        I: MaskedInput<T> + ?Sized,
        F: CurveFitter<f64>,
    {
        let seq = input.to_masked_sequence()?;
        self.executor.run(&seq)
    }

    /// Fill `input` and report which positions were filled.
    pub fn apply_with_summary<T, I>(&self, input: &I) -> Result<FillResult<T>, MaskfillError>
    where
        T: Copy + NumCast,
        I: MaskedInput<T> + ?Sized,
        F: CurveFitter<f64>,
    {
        let seq = input.to_masked_sequence()?;
        self.executor.run_with_summary(&seq)
    }
}

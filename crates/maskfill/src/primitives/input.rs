//! Input abstractions for masked-sequence routines.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for fill and interpolation
//! inputs, allowing every entry point to accept several data formats
//! (`MaskedSequence`, option slices, slice pairs, ndarray arrays) through a
//! single interface.
//!
//! ## Design notes
//!
//! * **Copying**: Every conversion yields a fresh `MaskedSequence`; callers' data is never mutated.
//! * **Interoperability**: Bridges standard Rust collections with `ndarray`.
//! * **Fail-fast validation**: Arrays with more than one dimension are rejected
//!   before any processing.
//!
//! ## Key concepts
//!
//! * **MaskedInput Trait**: The core abstraction converting an input into a `MaskedSequence`.
//! * **Dimensionality**: Only 0-d and 1-d arrays are accepted.
//! * **Element types**: Any `Copy` type. Bare arrays must hold floats, since
//!   NaN marks their missing values; integer arrays need an explicit mask.
//!
//! ## Non-goals
//!
//! * This module does not perform filling or interpolation.
//! * This module does not reshape or flatten multi-dimensional data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use ndarray::{ArrayBase, Data, Dimension};
use num_traits::{Float, Zero};

// Internal dependencies
use crate::primitives::errors::MaskfillError;
use crate::primitives::sequence::MaskedSequence;

/// Trait for types that can be used as input for fill and interpolation.
pub trait MaskedInput<T> {
    /// Convert the input to an owned masked sequence.
    fn to_masked_sequence(&self) -> Result<MaskedSequence<T>, MaskfillError>;
}

impl<T: Copy> MaskedInput<T> for MaskedSequence<T> {
    fn to_masked_sequence(&self) -> Result<MaskedSequence<T>, MaskfillError> {
        Ok(self.clone())
    }
}

impl<T: Copy + Zero> MaskedInput<T> for [Option<T>] {
    fn to_masked_sequence(&self) -> Result<MaskedSequence<T>, MaskfillError> {
        Ok(MaskedSequence::from_options(self))
    }
}

impl<T: Copy + Zero> MaskedInput<T> for Vec<Option<T>> {
    fn to_masked_sequence(&self) -> Result<MaskedSequence<T>, MaskfillError> {
        Ok(MaskedSequence::from_options(self))
    }
}

impl<T: Copy> MaskedInput<T> for (&[T], &[bool]) {
    fn to_masked_sequence(&self) -> Result<MaskedSequence<T>, MaskfillError> {
        MaskedSequence::new(self.0.to_vec(), self.1.to_vec())
    }
}

/// Data array paired with a mask array of the same shape.
impl<T, S, M, D> MaskedInput<T> for (ArrayBase<S, D>, ArrayBase<M, D>)
where
    T: Copy,
    S: Data<Elem = T>,
    M: Data<Elem = bool>,
    D: Dimension,
{
    fn to_masked_sequence(&self) -> Result<MaskedSequence<T>, MaskfillError> {
        let (data, mask) = self;
        ensure_1d(data.ndim())?;
        ensure_1d(mask.ndim())?;
        MaskedSequence::new(data.iter().copied().collect(), mask.iter().copied().collect())
    }
}

/// Bare float array; non-finite values are treated as missing.
impl<T, S, D> MaskedInput<T> for ArrayBase<S, D>
where
    T: Float,
    S: Data<Elem = T>,
    D: Dimension,
{
    fn to_masked_sequence(&self) -> Result<MaskedSequence<T>, MaskfillError> {
        ensure_1d(self.ndim())?;
        Ok(MaskedSequence::masked_invalid(self.iter().copied().collect()))
    }
}

#[inline]
fn ensure_1d(ndim: usize) -> Result<(), MaskfillError> {
    if ndim > 1 {
        return Err(MaskfillError::DimensionMismatch { ndim });
    }
    Ok(())
}

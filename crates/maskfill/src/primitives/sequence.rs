//! Masked sequence container.
//!
//! ## Purpose
//!
//! This module provides `MaskedSequence`, a fixed-length sequence of numeric
//! values paired with a parallel boolean mask that flags missing positions.
//! Every fill and interpolation routine consumes and produces this type.
//!
//! ## Design notes
//!
//! * **Owned**: Data and mask are owned `Vec`s; routines work on a private copy.
//! * **Paired**: Data and mask always have equal length (checked on construction).
//! * **Generics**: Any `Copy` element type; floats and integers alike.
//! * **Masked equality**: Two sequences are equal when their masks match and
//!   their valid values match. Values hidden by the mask are ignored.
//!
//! ## Key concepts
//!
//! * **Missing**: A position whose mask flag is `true`.
//! * **Valid**: A position whose mask flag is `false`.
//! * **Edges**: The first and last valid positions of the sequence.
//!
//! ## Invariants
//!
//! * `data.len() == mask.len()`.
//! * Index lists returned by this module are strictly ascending.
//!
//! ## Non-goals
//!
//! * This module does not fill or interpolate missing values.
//! * This module does not model multi-dimensional arrays.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::Range;
use num_traits::{Float, Zero};

// Internal dependencies
use crate::primitives::errors::MaskfillError;

// ============================================================================
// Masked Sequence
// ============================================================================

/// A one-dimensional sequence with a parallel "missing" mask.
#[derive(Debug, Clone)]
pub struct MaskedSequence<T> {
    data: Vec<T>,
    mask: Vec<bool>,
}

impl<T: Copy> MaskedSequence<T> {
    /// Pair `data` with `mask` (`true` marks a missing value).
    pub fn new(data: Vec<T>, mask: Vec<bool>) -> Result<Self, MaskfillError> {
        if data.len() != mask.len() {
            return Err(MaskfillError::MismatchedInputs {
                data_len: data.len(),
                mask_len: mask.len(),
            });
        }
        Ok(Self { data, mask })
    }

    /// Sequence with no missing values.
    pub fn unmasked(data: Vec<T>) -> Self {
        let mask = vec![false; data.len()];
        Self { data, mask }
    }

    /// Build from optional values; `None` becomes a missing position.
    ///
    /// Missing positions hold `T::zero()` as their underlying value.
    pub fn from_options(values: &[Option<T>]) -> Self
    where
        T: Zero,
    {
        let data = values.iter().map(|v| v.unwrap_or_else(T::zero)).collect();
        let mask = values.iter().map(Option::is_none).collect();
        Self { data, mask }
    }

    /// Mask every non-finite value (NaN or infinite).
    pub fn masked_invalid(data: Vec<T>) -> Self
    where
        T: Float,
    {
        let mask = data.iter().map(|v| !v.is_finite()).collect();
        Self { data, mask }
    }

    /// Underlying values, including the ones hidden by the mask.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Missing flags.
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Split into `(data, mask)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<bool>) {
        (self.data, self.mask)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the sequence has no positions.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of missing positions.
    pub fn count_missing(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Whether any position is missing.
    pub fn has_missing(&self) -> bool {
        self.mask.iter().any(|&m| m)
    }

    /// Whether position `i` is missing. Out-of-range positions count as missing.
    pub fn is_missing(&self, i: usize) -> bool {
        self.mask.get(i).copied().unwrap_or(true)
    }

    /// Value at `i`, or `None` if it is missing or out of range.
    pub fn get(&self, i: usize) -> Option<T> {
        if self.is_missing(i) {
            None
        } else {
            Some(self.data[i])
        }
    }

    /// Values as options, `None` where missing.
    pub fn to_options(&self) -> Vec<Option<T>> {
        self.data
            .iter()
            .zip(self.mask.iter())
            .map(|(&v, &m)| if m { None } else { Some(v) })
            .collect()
    }

    /// Values with every missing position replaced by `fill_value`.
    pub fn filled(&self, fill_value: T) -> Vec<T> {
        self.data
            .iter()
            .zip(self.mask.iter())
            .map(|(&v, &m)| if m { fill_value } else { v })
            .collect()
    }

    /// Ascending indices of valid positions.
    pub fn valid_indices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| (!m).then_some(i))
            .collect()
    }

    /// Ascending indices of missing positions.
    pub fn missing_indices(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
            .collect()
    }

    /// First and last valid index, or `None` if every position is missing.
    pub fn edges(&self) -> Option<(usize, usize)> {
        let first = self.mask.iter().position(|&m| !m)?;
        let last = self.mask.iter().rposition(|&m| !m)?;
        Some((first, last))
    }

    /// Reversed copy.
    pub fn reversed(&self) -> Self {
        Self {
            data: self.data.iter().rev().copied().collect(),
            mask: self.mask.iter().rev().copied().collect(),
        }
    }

    // ========================================================================
    // In-place updates (crate-internal; public routines work on copies)
    // ========================================================================

    /// Store `value` at `i` and mark it valid.
    #[inline]
    pub(crate) fn set_valid(&mut self, i: usize, value: T) {
        self.data[i] = value;
        self.mask[i] = false;
    }

    /// Copy data and mask in `range` back from `original`.
    #[inline]
    pub(crate) fn restore_range(&mut self, original: &Self, range: Range<usize>) {
        self.data[range.clone()].copy_from_slice(&original.data[range.clone()]);
        self.mask[range.clone()].copy_from_slice(&original.mask[range]);
    }
}

// ============================================================================
// Equality
// ============================================================================

impl<T: PartialEq> PartialEq for MaskedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .zip(self.mask.iter())
                .all(|((a, b), &missing)| missing || a == b)
    }
}

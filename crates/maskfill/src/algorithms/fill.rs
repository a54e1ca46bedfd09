//! Gap-bounded forward and backward fill.
//!
//! ## Purpose
//!
//! This module replaces missing values with the nearest preceding (forward)
//! or following (backward) valid value, optionally leaving runs of
//! consecutive missing values untouched when they are longer than a
//! maximum gap.
//!
//! ## Design notes
//!
//! * **Single pass**: Only missing indices are visited, in ascending order.
//! * **Deferred revert**: Fills in a run are applied optimistically and undone
//!   once the run is found to exceed the bound, at position `max_gap + 1`.
//!   Undoing restores both the mask and the hidden values of the input.
//! * **Mirroring**: Backward fill is forward fill on the reversed sequence.
//!
//! ## Key concepts
//!
//! * **Run**: Maximal span of consecutive missing positions.
//! * **Current gap**: Length of the run ending at the visited position.
//!
//! ## Invariants
//!
//! * Position 0 has no predecessor and is never forward filled.
//! * A run of length `g` bounded by valid values is filled iff `g <= max_gap`.
//! * The input sequence is never mutated.
//!
//! ## Non-goals
//!
//! * This module does not interpolate between neighbours.
//! * This module does not validate input dimensionality.

// Internal dependencies
use crate::primitives::sequence::MaskedSequence;

// ============================================================================
// Forward Fill
// ============================================================================

/// Forward fill missing values in runs no longer than `max_gap`.
///
/// `None` fills every missing value that has a valid value before it.
pub fn forward_fill<T: Copy>(seq: &MaskedSequence<T>, max_gap: Option<usize>) -> MaskedSequence<T> {
    let mut out = seq.clone();
    if out.is_empty() || !out.has_missing() {
        return out;
    }

    let mut current_gap = 0usize;
    let mut previous_missing: Option<usize> = None;

    for i in seq.missing_indices() {
        if previous_missing.map_or(true, |p| p + 1 != i) {
            current_gap = 0;
        }
        previous_missing = Some(i);
        current_gap += 1;

        // Index 0 has no predecessor.
        if i == 0 {
            continue;
        }

        let within_bound = max_gap.map_or(true, |gap| current_gap <= gap);
        if within_bound && !out.is_missing(i - 1) {
            let value = out.data()[i - 1];
            out.set_valid(i, value);
        } else if let Some(gap) = max_gap {
            if current_gap == gap + 1 {
                log::trace!("run at index {} exceeds max_gap {}, reverting", i - gap, gap);
                out.restore_range(seq, i - gap..i);
            }
        }
    }

    out
}

// ============================================================================
// Backward Fill
// ============================================================================

/// Backward fill missing values in runs no longer than `max_gap`.
pub fn backward_fill<T: Copy>(
    seq: &MaskedSequence<T>,
    max_gap: Option<usize>,
) -> MaskedSequence<T> {
    forward_fill(&seq.reversed(), max_gap).reversed()
}

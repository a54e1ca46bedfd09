//! Output types for fill operations.
//!
//! ## Purpose
//!
//! This module defines `FillResult`, which pairs a filled sequence with a
//! record of which positions were filled and how.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Implements `Display` for a human-readable summary table.
//! * **Generics**: Results are generic over the sequence element type.
//!
//! ## Invariants
//!
//! * `filled_indices` is ascending and every entry is valid in `sequence`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::engine::executor::FillMethod;
use crate::primitives::sequence::MaskedSequence;

// ============================================================================
// Result Structure
// ============================================================================

/// Filled sequence plus a record of the filled positions.
#[derive(Debug, Clone, PartialEq)]
pub struct FillResult<T> {
    /// Output sequence.
    pub sequence: MaskedSequence<T>,

    /// Method that produced the output.
    pub method: FillMethod,

    /// Maximum gap in effect, if any.
    pub max_gap: Option<usize>,

    /// Positions that were missing in the input and are valid in the output.
    pub filled_indices: Vec<usize>,
}

impl<T: Copy> FillResult<T> {
    /// Number of positions filled.
    pub fn filled_count(&self) -> usize {
        self.filled_indices.len()
    }

    /// Number of positions still missing.
    pub fn remaining_missing(&self) -> usize {
        self.sequence.count_missing()
    }

    /// Whether position `i` was filled by this operation.
    pub fn was_filled(&self, i: usize) -> bool {
        self.filled_indices.binary_search(&i).is_ok()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Copy + Display> Display for FillResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.sequence.len())?;
        match self.method {
            FillMethod::Spline(kind) => writeln!(f, "  Method:      Spline ({kind})")?,
            method => writeln!(f, "  Method:      {}", method.name())?,
        }
        if let Some(gap) = self.max_gap {
            writeln!(f, "  Max gap:     {gap}")?;
        }
        writeln!(f, "  Filled:      {}", self.filled_count())?;
        writeln!(f, "  Missing:     {}", self.remaining_missing())?;
        writeln!(f)?;

        writeln!(f, "Data:")?;
        writeln!(f, "{:>8} {:>12} {:>8}", "Index", "Value", "Status")?;
        writeln!(f, "  {}", "-".repeat(28))?;
        for (i, value) in self.sequence.to_options().into_iter().enumerate() {
            let status = if self.was_filled(i) { "filled" } else { "" };
            match value {
                Some(v) => writeln!(f, "{:>8} {:>12.5} {:>8}", i, v, status)?,
                None => writeln!(f, "{:>8} {:>12} {:>8}", i, "--", status)?,
            }
        }
        Ok(())
    }
}

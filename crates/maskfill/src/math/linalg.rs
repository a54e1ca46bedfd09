//! Banded linear solve.
//!
//! ## Purpose
//!
//! This module solves the square collocation systems produced by the spline
//! fitter. Each row of a B-spline collocation matrix has at most
//! `degree + 1` non-zero entries clustered around the diagonal, so the
//! system is stored and solved in band form.
//!
//! ## Design notes
//!
//! * **Band storage**: Row-major, `lower + upper + 1` entries per row.
//! * **No pivoting**: Gaussian elimination proceeds in natural order, as in
//!   the Thomas algorithm. Fill-in stays inside the band.
//! * **Linear cost**: `O(n * lower * upper)` time and `O(n * (lower + upper))` memory.
//!
//! ## Key concepts
//!
//! * **Total positivity**: Collocation matrices of interpolating B-splines
//!   are totally positive, so elimination without row exchanges is stable.
//!
//! ## Invariants
//!
//! * Entries outside the band are zero and cannot be written.
//! * A zero pivot or a non-finite solution is reported as `None`.
//!
//! ## Non-goals
//!
//! * This module does not pivot, so it is not a general-purpose solver.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Banded Matrix
// ============================================================================

/// Square matrix with `lower` sub-diagonals and `upper` super-diagonals.
#[derive(Debug, Clone, PartialEq)]
pub struct BandedMatrix<T> {
    n: usize,
    lower: usize,
    upper: usize,
    values: Vec<T>,
}

impl<T: Float> BandedMatrix<T> {
    /// Zero `n x n` matrix with the given bandwidths.
    pub fn zeros(n: usize, lower: usize, upper: usize) -> Self {
        Self {
            n,
            lower,
            upper,
            values: vec![T::zero(); n * (lower + upper + 1)],
        }
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// `(lower, upper)` bandwidths.
    pub fn bandwidths(&self) -> (usize, usize) {
        (self.lower, self.upper)
    }

    /// Entry `(row, col)`; zero outside the band.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.offset(row, col)
            .map_or_else(T::zero, |k| self.values[k])
    }

    /// Set entry `(row, col)`. Returns `false` if it lies outside the band.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.offset(row, col) {
            Some(k) => {
                self.values[k] = value;
                true
            }
            None => false,
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.n || col >= self.n || col + self.lower < row || col > row + self.upper {
            return None;
        }
        Some(row * (self.lower + self.upper + 1) + col + self.lower - row)
    }

    /// Solve `A x = b`, consuming the matrix.
    pub fn solve(mut self, b: &[T]) -> Option<Vec<T>> {
        let n = self.n;
        if b.len() != n {
            return None;
        }
        let mut x = b.to_vec();

        // Forward elimination
        for j in 0..n {
            let pivot = self.get(j, j);
            if pivot == T::zero() || !pivot.is_finite() {
                return None;
            }
            let last_row = (j + self.lower).min(n - 1);
            let last_col = (j + self.upper).min(n - 1);
            for i in j + 1..=last_row {
                let factor = self.get(i, j) / pivot;
                if factor == T::zero() {
                    continue;
                }
                for c in j..=last_col {
                    let value = self.get(i, c) - factor * self.get(j, c);
                    self.set(i, c, value);
                }
                x[i] = x[i] - factor * x[j];
            }
        }

        // Back substitution
        for i in (0..n).rev() {
            let last_col = (i + self.upper).min(n - 1);
            let mut sum = x[i];
            for c in i + 1..=last_col {
                sum = sum - self.get(i, c) * x[c];
            }
            x[i] = sum / self.get(i, i);
        }

        if x.iter().all(|v| v.is_finite()) {
            Some(x)
        } else {
            None
        }
    }
}

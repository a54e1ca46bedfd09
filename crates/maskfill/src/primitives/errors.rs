//! Error types for masked-sequence filling and interpolation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while filling or
//! interpolating a masked sequence, including input shape problems, unknown
//! interpolation modes, curve-fitting failures, and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Propagated**: Fitting errors from the curve fitter surface to the caller unchanged.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Too many dimensions, data/mask length mismatch.
//! 2. **Mode validation**: Interpolation kinds that are not recognized.
//! 3. **Fitting**: Too few samples, bad degree, unordered positions, singular systems.
//! 4. **Configuration**: Duplicate or unsupported builder parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for masked-sequence operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MaskfillError {
    /// Input array has more than one dimension.
    DimensionMismatch {
        /// Number of dimensions of the rejected input.
        ndim: usize,
    },

    /// Interpolation mode string did not match any supported kind.
    UnsupportedKind(String),

    /// Data and mask must have the same number of elements.
    MismatchedInputs {
        /// Number of data values.
        data_len: usize,
        /// Number of mask flags.
        mask_len: usize,
    },

    /// Not enough samples for a fit of the requested degree.
    TooFewPoints {
        /// Number of samples provided.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// Spline degree must be at least 1.
    InvalidDegree(usize),

    /// Sample positions must be strictly increasing.
    NonIncreasingPositions {
        /// Index (into the sample set) of the first out-of-order position.
        index: usize,
    },

    /// Sample values contain NaN or infinite values.
    InvalidNumericValue(String),

    /// The collocation system of the spline fit could not be solved.
    SingularSystem,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Selected fill method does not support the requested parameter.
    UnsupportedFeature {
        /// Name of the fill method (e.g., "Spline").
        method: &'static str,
        /// Name of the unsupported parameter.
        feature: &'static str,
    },
}

impl MaskfillError {
    /// Whether this error was raised by the curve-fitting step.
    pub fn is_fitting_error(&self) -> bool {
        matches!(
            self,
            Self::TooFewPoints { .. }
                | Self::InvalidDegree(_)
                | Self::NonIncreasingPositions { .. }
                | Self::InvalidNumericValue(_)
                | Self::SingularSystem
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MaskfillError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DimensionMismatch { ndim } => {
                write!(f, "Input must be 1-dimensional, got {ndim} dimensions")
            }
            Self::UnsupportedKind(kind) => {
                write!(
                    f,
                    "Unsupported interpolation kind: '{kind}' \
                     (expected constant, linear, cubic or quintic)"
                )
            }
            Self::MismatchedInputs { data_len, mask_len } => {
                write!(
                    f,
                    "Length mismatch: data has {data_len} values, mask has {mask_len}"
                )
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidDegree(degree) => {
                write!(f, "Invalid spline degree: {degree} (must be >= 1)")
            }
            Self::NonIncreasingPositions { index } => {
                write!(
                    f,
                    "Sample positions must be strictly increasing (violated at sample {index})"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::SingularSystem => write!(f, "Spline collocation system is singular"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. \
                     Each parameter can only be configured once."
                )
            }
            Self::UnsupportedFeature { method, feature } => {
                write!(f, "Fill method '{method}' does not support parameter: {feature}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MaskfillError {}

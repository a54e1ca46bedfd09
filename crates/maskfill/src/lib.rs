//! # maskfill — Gap filling and interpolation for masked sequences
//!
//! Utilities for replacing missing (masked) values in one-dimensional,
//! time-indexed numeric data, either by propagating neighbouring values
//! (forward/backward fill, optionally bounded by a maximum gap) or by fitting
//! a spline through the valid observations.
//!
//! ## What is a masked sequence?
//!
//! A [`MaskedSequence`](prelude::MaskedSequence) pairs a vector of values with
//! a parallel vector of booleans, where `true` marks a missing value. Every
//! routine in this crate returns a fresh copy; inputs are never modified.
//!
//! ## Quick Start
//!
//! ### Forward fill with a maximum gap
//!
//! ```rust
//! use maskfill::prelude::*;
//!
//! let seq = MaskedSequence::from_options(&[
//!     Some(1.0), None, None, Some(4.0), None, Some(6.0),
//! ]);
//!
//! // Runs longer than one missing value are left untouched
//! let filled = forward_fill(&seq, Some(1))?;
//!
//! assert_eq!(
//!     filled.to_options(),
//!     vec![Some(1.0), None, None, Some(4.0), Some(4.0), Some(6.0)]
//! );
//! # Result::<(), MaskfillError>::Ok(())
//! ```
//!
//! ### Spline interpolation
//!
//! ```rust
//! use maskfill::prelude::*;
//!
//! let seq = MaskedSequence::from_options(&[Some(1.0), None, Some(3.0)]);
//!
//! let filled = interpolate(&seq, Linear)?;
//! assert_eq!(filled.to_options(), vec![Some(1.0), Some(2.0), Some(3.0)]);
//!
//! // Modes can also be parsed (case-insensitively) from strings
//! let kind: InterpolationKind = "Cubic".parse()?;
//! assert_eq!(kind, Cubic);
//! # Result::<(), MaskfillError>::Ok(())
//! ```
//!
//! Only missing values strictly between the first and last valid values are
//! interpolated; leading and trailing gaps stay missing.
//!
//! ### Reusable configuration
//!
//! ```rust
//! use maskfill::prelude::*;
//!
//! let filler = MaskFill::new()
//!     .method(BackwardFill)   // Fill from the next valid value
//!     .max_gap(2)             // Leave runs longer than 2 missing
//!     .build()?;
//!
//! let seq = MaskedSequence::from_options(&[None, Some(2.0), None, None, None, Some(5.0)]);
//! let result = filler.apply_with_summary(&seq)?;
//!
//! assert_eq!(result.filled_indices, vec![0]);
//! println!("{}", result);
//! # Result::<(), MaskfillError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every entry point returns `Result<_, MaskfillError>`. Errors are raised
//! before any partial result is produced:
//!
//! - **`DimensionMismatch`**: the input array has more than one dimension.
//! - **`UnsupportedKind`**: an interpolation mode string was not recognized.
//! - **Fitting errors** (`TooFewPoints`, `NonIncreasingPositions`, ...): the
//!   curve fitter could not fit the valid samples, e.g. three samples for a
//!   cubic spline.
//!
//! ```rust
//! use maskfill::prelude::*;
//!
//! let seq = MaskedSequence::from_options(&[Some(1.0), None, Some(2.0), Some(4.0)]);
//!
//! match interpolate(&seq, Cubic) {
//!     Ok(filled) => println!("Filled: {:?}", filled.to_options()),
//!     Err(e) => {
//!         assert!(e.is_fitting_error());
//!         eprintln!("Interpolation failed: {}", e);
//!     }
//! }
//! ```
//!
//! ## Element types
//!
//! Fills work on any `Copy` element type. Interpolation fits the valid
//! samples in `f64` and casts the estimates back to the element type, so
//! integer sequences are truncated toward zero:
//!
//! ```rust
//! use maskfill::prelude::*;
//!
//! let seq = MaskedSequence::from_options(&[Some(0i32), None, None, Some(10)]);
//! let filled = interpolate(&seq, Linear)?;
//!
//! assert_eq!(filled.to_options(), vec![Some(0), Some(3), Some(6), Some(10)]);
//! # Result::<(), MaskfillError>::Ok(())
//! ```
//!
//! ## Custom curve fitters
//!
//! The spline step is a [`CurveFitter`](prelude::CurveFitter). The default
//! [`SplineFitter`](prelude::SplineFitter) is an interpolating B-spline; any
//! other engine can be injected with `interpolate_with` or
//! `MaskFill::new().build_with_fitter(..)`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! maskfill = { version = "0.1", default-features = false }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - masked sequences, input conversion, errors.
mod primitives;

// Layer 2: Math - B-spline basis and linear algebra.
mod math;

// Layer 3: Algorithms - fills, curve fitting, interpolation.
mod algorithms;

// Layer 4: Engine - dispatch, validation, output.
mod engine;

// High-level API: one-shot functions and the fluent builder.
mod api;

pub use api::{
    backward_fill, forward_fill, interpolate, interpolate_with, CurveFitter, FillMethod,
    FillResult, FittedSpline, InterpolationKind, MaskFillBuilder, MaskFiller, MaskedInput,
    MaskedSequence, MaskfillError, SplineFitter,
};

// Standard maskfill prelude.
pub mod prelude {
    pub use crate::api::{
        backward_fill, forward_fill, interpolate, interpolate_with, CurveFitter,
        FillMethod::{BackwardFill, ForwardFill, Spline},
        FillResult,
        InterpolationKind,
        InterpolationKind::{Constant, Cubic, Linear, Quintic},
        MaskFillBuilder as MaskFill, MaskFiller, MaskedInput, MaskedSequence, MaskfillError,
        SplineFitter,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

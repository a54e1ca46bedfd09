//! Layer 3: Algorithms
//!
//! This layer implements the core logic for gap-bounded filling, curve
//! fitting, and spline interpolation of masked sequences. It is orchestrated
//! by the engine layer.

// Forward and backward fill with an optional maximum gap.
pub mod fill;

// Curve-fitting capability and the default spline fitter.
pub mod spline;

// Interior interpolation driven by a curve fitter.
pub mod interpolation;

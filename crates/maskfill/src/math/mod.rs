//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the spline fitter:
//! - B-spline knot placement and basis evaluation
//! - Banded linear system solving
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// B-spline knots and basis functions.
pub mod bspline;

/// Banded linear solve.
pub mod linalg;

//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer dispatches configured fill methods to the algorithms layer,
//! validates configuration, and assembles results.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fill method dispatch.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for fill operations.
pub mod output;

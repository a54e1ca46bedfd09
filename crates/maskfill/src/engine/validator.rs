//! Validation of fill configuration.
//!
//! ## Purpose
//!
//! This module checks builder configuration before a filler is constructed:
//! duplicate parameters and parameters the selected method cannot honour.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Validators only inspect their arguments.
//!
//! ## Non-goals
//!
//! * This module does not check input dimensionality (handled by `MaskedInput`).
//! * This module does not check fitting requirements (handled by the fitter).

// Internal dependencies
use crate::engine::executor::FillMethod;
use crate::primitives::errors::MaskfillError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fill configuration.
pub struct Validator;

impl Validator {
    /// Validate that no parameter was configured more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), MaskfillError> {
        if let Some(param) = duplicate_param {
            return Err(MaskfillError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    /// Validate that `max_gap` is only combined with the fill methods.
    ///
    /// Spline interpolation has no notion of a maximum gap.
    pub fn validate_max_gap(
        method: FillMethod,
        max_gap: Option<usize>,
    ) -> Result<(), MaskfillError> {
        if max_gap.is_some() && matches!(method, FillMethod::Spline(_)) {
            return Err(MaskfillError::UnsupportedFeature {
                method: method.name(),
                feature: "max_gap",
            });
        }
        Ok(())
    }
}

//! # Error Types
//!
//! Validation failure types for swagat-core.
//!
//! ## Error Philosophy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Failure Taxonomy                                   │
//! │                                                                         │
//! │  Soft / incomplete pricing input                                        │
//! │  └── NOT an error: compute_price returns the zero breakdown             │
//! │                                                                         │
//! │  Permissive fallbacks (unknown room type, bad room count)               │
//! │  └── NOT an error: silently default to price 0 / count 1                │
//! │                                                                         │
//! │  Field validation failure (this file)                                   │
//! │  └── ValidationError - one variant per rule, Display IS the UI message  │
//! │                                                                         │
//! │  There are NO panics and NO Err returns in the public pricing contract: │
//! │  the form must never hard-fail while the visitor is still editing.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Each variant's message is exactly what the visitor sees next to the field
//! 3. Errors are enum variants, never ad-hoc strings scattered through rules

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field-level validation failure.
///
/// The `Display` output of each variant is the literal message the UI renders
/// under the offending input, so the wording here is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty after trimming.
    #[error("This field is required")]
    Required,

    /// Value does not look like `local@domain.tld`.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Value is not exactly 10 decimal digits once whitespace is stripped.
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,

    /// A date field holds a day strictly before today.
    #[error("Date cannot be in the past")]
    DateInPast,

    /// Check-out date is on or before the companion check-in date.
    #[error("Check-out must be after check-in")]
    CheckOutNotAfterCheckIn,

    /// Value does not match the 15-character GST identification format.
    #[error("Please enter a valid GST number")]
    InvalidGstNumber,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_ui_copy() {
        assert_eq!(
            ValidationError::Required.to_string(),
            "This field is required"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid 10-digit phone number"
        );
        assert_eq!(
            ValidationError::DateInPast.to_string(),
            "Date cannot be in the past"
        );
        assert_eq!(
            ValidationError::CheckOutNotAfterCheckIn.to_string(),
            "Check-out must be after check-in"
        );
        assert_eq!(
            ValidationError::InvalidGstNumber.to_string(),
            "Please enter a valid GST number"
        );
    }
}

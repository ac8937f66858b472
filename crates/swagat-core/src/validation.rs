//! # Validation Module
//!
//! Field-level validation for the booking and contact forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Browser attributes (required, type=date, min=...)             │
//! │  ├── Cheap hints only, trivially bypassed                               │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Per-field classification on blur                                   │
//! │  └── Exhaustive (non-short-circuiting) sweep before submission          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Whatever backend eventually receives the booking              │
//! │                                                                         │
//! │  This module only CLASSIFIES. Marking a field red, focusing it, or      │
//! │  blocking the submit button is the page layer's job, driven by the      │
//! │  ValidationResult it gets back.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rule Precedence (first failure wins)
//! 1. Required         - trimmed-empty check, only when the field is required
//! 2. Kind-specific    - format/date rules, only when the value is non-empty
//!
//! For checkout-style fields the past-date rule runs before the
//! after-check-in rule, matching the order the messages appear on the site.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Format Patterns
// =============================================================================
// Literal patterns shared with the site's previous inline implementation.
// Compiled once on first use; the pattern literals are part of the contract.

/// `local@domain.tld` shape: non-space/non-@ runs around a single `@`, with a
/// dot somewhere in the domain.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Exactly 10 decimal digits (applied after stripping all whitespace).
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// GST identification number: 2-digit state code, 5 letters + 4 digits +
/// 1 letter of the PAN, entity code, literal 'Z', check character.
static GST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z]{1}[1-9A-Z]{1}Z[0-9A-Z]{1}$")
        .expect("gst pattern compiles")
});

// =============================================================================
// Field Descriptor
// =============================================================================

/// What kind of content a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Presence is the only rule (names, subjects, free text).
    Required,
    /// Email address.
    Email,
    /// 10-digit phone number.
    Phone,
    /// A date that must not lie in the past.
    DateNotPast,
    /// A checkout-style date: must not be past AND must follow the related
    /// check-in value when one is present.
    DateAfter,
    /// GST number; format-checked only when filled in.
    OptionalTaxId,
}

/// One form input under validation, rebuilt per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    /// Whether emptiness is itself a failure. Mirrors the `required`
    /// attribute on the input; also gates the phone format rule.
    pub required: bool,
    /// Current raw value of the input.
    pub value: String,
    /// Companion value for cross-field rules (check-in for [`FieldKind::DateAfter`]).
    pub related_value: Option<String>,
}

impl FieldDescriptor {
    /// A required field of the given kind.
    pub fn required(kind: FieldKind, value: impl Into<String>) -> Self {
        FieldDescriptor {
            kind,
            required: true,
            value: value.into(),
            related_value: None,
        }
    }

    /// An optional field of the given kind.
    pub fn optional(kind: FieldKind, value: impl Into<String>) -> Self {
        FieldDescriptor {
            kind,
            required: false,
            value: value.into(),
            related_value: None,
        }
    }

    /// Attaches the companion value for cross-field rules.
    pub fn with_related(mut self, related: impl Into<String>) -> Self {
        self.related_value = Some(related.into());
        self
    }
}

// =============================================================================
// Validation Result
// =============================================================================

/// Pass/fail classification of one field, with the message to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationResult {
    pub valid: bool,
    /// Empty when valid; otherwise the exact text to render under the field.
    pub message: String,
}

impl ValidationResult {
    /// The passing result.
    pub fn pass() -> Self {
        ValidationResult {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result carrying the error's display message.
    pub fn fail(error: ValidationError) -> Self {
        ValidationResult {
            valid: false,
            message: error.to_string(),
        }
    }
}

// =============================================================================
// Field Validation
// =============================================================================

/// Validates one field against a caller-supplied "today".
///
/// Taking `today` explicitly keeps the function pure (no clock reads), which
/// is what makes the past-date rules testable with fixed dates. UI callers
/// normally go through [`validate_field`].
pub fn validate_field_on(field: &FieldDescriptor, today: NaiveDate) -> ValidationResult {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return ValidationResult::fail(ValidationError::Required);
    }
    if value.is_empty() {
        // Optional and blank: nothing left to check.
        return ValidationResult::pass();
    }

    match field.kind {
        FieldKind::Required => ValidationResult::pass(),

        FieldKind::Email => {
            if EMAIL_RE.is_match(value) {
                ValidationResult::pass()
            } else {
                ValidationResult::fail(ValidationError::InvalidEmail)
            }
        }

        FieldKind::Phone => {
            // Format rule only applies to required phone fields, as on the site.
            if !field.required {
                return ValidationResult::pass();
            }
            let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            if PHONE_RE.is_match(&digits) {
                ValidationResult::pass()
            } else {
                ValidationResult::fail(ValidationError::InvalidPhone)
            }
        }

        FieldKind::DateNotPast => check_not_past(value, today),

        FieldKind::DateAfter => {
            let not_past = check_not_past(value, today);
            if !not_past.valid {
                return not_past;
            }
            let check_out = parse_date(value);
            let check_in = field.related_value.as_deref().and_then(parse_date);
            match (check_out, check_in) {
                (Some(check_out), Some(check_in)) if check_out <= check_in => {
                    ValidationResult::fail(ValidationError::CheckOutNotAfterCheckIn)
                }
                // Companion missing or either side unparseable: nothing to compare.
                _ => ValidationResult::pass(),
            }
        }

        FieldKind::OptionalTaxId => {
            if GST_RE.is_match(value) {
                ValidationResult::pass()
            } else {
                ValidationResult::fail(ValidationError::InvalidGstNumber)
            }
        }
    }
}

/// Validates one field against the local calendar date.
///
/// Thin clock-sampling wrapper over [`validate_field_on`]; the only impurity
/// in the crate, kept at the outermost edge.
pub fn validate_field(field: &FieldDescriptor) -> ValidationResult {
    validate_field_on(field, Local::now().date_naive())
}

/// Date strictly before today fails; empty, unparseable, today, or future pass.
///
/// Unparseable non-empty values pass on purpose: a half-typed date mid-edit
/// must not flash an unrelated "in the past" error.
fn check_not_past(value: &str, today: NaiveDate) -> ValidationResult {
    match parse_date(value) {
        Some(date) if date < today => ValidationResult::fail(ValidationError::DateInPast),
        _ => ValidationResult::pass(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

// =============================================================================
// Aggregate Validation
// =============================================================================

/// Validates every descriptor, in order, without short-circuiting.
///
/// Callers use this on submission so every invalid field can be highlighted
/// in one pass rather than one error per attempt.
pub fn validate_fields(fields: &[FieldDescriptor], today: NaiveDate) -> Vec<ValidationResult> {
    fields
        .iter()
        .map(|field| validate_field_on(field, today))
        .collect()
}

/// True iff every descriptor passes. Evaluates all of them (no fail-fast).
pub fn validate_all(fields: &[FieldDescriptor], today: NaiveDate) -> bool {
    validate_fields(fields, today)
        .iter()
        .all(|result| result.valid)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
    }

    const TODAY: &str = "2025-06-10";

    fn run(field: &FieldDescriptor) -> ValidationResult {
        validate_field_on(field, date(TODAY))
    }

    #[test]
    fn test_required_field_empty() {
        let field = FieldDescriptor::required(FieldKind::Required, "");
        let result = run(&field);
        assert!(!result.valid);
        assert_eq!(result.message, "This field is required");

        // Whitespace-only counts as empty
        let field = FieldDescriptor::required(FieldKind::Required, "   ");
        assert!(!run(&field).valid);
    }

    #[test]
    fn test_required_field_filled() {
        let field = FieldDescriptor::required(FieldKind::Required, "Asha Patnaik");
        assert!(run(&field).valid);
    }

    #[test]
    fn test_optional_field_empty_passes() {
        // "" with required=false: no Email failure is possible
        let field = FieldDescriptor::optional(FieldKind::Email, "");
        let result = run(&field);
        assert!(result.valid);
        assert_eq!(result.message, "");
    }

    #[test]
    fn test_email_shapes() {
        let valid = FieldDescriptor::required(FieldKind::Email, "a@b.co");
        assert!(run(&valid).valid);

        let no_tld = FieldDescriptor::required(FieldKind::Email, "a@b");
        let result = run(&no_tld);
        assert!(!result.valid);
        assert_eq!(result.message, "Please enter a valid email address");

        let no_at = FieldDescriptor::required(FieldKind::Email, "a.b.co");
        assert!(!run(&no_at).valid);

        let space_in_local = FieldDescriptor::required(FieldKind::Email, "a b@c.co");
        assert!(!run(&space_in_local).valid);
    }

    #[test]
    fn test_phone_ten_digits() {
        let valid = FieldDescriptor::required(FieldKind::Phone, "9876543210");
        assert!(run(&valid).valid);

        // Interior whitespace is stripped before matching
        let spaced = FieldDescriptor::required(FieldKind::Phone, "98765 43210");
        assert!(run(&spaced).valid);

        let dashed = FieldDescriptor::required(FieldKind::Phone, "987-654-3210");
        let result = run(&dashed);
        assert!(!result.valid);
        assert_eq!(result.message, "Please enter a valid 10-digit phone number");

        let eleven = FieldDescriptor::required(FieldKind::Phone, "98765432101");
        assert!(!run(&eleven).valid);

        let nine = FieldDescriptor::required(FieldKind::Phone, "987654321");
        assert!(!run(&nine).valid);
    }

    #[test]
    fn test_phone_format_rule_gated_on_required() {
        // Optional phone fields skip the 10-digit rule entirely
        let optional = FieldDescriptor::optional(FieldKind::Phone, "12");
        assert!(run(&optional).valid);
    }

    #[test]
    fn test_date_not_past() {
        let today = FieldDescriptor::required(FieldKind::DateNotPast, TODAY);
        assert!(run(&today).valid);

        let tomorrow = FieldDescriptor::required(FieldKind::DateNotPast, "2025-06-11");
        assert!(run(&tomorrow).valid);

        let yesterday = FieldDescriptor::required(FieldKind::DateNotPast, "2025-06-09");
        let result = run(&yesterday);
        assert!(!result.valid);
        assert_eq!(result.message, "Date cannot be in the past");
    }

    #[test]
    fn test_half_typed_date_does_not_fail() {
        let garbled = FieldDescriptor::required(FieldKind::DateNotPast, "2025-0");
        assert!(run(&garbled).valid);
    }

    #[test]
    fn test_checkout_must_follow_checkin() {
        let same_day = FieldDescriptor::required(FieldKind::DateAfter, "2025-06-10")
            .with_related("2025-06-10");
        let result = run(&same_day);
        assert!(!result.valid);
        assert_eq!(result.message, "Check-out must be after check-in");

        let next_day = FieldDescriptor::required(FieldKind::DateAfter, "2025-06-11")
            .with_related("2025-06-10");
        assert!(run(&next_day).valid);
    }

    #[test]
    fn test_checkout_past_rule_takes_precedence() {
        // A past check-out with an even earlier check-in reports the past-date
        // failure, not the ordering one.
        let field = FieldDescriptor::required(FieldKind::DateAfter, "2025-06-05")
            .with_related("2025-06-01");
        let result = run(&field);
        assert!(!result.valid);
        assert_eq!(result.message, "Date cannot be in the past");
    }

    #[test]
    fn test_checkout_without_checkin_skips_comparison() {
        let field = FieldDescriptor::required(FieldKind::DateAfter, "2025-06-11");
        assert!(run(&field).valid);
    }

    #[test]
    fn test_gst_number_format() {
        let valid = FieldDescriptor::optional(FieldKind::OptionalTaxId, "22AAAAA0000A1Z5");
        assert!(run(&valid).valid);

        let lowercase = FieldDescriptor::optional(FieldKind::OptionalTaxId, "22aaaaa0000a1z5");
        let result = run(&lowercase);
        assert!(!result.valid);
        assert_eq!(result.message, "Please enter a valid GST number");

        let short = FieldDescriptor::optional(FieldKind::OptionalTaxId, "22AAAAA0000A1Z");
        assert!(!run(&short).valid);

        // 13th character may not be zero
        let zero_entity = FieldDescriptor::optional(FieldKind::OptionalTaxId, "22AAAAA0000A0Z5");
        assert!(!run(&zero_entity).valid);

        // 14th character must be the literal 'Z'
        let wrong_z = FieldDescriptor::optional(FieldKind::OptionalTaxId, "22AAAAA0000A1X5");
        assert!(!run(&wrong_z).valid);
    }

    #[test]
    fn test_validate_all_collects_every_result() {
        let fields = vec![
            FieldDescriptor::required(FieldKind::Required, ""),
            FieldDescriptor::required(FieldKind::Email, "a@b"),
            FieldDescriptor::required(FieldKind::Phone, "9876543210"),
        ];

        let results = validate_fields(&fields, date(TODAY));
        assert_eq!(results.len(), 3);
        assert!(!results[0].valid);
        assert!(!results[1].valid);
        assert!(results[2].valid);

        assert!(!validate_all(&fields, date(TODAY)));
    }

    #[test]
    fn test_validate_all_passes_when_everything_valid() {
        let fields = vec![
            FieldDescriptor::required(FieldKind::Required, "Asha"),
            FieldDescriptor::required(FieldKind::Email, "asha@example.co.in"),
            FieldDescriptor::optional(FieldKind::OptionalTaxId, ""),
        ];
        assert!(validate_all(&fields, date(TODAY)));
    }
}

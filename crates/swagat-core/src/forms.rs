//! # Forms Module
//!
//! The two forms the site submits, expressed as plain data.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Page layer reads the inputs into BookingForm / ContactForm             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  form.descriptors() ──► validate_fields / validate_all                  │
//! │       │                                                                 │
//! │       ├── any failure → page highlights every failing field, stops      │
//! │       │                                                                 │
//! │       └── all pass → form.details() / form.message()                    │
//! │                       serialized and handed to the booking endpoint     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The descriptor lists below are the single source of truth for which rules
//! apply to which input; the page layer never re-encodes them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pricing::effective_room_count;
use crate::types::StayRequest;
use crate::validation::{FieldDescriptor, FieldKind};

// =============================================================================
// Booking Form
// =============================================================================

/// Raw values of the booking form, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingForm {
    pub check_in: String,
    pub check_out: String,
    pub room_type: String,
    pub room_count: String,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    /// Optional; filled by business travellers wanting a GST invoice.
    pub company_name: String,
    /// Optional; format-checked only when present.
    pub gst_number: String,
}

impl BookingForm {
    /// Validation descriptors for every input, in page order.
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::required(FieldKind::DateNotPast, self.check_in.clone()),
            FieldDescriptor::required(FieldKind::DateAfter, self.check_out.clone())
                .with_related(self.check_in.clone()),
            FieldDescriptor::required(FieldKind::Required, self.room_type.clone()),
            FieldDescriptor::required(FieldKind::Required, self.room_count.clone()),
            FieldDescriptor::required(FieldKind::Required, self.guest_name.clone()),
            FieldDescriptor::required(FieldKind::Email, self.email.clone()),
            FieldDescriptor::required(FieldKind::Phone, self.phone.clone()),
            FieldDescriptor::optional(FieldKind::Required, self.company_name.clone()),
            FieldDescriptor::optional(FieldKind::OptionalTaxId, self.gst_number.clone()),
        ]
    }

    /// The pricing-relevant slice of the form, for [`crate::pricing::compute_price`].
    pub fn stay(&self) -> StayRequest {
        StayRequest {
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            room_type: self.room_type.clone(),
            room_count: self.room_count.clone(),
        }
    }

    /// Converts a validated form into the submission payload.
    ///
    /// Callers gate this on the aggregate validation passing; the conversion
    /// itself stays total (room count falls back the same way pricing does,
    /// blank optional fields become `None`).
    pub fn details(&self) -> BookingDetails {
        BookingDetails {
            check_in: self.check_in.trim().to_string(),
            check_out: self.check_out.trim().to_string(),
            room_type: self.room_type.trim().to_string(),
            room_count: effective_room_count(&self.room_count),
            guest_name: self.guest_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company_name: non_empty(&self.company_name),
            gst_number: non_empty(&self.gst_number),
        }
    }
}

/// The booking payload handed to the reservation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingDetails {
    pub check_in: String,
    pub check_out: String,
    pub room_type: String,
    pub room_count: i64,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub gst_number: Option<String>,
}

// =============================================================================
// Contact Form
// =============================================================================

/// Raw values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validation descriptors for every input, in page order.
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::required(FieldKind::Required, self.name.clone()),
            FieldDescriptor::required(FieldKind::Email, self.email.clone()),
            FieldDescriptor::required(FieldKind::Phone, self.phone.clone()),
            FieldDescriptor::required(FieldKind::Required, self.subject.clone()),
            FieldDescriptor::required(FieldKind::Required, self.message.clone()),
        ]
    }

    /// Converts a validated form into the submission payload.
    pub fn message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

/// The contact payload handed to the enquiry endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

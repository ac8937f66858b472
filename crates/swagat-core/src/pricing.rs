//! # Pricing Module
//!
//! Turns the booking form's pricing inputs into a [`PriceBreakdown`].
//!
//! ## Recalculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User edits check-in / check-out / room type / room count               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_price(stay, catalog) ← THIS MODULE (on every change event)     │
//! │       │                                                                 │
//! │       ├── any of the three key fields empty/unparseable?                │
//! │       │        → zero breakdown ("not ready yet", not an error)         │
//! │       │                                                                 │
//! │       ├── nights = check_out − check_in ≤ 0?                            │
//! │       │        → zero breakdown (soft invalid range)                    │
//! │       │                                                                 │
//! │       └── subtotal = rate × nights × rooms                              │
//! │           gst      = round_half_up(subtotal × 18%)                      │
//! │           total    = subtotal + gst                                     │
//! │                                                                         │
//! │  The visitor is mid-edit for most calls; nothing here may panic or      │
//! │  return Err, ever.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::types::{PriceBreakdown, RoomCatalog, StayRequest};
use crate::{DEFAULT_ROOM_COUNT, GST_RATE, MAX_ROOM_COUNT};

// =============================================================================
// Price Calculation
// =============================================================================

/// Computes the price breakdown for a (possibly incomplete) stay request.
///
/// Pure and total: identical inputs always yield the identical breakdown, and
/// every degenerate input resolves to either the zero breakdown or a
/// documented permissive default.
///
/// ## Degenerate Inputs
/// | Input state                                | Result                 |
/// |--------------------------------------------|------------------------|
/// | check-in/check-out/room type empty or bad  | zero breakdown         |
/// | check-out on or before check-in            | zero breakdown         |
/// | room type not in the catalog               | priced at ₹0 (flagged) |
/// | room count missing, non-numeric, or ≤ 0    | defaults to 1          |
///
/// ## Example
/// ```rust
/// use swagat_core::pricing::compute_price;
/// use swagat_core::types::{RoomCatalog, StayRequest};
///
/// let stay = StayRequest {
///     check_in: "2025-06-01".into(),
///     check_out: "2025-06-03".into(),
///     room_type: "executive-suite".into(),
///     room_count: "2".into(),
/// };
/// let breakdown = compute_price(&stay, &RoomCatalog::standard());
/// assert_eq!(breakdown.subtotal.rupees(), 19996); // 4999 × 2 nights × 2 rooms
/// assert_eq!(breakdown.tax_amount.rupees(), 3599); // 19996 × 0.18 = 3599.28
/// assert_eq!(breakdown.total.rupees(), 23595);
/// ```
pub fn compute_price(stay: &StayRequest, catalog: &RoomCatalog) -> PriceBreakdown {
    let room_type = stay.room_type.trim();

    let (check_in, check_out) = match (parse_date(&stay.check_in), parse_date(&stay.check_out)) {
        (Some(ci), Some(co)) if !room_type.is_empty() => (ci, co),
        _ => return PriceBreakdown::zero(),
    };

    let nights = night_count(check_in, check_out);
    if nights <= 0 {
        return PriceBreakdown::zero();
    }

    let nightly_rate = catalog.nightly_rate(room_type);
    let rooms = effective_room_count(&stay.room_count);

    // Saturating: an extreme configured rate or date range must degrade to a
    // pinned quote, never a panic or a wrapped-negative subtotal.
    let subtotal = nightly_rate.saturating_mul(nights).saturating_mul(rooms);
    PriceBreakdown::from_subtotal(subtotal, GST_RATE)
}

/// Number of nights between two calendar dates.
///
/// Calendar subtraction only: `NaiveDate` has no time-of-day, so two bookings
/// made at different hours of the same days always agree. Zero or negative
/// means the range is not bookable.
#[inline]
pub fn night_count(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Parses an ISO-8601 `YYYY-MM-DD` field value; empty or malformed is `None`.
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// The room count actually used: the field's integer value, or 1 when the
/// field is missing, non-numeric, or non-positive, capped at
/// [`MAX_ROOM_COUNT`](crate::MAX_ROOM_COUNT).
///
/// Shared with the booking payload so the price shown and the count submitted
/// can never disagree.
pub fn effective_room_count(value: &str) -> i64 {
    match value.trim().parse::<i64>() {
        Ok(count) if count > 0 => count.min(MAX_ROOM_COUNT),
        _ => DEFAULT_ROOM_COUNT,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

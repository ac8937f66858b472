//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The original site computed GST as `subtotal * 0.18` in floats and      │
//! │  displayed whatever fell out, fractional paise included.                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupees                                           │
//! │    The room catalog prices in whole rupees (₹4,999 / night), so the     │
//! │    rupee IS the smallest display unit. All arithmetic stays in i64      │
//! │    and GST is rounded half-up exactly once, at the tax step.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use swagat_core::money::Money;
//!
//! let nightly = Money::from_rupees(4999);
//! let stay = nightly * 2;                     // 2 nights
//! assert_eq!(stay.rupees(), 9998);
//! assert_eq!(stay.to_string(), "₹9,998");     // en-IN digit grouping
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole rupees, the smallest unit this catalog prices in.
///
/// ## Design Decisions
/// - **i64 (signed)**: room for future refunds/adjustments, though the pricing
///   engine itself only ever produces non-negative values
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serializes as a bare number**: the room catalog JSON stays flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in whole rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Zero money value. Doubles as the "not yet priced" display state.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates tax, rounding half-up on the rupee.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 turns the
    /// floor division into round-half-up (5000/10000 = 0.5). i128 keeps the
    /// intermediate product from overflowing on absurd inputs.
    ///
    /// ## Example
    /// ```rust
    /// use swagat_core::money::Money;
    /// use swagat_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_rupees(19996);
    /// let gst = subtotal.calculate_tax(TaxRate::from_bps(1800)); // 18% GST
    /// // 19996 × 0.18 = 3599.28 → rounds to ₹3,599
    /// assert_eq!(gst.rupees(), 3599);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_rupees(tax as i64)
    }

    /// Multiplication that pins at `i64::MAX`/`i64::MIN` instead of wrapping.
    ///
    /// The pricing path uses this for `rate × nights × rooms`: the engine's
    /// contract is that no input, however extreme, may panic or produce a
    /// negative amount, and plain `*` breaks both once a configured rate or
    /// a parsed count gets large enough.
    #[inline]
    pub const fn saturating_mul(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Addition that pins at `i64::MAX` instead of wrapping.
    #[inline]
    pub const fn saturating_add(&self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the en-IN format the site shows: `₹` plus Indian digit
/// grouping (last three digits, then groups of two: `₹12,34,567`).
///
/// This is the presentation boundary. Everything upstream of `Display` is
/// exact integer arithmetic; nothing downstream feeds back into computation.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}", sign, group_indian(self.0.unsigned_abs()))
    }
}

/// Groups an absolute value per the en-IN locale: `1234567` → `12,34,567`.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);

    // Head groups of two, right-aligned: an odd-length head leads with one digit.
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for chunk in head.as_bytes()[lead..].chunks(2) {
        if !out.is_empty() {
            out.push(',');
        }
        // Chunks come from an ASCII digit string, so this cannot fail.
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }

    out.push(',');
    out.push_str(tail);
    out
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (night counts, room counts).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Domain Types
//!
//! Core domain types for the booking engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  RoomCatalog    │   │   StayRequest   │   │ PriceBreakdown  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  room type key  │   │  check_in  (s)  │   │  subtotal       │       │
//! │  │    → nightly ₹  │   │  check_out (s)  │   │  tax_amount     │       │
//! │  │  config, fixed  │   │  room_type (s)  │   │  total          │       │
//! │  └─────────────────┘   │  room_count (s) │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │   StayRequest carries RAW form values: the fields │
//! │  │  ─────────────  │   arrive as the user typed/picked them and every  │
//! │  │  bps (u32)      │   parse decision belongs to the engine, not the   │
//! │  │  1800 = 18% GST │   page script.                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these carry identity or lifecycle: they are value objects rebuilt
//! from the form on every recalculation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (the GST slab hotel rooms in this bracket fall under)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Room Catalog
// =============================================================================

/// Immutable mapping from room-type key to nightly rate.
///
/// Supplied once at startup as configuration; the engine never mutates it.
/// Lookup is deliberately permissive: an unknown key prices at zero rather
/// than failing, so a stale or malformed `<select>` value cannot crash the
/// page mid-edit. See DESIGN.md for why this is flagged rather than fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct RoomCatalog {
    rates: BTreeMap<String, Money>,
}

impl RoomCatalog {
    /// The catalog the Swagat Retreat site ships with.
    pub fn standard() -> Self {
        [
            ("executive-suite", Money::from_rupees(4999)),
            ("business-deluxe", Money::from_rupees(3499)),
        ]
        .into_iter()
        .collect()
    }

    /// Nightly rate for a room type; unknown keys price at zero.
    pub fn nightly_rate(&self, room_type: &str) -> Money {
        self.rates.get(room_type).copied().unwrap_or_default()
    }

    /// True if the room type exists in the catalog.
    pub fn contains(&self, room_type: &str) -> bool {
        self.rates.contains_key(room_type)
    }

    /// Room-type keys in stable (sorted) order, for populating the select.
    pub fn room_types(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, Money)> for RoomCatalog {
    fn from_iter<I: IntoIterator<Item = (S, Money)>>(iter: I) -> Self {
        RoomCatalog {
            rates: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// =============================================================================
// Stay Request
// =============================================================================

/// The pricing-relevant slice of the booking form, exactly as entered.
///
/// Every field is a raw string: empty means "not chosen yet", and malformed
/// content is the engine's problem to absorb (never the caller's to pre-clean).
/// Dates are expected as ISO-8601 `YYYY-MM-DD`, which is what a date input
/// produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StayRequest {
    /// Check-in date, `YYYY-MM-DD` or empty.
    pub check_in: String,
    /// Check-out date, `YYYY-MM-DD` or empty.
    pub check_out: String,
    /// Room-type key as selected, e.g. `"executive-suite"`.
    pub room_type: String,
    /// Number of rooms as typed; non-numeric or non-positive defaults to 1.
    pub room_count: String,
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// The computed price of a stay.
///
/// Invariants (maintained by construction, see [`PriceBreakdown::from_subtotal`]):
/// - `tax_amount` = subtotal × rate, rounded half-up on the rupee
/// - `total` = `subtotal + tax_amount`
/// - all three are non-negative for any input the engine accepts
///
/// The all-zero breakdown is the "incomplete or invalid range" display state,
/// not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBreakdown {
    pub subtotal: Money,
    pub tax_amount: Money,
    pub total: Money,
}

impl PriceBreakdown {
    /// The zero breakdown shown while the form is incomplete.
    #[inline]
    pub const fn zero() -> Self {
        PriceBreakdown {
            subtotal: Money::zero(),
            tax_amount: Money::zero(),
            total: Money::zero(),
        }
    }

    /// Derives the full breakdown from a subtotal, holding the invariants.
    ///
    /// The total saturates rather than wraps if the subtotal is already
    /// pinned near `i64::MAX`; everywhere reachable through real catalog
    /// rates it is exactly `subtotal + tax_amount`.
    pub fn from_subtotal(subtotal: Money, rate: TaxRate) -> Self {
        let tax_amount = subtotal.calculate_tax(rate);
        PriceBreakdown {
            subtotal,
            tax_amount,
            total: subtotal.saturating_add(tax_amount),
        }
    }

    /// True if this is the incomplete/invalid-range state.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.subtotal.is_zero() && self.tax_amount.is_zero() && self.total.is_zero()
    }

    /// Formats all three amounts for display (`₹` + en-IN grouping).
    ///
    /// This is the only string-producing step in pricing; callers bind these
    /// directly to the summary elements.
    pub fn formatted(&self) -> FormattedBreakdown {
        FormattedBreakdown {
            subtotal: self.subtotal.to_string(),
            tax_amount: self.tax_amount.to_string(),
            total: self.total.to_string(),
        }
    }
}

/// Display-ready rendering of a [`PriceBreakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormattedBreakdown {
    pub subtotal: String,
    pub tax_amount: String,
    pub total: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = RoomCatalog::standard();
        assert_eq!(
            catalog.nightly_rate("executive-suite"),
            Money::from_rupees(4999)
        );
        assert_eq!(
            catalog.nightly_rate("business-deluxe"),
            Money::from_rupees(3499)
        );
    }

    #[test]
    fn test_catalog_unknown_key_prices_zero() {
        let catalog = RoomCatalog::standard();
        assert_eq!(catalog.nightly_rate("presidential"), Money::zero());
        assert!(!catalog.contains("presidential"));
    }

    #[test]
    fn test_catalog_deserializes_from_flat_json() {
        let catalog: RoomCatalog =
            serde_json::from_str(r#"{"executive-suite": 4999, "business-deluxe": 3499}"#)
                .expect("catalog json");
        assert_eq!(catalog, RoomCatalog::standard());
    }

    #[test]
    fn test_breakdown_invariants() {
        let b = PriceBreakdown::from_subtotal(Money::from_rupees(19996), TaxRate::from_bps(1800));
        assert_eq!(b.tax_amount, b.subtotal.calculate_tax(TaxRate::from_bps(1800)));
        assert_eq!(b.total, b.subtotal + b.tax_amount);
    }

    #[test]
    fn test_zero_breakdown() {
        assert!(PriceBreakdown::zero().is_zero());
        assert_eq!(PriceBreakdown::default(), PriceBreakdown::zero());
    }

    #[test]
    fn test_formatted_breakdown() {
        let b = PriceBreakdown::from_subtotal(Money::from_rupees(19996), TaxRate::from_bps(1800));
        let f = b.formatted();
        assert_eq!(f.subtotal, "₹19,996");
        assert_eq!(f.tax_amount, "₹3,599");
        assert_eq!(f.total, "₹23,595");
    }
}

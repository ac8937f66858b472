//! # swagat-core: Pure Business Logic for the Swagat Retreat Site
//!
//! This crate is the **heart** of the Swagat Retreat booking page. It contains
//! the pricing and validation engine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Swagat Retreat Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Page Layer (web)                           │   │
//! │  │   nav menu ─ hero slider ─ maps SDK ─ analytics ─ inventory     │   │
//! │  │   polling ─ event wiring for the booking & contact forms        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain values in, plain results out    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ swagat-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Catalog  │  │   Money   │  │  nights   │  │   rules   │  │   │
//! │  │   │ Breakdown │  │  GST calc │  │  subtotal │  │  messages │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   forms   │  │ inventory │                                 │   │
//! │  │   │  payloads │  │  badges   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO DOM • NO NETWORK • NO EXTERNAL SDKS • PURE FUNCTIONS      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (RoomCatalog, StayRequest, PriceBreakdown, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Night counting and the subtotal/GST/total computation
//! - [`validation`] - Field rules, messages, and the submission sweep
//! - [`forms`] - Booking and contact forms as data, plus their payloads
//! - [`inventory`] - Scarcity badge classification
//! - [`error`] - Validation failure variants with user-facing messages
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every call re-derives its output from its inputs;
//!    nothing is cached or stored between invocations
//! 2. **No I/O**: DOM access, SDK calls, and network belong to the page layer
//! 3. **Integer Money**: all amounts are whole rupees in i64, GST rounded
//!    half-up exactly once
//! 4. **Never hard-fail mid-edit**: degenerate pricing input yields the zero
//!    breakdown, and validation always returns a result, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use swagat_core::pricing::compute_price;
//! use swagat_core::types::{RoomCatalog, StayRequest};
//!
//! let stay = StayRequest {
//!     check_in: "2025-06-01".into(),
//!     check_out: "2025-06-03".into(),
//!     room_type: "executive-suite".into(),
//!     room_count: "2".into(),
//! };
//!
//! let breakdown = compute_price(&stay, &RoomCatalog::standard());
//! assert_eq!(breakdown.formatted().total, "₹23,595");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod forms;
pub mod inventory;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use swagat_core::Money` instead of
// `use swagat_core::money::Money`

pub use error::ValidationError;
pub use forms::{BookingDetails, BookingForm, ContactForm, ContactMessage};
pub use inventory::Scarcity;
pub use money::Money;
pub use pricing::compute_price;
pub use types::*;
pub use validation::{
    validate_all, validate_field, validate_field_on, validate_fields, FieldDescriptor, FieldKind,
    ValidationResult,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// GST rate applied to every stay, in basis points (1800 = 18%).
///
/// ## Why a constant?
/// The site charges one flat slab across both room categories. If the catalog
/// ever spans slabs, this moves onto the catalog entries.
pub const GST_RATE: types::TaxRate = types::TaxRate::from_bps(1800);

/// Room count assumed when the field is empty, non-numeric, or non-positive.
///
/// ## Business Reason
/// The count input defaults to a single room on the page; pricing mirrors
/// that instead of refusing to quote while the visitor is still editing.
pub const DEFAULT_ROOM_COUNT: i64 = 1;

/// Maximum room count a single booking may quote for.
///
/// ## Business Reason
/// The property has nowhere near this many rooms; the cap exists so a typo'd
/// or hostile count can never overflow the subtotal arithmetic. Larger values
/// quote as if this many rooms were requested.
pub const MAX_ROOM_COUNT: i64 = 99;

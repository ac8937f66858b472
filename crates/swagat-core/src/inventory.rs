//! # Inventory Module
//!
//! Scarcity-badge classification for the room cards.
//!
//! The polling that fetches per-room availability is page-layer glue; only
//! the mapping from an available count to a badge lives here, so the
//! thresholds stay testable and in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Scarcity Levels
// =============================================================================

/// How urgently a room's remaining availability should be advertised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "level", content = "count")]
pub enum Scarcity {
    /// No rooms left.
    SoldOut,
    /// One or two rooms left; the badge names the exact count.
    LastFew(u32),
    /// Three or four rooms left.
    Limited,
    /// Five or more; the badge is hidden entirely.
    Plenty,
}

impl Scarcity {
    /// Classifies an available-room count.
    pub fn classify(available: u32) -> Self {
        match available {
            0 => Scarcity::SoldOut,
            1..=2 => Scarcity::LastFew(available),
            3..=4 => Scarcity::Limited,
            _ => Scarcity::Plenty,
        }
    }

    /// Badge text, or `None` when no badge should be shown.
    pub fn label(&self) -> Option<String> {
        match self {
            Scarcity::SoldOut => Some("Sold out".to_string()),
            Scarcity::LastFew(1) => Some("Only 1 room left".to_string()),
            Scarcity::LastFew(count) => Some(format!("Only {count} rooms left")),
            Scarcity::Limited => Some("Limited availability".to_string()),
            Scarcity::Plenty => None,
        }
    }
}

impl fmt::Display for Scarcity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().as_deref().unwrap_or(""))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(Scarcity::classify(0), Scarcity::SoldOut);
        assert_eq!(Scarcity::classify(1), Scarcity::LastFew(1));
        assert_eq!(Scarcity::classify(2), Scarcity::LastFew(2));
        assert_eq!(Scarcity::classify(3), Scarcity::Limited);
        assert_eq!(Scarcity::classify(4), Scarcity::Limited);
        assert_eq!(Scarcity::classify(5), Scarcity::Plenty);
        assert_eq!(Scarcity::classify(40), Scarcity::Plenty);
    }

    #[test]
    fn test_badge_labels() {
        assert_eq!(Scarcity::classify(0).label().as_deref(), Some("Sold out"));
        assert_eq!(
            Scarcity::classify(1).label().as_deref(),
            Some("Only 1 room left")
        );
        assert_eq!(
            Scarcity::classify(2).label().as_deref(),
            Some("Only 2 rooms left")
        );
        assert_eq!(
            Scarcity::classify(4).label().as_deref(),
            Some("Limited availability")
        );
        assert_eq!(Scarcity::classify(6).label(), None);
    }
}

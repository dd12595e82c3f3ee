//! # Catalog Types
//!
//! Catalog entries available for purchase.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Types                                    │
//! │                                                                         │
//! │  ┌────────────────────┐        ┌────────────────────────────────┐      │
//! │  │    CatalogItem     │        │           ItemKind             │      │
//! │  │  ────────────────  │  kind  │  ────────────────────────────  │      │
//! │  │  id (business id)  │ ─────► │  Game { publisher,             │      │
//! │  │  title             │        │         multiplayer }          │      │
//! │  │  price_cents       │        │  Movie { running_time_minutes }│      │
//! │  └────────────────────┘        └────────────────────────────────┘      │
//! │                                                                         │
//! │  Common fields live on the struct; variant-specific fields live on     │
//! │  the kind. Purchased copies are a separate snapshot type               │
//! │  (customer::OwnedItem), not another variant: a catalog entry is a      │
//! │  template, an owned item is an instance.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item Kind
// =============================================================================

/// The concrete kind of a catalog entry, with its variant-specific fields.
///
/// Display paths dispatch on this tag (see [`CatalogItem::kind_label`])
/// instead of relying on any inheritance-style override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ItemKind {
    /// A video game.
    Game {
        publisher: String,
        multiplayer: bool,
    },
    /// A movie.
    Movie {
        /// Running time in minutes (>= 0).
        running_time_minutes: i64,
    },
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable catalog entry.
///
/// ## Invariants
/// - `id` uniquely identifies an item within a store's catalog
/// - `price_cents` is non-negative (zero-price items are allowed)
///
/// Catalog items are templates: buying one creates an independent
/// [`OwnedItem`](crate::customer::OwnedItem) snapshot in the customer's
/// list, and later catalog changes never affect already-purchased copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Business id, unique within the store ("gtasa", "8mile").
    pub id: String,

    /// Display title shown in search results and receipts.
    pub title: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Variant tag plus variant-specific fields.
    pub kind: ItemKind,
}

impl CatalogItem {
    /// Creates a game entry.
    pub fn game(
        id: impl Into<String>,
        title: impl Into<String>,
        price_cents: i64,
        publisher: impl Into<String>,
        multiplayer: bool,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            title: title.into(),
            price_cents,
            kind: ItemKind::Game {
                publisher: publisher.into(),
                multiplayer,
            },
        }
    }

    /// Creates a movie entry.
    pub fn movie(
        id: impl Into<String>,
        title: impl Into<String>,
        price_cents: i64,
        running_time_minutes: i64,
    ) -> Self {
        CatalogItem {
            id: id.into(),
            title: title.into(),
            price_cents,
            kind: ItemKind::Movie {
                running_time_minutes,
            },
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the display tag for this entry's kind, if it has one.
    ///
    /// Search rendering prints only labeled entries; an entry whose kind
    /// yields no label is matched by the search but silently excluded from
    /// the output. Every current variant has a label, but the rendering
    /// contract is `Option` so the exclusion stays an explicit variant
    /// match rather than an accident.
    pub fn kind_label(&self) -> Option<&'static str> {
        match self.kind {
            ItemKind::Game { .. } => Some("[GAME]"),
            ItemKind::Movie { .. } => Some("[MOVIE]"),
        }
    }

    /// Human-readable description; each variant formats its own fields.
    ///
    /// Pure: no side effects, callers decide where the text goes.
    pub fn info(&self) -> String {
        match &self.kind {
            ItemKind::Game {
                publisher,
                multiplayer,
            } => format!(
                "{}, {}\n  Publisher: {}\n  Multiplayer: {}",
                self.title,
                self.price(),
                publisher,
                if *multiplayer { "yes" } else { "no" }
            ),
            ItemKind::Movie {
                running_time_minutes,
            } => format!(
                "{}, {}\n  Running Time: {} min",
                self.title,
                self.price(),
                running_time_minutes
            ),
        }
    }

    /// Case-insensitive substring match against the title.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::CatalogItem;
    ///
    /// let item = CatalogItem::game("g1", "Awesome Game", 999, "Acme", false);
    /// assert!(item.matches_title("game"));
    /// assert!(item.matches_title("AWESOME"));
    /// assert!(!item.matches_title("movie"));
    /// ```
    pub fn matches_title(&self, keyword: &str) -> bool {
        self.title
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let game = CatalogItem::game("gtasa", "GTA SA", 5000, "Game Studios", true);
        assert_eq!(game.id, "gtasa");
        assert_eq!(game.price().cents(), 5000);
        assert!(matches!(game.kind, ItemKind::Game { .. }));

        let movie = CatalogItem::movie("8mile", "8 Mile", 1500, 120);
        assert!(matches!(
            movie.kind,
            ItemKind::Movie {
                running_time_minutes: 120
            }
        ));
    }

    #[test]
    fn test_kind_label() {
        let game = CatalogItem::game("g1", "G", 100, "P", false);
        let movie = CatalogItem::movie("m1", "M", 100, 90);
        assert_eq!(game.kind_label(), Some("[GAME]"));
        assert_eq!(movie.kind_label(), Some("[MOVIE]"));
    }

    #[test]
    fn test_info_formats_variant_fields() {
        let game = CatalogItem::game("gtasa", "GTA SA", 5000, "Game Studios", true);
        let info = game.info();
        assert!(info.contains("GTA SA, $50.00"));
        assert!(info.contains("Publisher: Game Studios"));
        assert!(info.contains("Multiplayer: yes"));

        let movie = CatalogItem::movie("8mile", "8 Mile", 1500, 120);
        let info = movie.info();
        assert!(info.contains("8 Mile, $15.00"));
        assert!(info.contains("Running Time: 120 min"));
    }

    #[test]
    fn test_matches_title_case_insensitive_substring() {
        let item = CatalogItem::game("g1", "Awesome Game", 999, "Acme", false);
        assert!(item.matches_title("game"));
        assert!(item.matches_title("Game"));
        assert!(item.matches_title("awesome g"));
        assert!(item.matches_title("")); // empty keyword matches everything
        assert!(!item.matches_title("gamer"));
    }

    #[test]
    fn test_serde_round_trip() {
        let item = CatalogItem::movie("8mile", "8 Mile", 1500, 120);
        let json = serde_json::to_string(&item).unwrap();
        let back: CatalogItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
        assert!(json.contains("\"type\":\"movie\""));
    }
}

//! # Validation Module
//!
//! Input validation for the application boundary.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console parsing                                              │
//! │  ├── Line → typed value (menu choice, amount, minutes)                 │
//! │  └── Unparseable input re-prompts immediately                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Parsed values checked against business limits                     │
//! │  └── Non-positive amounts/minutes rejected here                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core operations                                              │
//! │  └── Permissive by contract: they apply whatever they are handed       │
//! │                                                                         │
//! │  The core stays total and deterministic; this module is where the      │
//! │  "should we reject negative reloads?" decision lives (we do).          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_ITEM_ID_LEN, MAX_SEARCH_KEYWORD_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog item id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_ITEM_ID_LEN`] characters
/// - Only alphanumeric characters, hyphens, and underscores
///
/// ## Returns
/// The trimmed id.
pub fn validate_item_id(id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "item id".to_string(),
        });
    }

    if id.len() > MAX_ITEM_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "item id".to_string(),
            max: MAX_ITEM_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "item id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(id.to_string())
}

/// Validates a title search keyword.
///
/// ## Rules
/// - Can be empty (matches the whole catalog)
/// - At most [`MAX_SEARCH_KEYWORD_LEN`] characters
///
/// ## Returns
/// The trimmed keyword.
pub fn validate_search_keyword(keyword: &str) -> ValidationResult<String> {
    let keyword = keyword.trim();

    if keyword.len() > MAX_SEARCH_KEYWORD_LEN {
        return Err(ValidationError::TooLong {
            field: "keyword".to_string(),
            max: MAX_SEARCH_KEYWORD_LEN,
        });
    }

    Ok(keyword.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a reload amount in cents.
///
/// ## Rules
/// - Must be positive (> 0); a reload of zero or less makes no sense at
///   the menu even though the core would accept it
pub fn validate_reload_amount_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates a usage duration in minutes.
///
/// ## Rules
/// - Must be positive (> 0); there is deliberately no upper bound
///   (a 600-minute session is unusual, not invalid)
pub fn validate_minutes(minutes: i64) -> ValidationResult<()> {
    if minutes <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "minutes".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_id() {
        assert_eq!(validate_item_id("gtasa").unwrap(), "gtasa");
        assert_eq!(validate_item_id("  8mile  ").unwrap(), "8mile");
        assert_eq!(validate_item_id("item_1-b").unwrap(), "item_1-b");

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
        assert!(validate_item_id("has space").is_err());
        assert!(validate_item_id(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_search_keyword() {
        assert_eq!(validate_search_keyword("  game ").unwrap(), "game");
        assert_eq!(validate_search_keyword("").unwrap(), "");
        assert!(validate_search_keyword(&"k".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_reload_amount_cents() {
        assert!(validate_reload_amount_cents(1).is_ok());
        assert!(validate_reload_amount_cents(10_000).is_ok());
        assert!(validate_reload_amount_cents(0).is_err());
        assert!(validate_reload_amount_cents(-500).is_err());
    }

    #[test]
    fn test_validate_minutes() {
        assert!(validate_minutes(1).is_ok());
        assert!(validate_minutes(600).is_ok()); // no upper bound
        assert!(validate_minutes(0).is_err());
        assert!(validate_minutes(-10).is_err());
    }
}

//! # Validation Module
//!
//! Business rule checks for menu entries and cashier input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal (kasir-terminal)                                    │
//! │  └── Is the line an integer at all?                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Menu table rules (code, name, price)                              │
//! │  └── Quantity rules                                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart / pricing                                               │
//! │  └── Overflow-checked arithmetic                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ItemCode;
use crate::MAX_ITEM_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a menu item code.
///
/// ## Rules
/// - Must be positive; `0` is the checkout sentinel
pub fn validate_item_code(code: ItemCode) -> ValidationResult<()> {
    if code.get() == 0 {
        return Err(ValidationError::MustBePositive {
            field: "code".to_string(),
        });
    }

    Ok(())
}

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_ITEM_NAME_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use kasir_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Es Teh").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates the quantity of one add-item attempt.
///
/// ## User Workflow
/// ```text
/// Masukkan jumlah Es Teh: -1
///       │
///       ▼
/// validate_quantity(-1) ← THIS FUNCTION
///       │
///       ├── qty <= 0? → "Jumlah tidak valid." (cart untouched)
///       │
///       └── OK → Cart::add_item
/// ```
///
/// There is no upper bound; the cart rejects quantities whose totals would
/// overflow instead.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kasir-core errors (this file)                                         │
//! │  ├── CoreError        - Domain failures (unknown item, overflow, ...)  │
//! │  └── ValidationError  - Field-level rule violations                    │
//! │                                                                         │
//! │  kasir-terminal errors (app crate)                                     │
//! │  ├── SessionError     - Closed input, console I/O                      │
//! │  └── ConfigError      - Configuration loading                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → re-prompt / exit   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every user-input failure in the till is recoverable: the terminal maps
//! these variants to a message and asks again.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No menu item carries this code.
    ///
    /// ## When This Occurs
    /// - Cashier types a code that is not on the menu
    /// - Code is negative or too large to be an item code at all
    #[error("Item not found: {0}")]
    ItemNotFound(i64),

    /// Quantity for an add-item attempt is zero or negative.
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// A money or quantity computation does not fit in 64 bits.
    ///
    /// ## When This Occurs
    /// - Absurd quantities (e.g. 9223372036854775807 plates of rice)
    /// - A payment so negative that the shortfall cannot be represented
    #[error("Amount is too large to compute")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used when building a catalog from configuration and when checking
/// quantities before they reach the cart.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., two menu entries with the same code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

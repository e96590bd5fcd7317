//! # kasir-core: Pure Business Logic for the Kasir till
//!
//! Everything the till computes lives here as pure functions with zero I/O.
//! The terminal application reads input, calls into this crate, and prints
//! whatever comes back.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 kasir-terminal (apps/terminal)                  │   │
//! │  │    Menu ──► Item/Qty prompts ──► Summary ──► Payment ──► Receipt│   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  MenuItem │  │   Money   │  │   Cart    │  │ Checkout  │  │   │
//! │  │   │  lookup   │  │ Rp 1.000  │  │ accumulate│  │  tender   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBAL STATE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (`ItemCode`, `MenuItem`)
//! - [`money`] - Whole-rupiah `Money` type and its display format
//! - [`catalog`] - The immutable menu table
//! - [`cart`] - Quantity accumulation per item code
//! - [`pricing`] - Line totals, checkout total, payment evaluation
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::{compute_lines, Cart, Catalog, ItemCode};
//!
//! let catalog = Catalog::standard();
//! let mut cart = Cart::new();
//! cart.add_item(&catalog, ItemCode::new(1), 2).unwrap();
//!
//! let checkout = compute_lines(&catalog, &cart).unwrap();
//! assert_eq!(checkout.total.to_string(), "Rp 44.000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_lines, evaluate_tender, CartLine, Checkout, TenderOutcome};
pub use types::{ItemCode, MenuItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Item code that ends item selection and moves on to payment.
pub const CHECKOUT_CODE: i64 = 0;

/// Maximum length of a menu item name.
pub const MAX_ITEM_NAME_LENGTH: usize = 200;

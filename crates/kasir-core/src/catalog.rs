//! # Catalog
//!
//! The immutable menu table the till sells from.
//!
//! A [`Catalog`] is built once at startup (from configuration or
//! [`Catalog::standard`]) and borrowed by everything that needs it. It is
//! plain data: adding a dish means adding a row, never a new branch.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{ItemCode, MenuItem};
use crate::validation::{validate_item_code, validate_item_name, validate_price};

/// An ordered, validated list of menu items.
///
/// ## Invariants
/// - Codes are positive and unique
/// - Names are non-empty
/// - Prices are non-negative
/// - Order is the definition order; the menu and every line listing use it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting tables that break the invariants.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::{Catalog, MenuItem};
    ///
    /// let ok = Catalog::new(vec![MenuItem::new(1, "Kopi", 4000)]);
    /// assert!(ok.is_ok());
    ///
    /// let dup = Catalog::new(vec![
    ///     MenuItem::new(1, "Kopi", 4000),
    ///     MenuItem::new(1, "Teh", 3000),
    /// ]);
    /// assert!(dup.is_err());
    /// ```
    pub fn new(items: Vec<MenuItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            validate_item_code(item.code)?;
            validate_item_name(&item.name)?;
            validate_price(item.unit_price)?;

            if !seen.insert(item.code) {
                return Err(ValidationError::Duplicate {
                    field: "code".to_string(),
                    value: item.code.to_string(),
                }
                .into());
            }
        }

        Ok(Catalog { items })
    }

    /// The five-dish menu the till ships with.
    pub fn standard() -> Self {
        Catalog {
            items: standard_menu(),
        }
    }

    /// Finds the item for `code`.
    pub fn lookup(&self, code: ItemCode) -> CoreResult<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.code == code)
            .ok_or(CoreError::ItemNotFound(i64::from(code.get())))
    }

    /// Position of `code` in definition order.
    pub fn position(&self, code: ItemCode) -> Option<usize> {
        self.items.iter().position(|item| item.code == code)
    }

    /// All items in definition order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::standard()
    }
}

/// Rows of [`Catalog::standard`].
pub fn standard_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Nasi Goreng", 22000),
        MenuItem::new(2, "Mie Goreng", 18000),
        MenuItem::new(3, "Ayam Goreng", 25001),
        MenuItem::new(4, "Es Teh", 6000),
        MenuItem::new(5, "Air Mineral", 5000),
    ]
}

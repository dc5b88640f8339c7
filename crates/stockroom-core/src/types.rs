//! # Domain Types
//!
//! The two records the inventory manager works with.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌─────────────────┐                    │
//! │  │    Product      │            │    Supplier     │                    │
//! │  │  ─────────────  │            │  ─────────────  │                    │
//! │  │  id (storage)   │            │  id (storage)   │                    │
//! │  │  sku (unique)   │            │  name           │                    │
//! │  │  quantity       │            │  email (unique) │                    │
//! │  │  name           │            └─────────────────┘                    │
//! │  │  price          │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Instances are transient: the shell rebuilds them from each query result
//! and drops them after printing.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Product
// =============================================================================

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier assigned by storage.
    pub id: i64,

    /// Stock Keeping Unit - unique business identifier.
    pub sku: String,

    /// Units on hand. Stock adjustments may drive this below zero.
    pub quantity: i64,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: f64,
}

impl Product {
    /// Builds a product from raw column values.
    ///
    /// A missing (NULL) quantity becomes 0.
    pub fn new(
        id: i64,
        sku: impl Into<String>,
        quantity: Option<i64>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Product {
            id,
            sku: sku.into(),
            quantity: quantity.unwrap_or(0),
            name: name.into(),
            price,
        }
    }


    /// Reduces the price by `percentage` percent and returns the new price.
    ///
    /// The percentage is not bounded: values above 100 give a negative
    /// price and negative values raise it.
    pub fn apply_discount(&mut self, percentage: f64) -> f64 {
        self.price *= 1.0 - percentage / 100.0;
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Sku: {} | Quantity: {} | Price: {:.2}",
            self.id, self.name, self.sku, self.quantity, self.price
        )
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    /// Unique contact address.
    pub email: String,
}

impl Supplier {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Supplier {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Email: {}",
            self.id, self.name, self.email
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(price: f64) -> Product {
        Product::new(7, "W100", Some(3), "Widget", price)
    }

    #[test]
    fn test_missing_quantity_defaults_to_zero() {
        let product = Product::new(1, "A1", None, "Anvil", 5.0);
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn test_apply_discount() {
        let mut product = widget(100.0);
        let price = product.apply_discount(10.0);
        assert!((price - 90.0).abs() < 1e-9);
        assert!((product.price - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_apply_discount_zero_is_noop() {
        let mut product = widget(42.5);
        assert_eq!(product.apply_discount(0.0), 42.5);
    }

    #[test]
    fn test_apply_discount_full() {
        let mut product = widget(100.0);
        assert_eq!(product.apply_discount(100.0), 0.0);
        assert_eq!(format!("{:.2}", product.price), "0.00");
    }

    #[test]
    fn test_apply_discount_is_unbounded() {
        let mut product = widget(100.0);
        assert!(product.apply_discount(150.0) < 0.0);

        let mut product = widget(100.0);
        assert!((product.apply_discount(-50.0) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_product_display() {
        assert_eq!(
            widget(19.5).to_string(),
            "ID: 7 | Name: Widget | Sku: W100 | Quantity: 3 | Price: 19.50"
        );
    }

    #[test]
    fn test_supplier_display() {
        let supplier = Supplier::new(4, "Acme Corp", "sales@acme.test");
        assert_eq!(
            supplier.to_string(),
            "ID: 4 | Name: Acme Corp | Email: sales@acme.test"
        );
    }

    #[test]
    fn test_product_serializes() {
        let json = serde_json::to_value(widget(1.25)).unwrap();
        assert_eq!(json["sku"], "W100");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["price"], 1.25);
    }
}

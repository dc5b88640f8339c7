//! # stockroom-core: Domain Model for Stockroom
//!
//! Plain product and supplier records, price helpers, and the validation
//! rules the interactive shell applies to operator input. Nothing in here
//! touches the database or the console.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stockroom-cli (menu loop)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   price   │  │ validation│                  │   │
//! │  │   │  Product  │  │  rounding │  │   rules   │                  │   │
//! │  │   │  Supplier │  │  parsing  │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               stockroom-db (persistence layer)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::Product;
//!
//! let mut widget = Product::new(1, "W100", None, "Widget", 100.0);
//! assert_eq!(widget.quantity, 0);
//!
//! let discounted = widget.apply_discount(10.0);
//! assert!((discounted - 90.0).abs() < 1e-9);
//! assert_eq!(
//!     widget.to_string(),
//!     "ID: 1 | Name: Widget | Sku: W100 | Quantity: 0 | Price: 90.00"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use price::{parse_price_value, round_to_cents};
pub use types::{Product, Supplier};

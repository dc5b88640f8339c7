//! # stockroom-db: Persistence Layer for Stockroom
//!
//! Owns one lazily-opened database connection and translates the inventory
//! operations into parameterised SQL.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Shell menu choice (e.g. "3. Update Stock")                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐        ┌──────────────────────────┐       │   │
//! │  │   │ InventoryStore │        │  repository/             │       │   │
//! │  │   │  (store.rs)    │◄───────│   product.rs             │       │   │
//! │  │   │ Option<Conn>   │        │   supplier.rs            │       │   │
//! │  │   │ open on demand │        │  (impl InventoryStore)   │       │   │
//! │  │   └────────────────┘        └──────────────────────────┘       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MySQL (production) / SQLite (tests, local files) via sqlx::Any        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Connection configuration and lifecycle
//! - [`repository`] - Product and supplier statements
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{DbConfig, InventoryStore};
//!
//! let mut store = InventoryStore::new(DbConfig::new("localhost", "inventory_system"));
//!
//! // First call opens the connection
//! let rows = store.get_all_products().await?;
//!
//! store.close_connection().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use repository::product::ProductRow;
pub use repository::supplier::SupplierRow;
pub use store::{DbConfig, InventoryStore};

//! # Repository Module
//!
//! The statements the inventory manager issues, grouped by table.
//!
//! ## Statement Contracts
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation            SQL (values always bound, never interpolated)    │
//! │  ───────────────────  ───────────────────────────────────────────────  │
//! │  get_all_products     SELECT * FROM products;                          │
//! │  insert_product       INSERT INTO products (sku, quantity, name, price)│
//! │                       VALUES (?, ?, ?, ?);                             │
//! │  update_stock         UPDATE products SET quantity = quantity + ?      │
//! │                       WHERE id = ?;                                    │
//! │  delete               DELETE FROM products WHERE id = ?;               │
//! │  insert_supplier      INSERT INTO suppliers (name, email)              │
//! │                       VALUES (?, ?);                                   │
//! │  get_all_suppliers    SELECT * FROM suppliers;                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both modules add methods to [`InventoryStore`](crate::InventoryStore), so
//! every operation goes through the store's connection check first.

pub mod product;
pub mod supplier;

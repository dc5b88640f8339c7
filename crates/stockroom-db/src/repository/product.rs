//! # Product Repository
//!
//! Database operations for the `products` table.
//!
//! ## Stock Adjustments
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Stock Update Strategy                            │
//! │                                                                     │
//! │  Delta update, never an absolute write:                             │
//! │     UPDATE products SET quantity = quantity + ? WHERE id = ?        │
//! │                                                                     │
//! │  +5 → restock, -3 → remove. The result is not clamped, so stock     │
//! │  may go negative. Zero affected rows means the id was not found.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, warn};

use crate::error::{DbError, DbResult};
use crate::store::InventoryStore;
use stockroom_core::{parse_price_value, round_to_cents, Product};

const SELECT_ALL: &str = "SELECT * FROM products;";
const INSERT: &str = "INSERT INTO products (sku, quantity, name, price) VALUES (?, ?, ?, ?);";
const UPDATE_STOCK: &str = "UPDATE products SET quantity = quantity + ? WHERE id = ?;";
const DELETE: &str = "DELETE FROM products WHERE id = ?;";

/// One row of the `products` table, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub sku: String,
    /// NULL in storage stays `None` here.
    pub quantity: Option<i64>,
    pub name: String,
    pub price: f64,
}

impl ProductRow {
    /// Decodes `id, sku, quantity, name, price` by position.
    ///
    /// A price column that is not a floating-point value is read as text
    /// and coerced.
    fn decode(row: &AnyRow) -> DbResult<Self> {
        let price = match row.try_get::<f64, _>(4) {
            Ok(price) => price,
            Err(_) => {
                let raw: String = row.try_get(4)?;
                parse_price_value(&raw).map_err(|e| DbError::Decode(e.to_string()))?
            }
        };

        Ok(ProductRow {
            id: row.try_get(0)?,
            sku: row.try_get(1)?,
            quantity: row.try_get(2)?,
            name: row.try_get(3)?,
            price,
        })
    }

    /// Builds the domain instance for display.
    pub fn into_product(self) -> Product {
        Product::new(self.id, self.sku, self.quantity, self.name, self.price)
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        row.into_product()
    }
}

impl InventoryStore {
    /// Returns every product row in table order.
    pub async fn get_all_products(&mut self) -> DbResult<Vec<ProductRow>> {
        let conn = self.connection().await?;

        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(conn)
            .await
            .map_err(DbError::from)
            .inspect_err(|err| error!(error = %err, "Product query failed"))?;

        let products = rows
            .iter()
            .map(ProductRow::decode)
            .collect::<DbResult<Vec<_>>>()?;

        debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    /// Inserts a product. The price is rounded to cents first.
    ///
    /// ## Returns
    /// * `Ok(())` - row created, id assigned by storage
    /// * `Err(DbError::UniqueViolation)` - SKU already exists; the existing
    ///   row is untouched
    pub async fn insert_product(
        &mut self,
        sku: &str,
        quantity: i64,
        name: &str,
        price: f64,
    ) -> DbResult<()> {
        debug!(sku = %sku, quantity, "Inserting product");

        let conn = self.connection().await?;

        sqlx::query(INSERT)
            .bind(sku)
            .bind(quantity)
            .bind(name)
            .bind(round_to_cents(price))
            .execute(conn)
            .await
            .map_err(|e| DbError::from(e).with_duplicate_value("sku", sku))
            .inspect_err(|err| match err {
                DbError::UniqueViolation { .. } => warn!(sku = %sku, "Duplicate SKU rejected"),
                other => error!(sku = %sku, error = %other, "Product insert failed"),
            })?;

        Ok(())
    }

    /// Adds `delta` (positive or negative) to a product's quantity.
    ///
    /// ## Returns
    /// Number of affected rows. `0` means no product has that id.
    pub async fn update_stock(&mut self, product_id: i64, delta: i64) -> DbResult<u64> {
        debug!(id = product_id, delta, "Updating stock");

        let conn = self.connection().await?;

        let result = sqlx::query(UPDATE_STOCK)
            .bind(delta)
            .bind(product_id)
            .execute(conn)
            .await
            .map_err(DbError::from)
            .inspect_err(|err| error!(id = product_id, error = %err, "Stock update failed"))?;

        Ok(result.rows_affected())
    }

    /// Deletes a product by id.
    ///
    /// ## Returns
    /// Number of affected rows. `0` means no product has that id.
    pub async fn delete(&mut self, product_id: i64) -> DbResult<u64> {
        debug!(id = product_id, "Deleting product");

        let conn = self.connection().await?;

        let result = sqlx::query(DELETE)
            .bind(product_id)
            .execute(conn)
            .await
            .map_err(DbError::from)
            .inspect_err(|err| error!(id = product_id, error = %err, "Product delete failed"))?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

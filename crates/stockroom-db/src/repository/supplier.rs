//! # Supplier Repository
//!
//! Database operations for the `suppliers` table. Suppliers are only ever
//! listed and added.

use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use tracing::{debug, error, warn};

use crate::error::{DbError, DbResult};
use crate::store::InventoryStore;
use stockroom_core::Supplier;

const SELECT_ALL: &str = "SELECT * FROM suppliers;";
const INSERT: &str = "INSERT INTO suppliers (name, email) VALUES (?, ?);";

/// One row of the `suppliers` table, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl<'r> FromRow<'r, AnyRow> for SupplierRow {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(SupplierRow {
            id: row.try_get(0)?,
            name: row.try_get(1)?,
            email: row.try_get(2)?,
        })
    }
}

impl SupplierRow {
    /// Builds the domain instance for display.
    pub fn into_supplier(self) -> Supplier {
        Supplier::new(self.id, self.name, self.email)
    }
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        row.into_supplier()
    }
}

impl InventoryStore {
    /// Returns every supplier row in table order.
    pub async fn get_all_suppliers(&mut self) -> DbResult<Vec<SupplierRow>> {
        let conn = self.connection().await?;

        let suppliers = sqlx::query_as::<_, SupplierRow>(SELECT_ALL)
            .fetch_all(conn)
            .await
            .map_err(DbError::from)
            .inspect_err(|err| error!(error = %err, "Supplier query failed"))?;

        debug!(count = suppliers.len(), "Loaded suppliers");
        Ok(suppliers)
    }

    /// Inserts a supplier.
    ///
    /// ## Returns
    /// * `Ok(())` - row created
    /// * `Err(DbError::UniqueViolation)` - email already registered; logged,
    ///   no row is added
    pub async fn insert_supplier(&mut self, name: &str, email: &str) -> DbResult<()> {
        debug!(email = %email, "Inserting supplier");

        let conn = self.connection().await?;

        sqlx::query(INSERT)
            .bind(name)
            .bind(email)
            .execute(conn)
            .await
            .map_err(|e| DbError::from(e).with_duplicate_value("email", email))
            .inspect_err(|err| match err {
                DbError::UniqueViolation { .. } => {
                    warn!(email = %email, "Duplicate supplier email rejected")
                }
                other => error!(email = %email, error = %other, "Supplier insert failed"),
            })?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_store;

    #[tokio::test]
    async fn test_insert_and_list_suppliers() {
        let mut store = memory_store().await;

        store
            .insert_supplier("Acme Corp", "sales@acme.test")
            .await
            .unwrap();
        store
            .insert_supplier("Globex", "orders@globex.test")
            .await
            .unwrap();

        let suppliers: Vec<Supplier> = store
            .get_all_suppliers()
            .await
            .unwrap()
            .into_iter()
            .map(Supplier::from)
            .collect();

        assert_eq!(suppliers.len(), 2);
        assert_eq!(suppliers[0].name, "Acme Corp");
        assert_eq!(suppliers[0].email, "sales@acme.test");
        assert_eq!(suppliers[1].name, "Globex");
    }

    #[tokio::test]
    async fn test_duplicate_email_adds_no_row() {
        let mut store = memory_store().await;

        store.insert_supplier("Acme", "a@b.com").await.unwrap();
        let err = store.insert_supplier("Acme Again", "a@b.com").await.unwrap_err();

        assert!(err.is_unique_violation());
        assert_eq!(err.to_string(), "Duplicate email: 'a@b.com' already exists");

        let suppliers = store.get_all_suppliers().await.unwrap();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].name, "Acme");
    }

    #[tokio::test]
    async fn test_same_name_different_email_is_allowed() {
        let mut store = memory_store().await;

        store.insert_supplier("Acme", "one@acme.test").await.unwrap();
        store.insert_supplier("Acme", "two@acme.test").await.unwrap();

        assert_eq!(store.get_all_suppliers().await.unwrap().len(), 2);
    }
}

//! # Interactive Shell
//!
//! The menu loop: read a choice, collect and validate fields, call the
//! store, print the outcome, show the menu again.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │        ┌──────────────┐  1-6   ┌──────────────────────────────┐        │
//! │   ┌───►│  Menu prompt │───────►│ action: prompt fields,       │        │
//! │   │    └──────┬───────┘        │ validate, call store, print  │        │
//! │   │           │                └──────────────┬───────────────┘        │
//! │   │           │ 0 / end of input              │ done, rejected field,  │
//! │   │           ▼                               │ or database error      │
//! │   │    close connection, stop                 │                        │
//! │   └───────────────────────────────────────────┘                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected field abandons the whole action; the operator starts over from
//! the menu. Database errors are printed and the loop continues. Only a
//! failing terminal (I/O error on input or output) ends the loop early.

use std::io::{self, BufRead, Write};

use stockroom_core::validation::{
    parse_price, parse_quantity, validate_email, validate_product_name, validate_sku,
    validate_supplier_name, ValidationResult,
};
use stockroom_core::{Product, Supplier};
use stockroom_db::{DbError, InventoryStore};
use tracing::{debug, info};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListProducts,
    AddProduct,
    AdjustStock,
    DeleteProduct,
    ListSuppliers,
    AddSupplier,
    Exit,
}

impl MenuChoice {
    /// Maps the operator's input (`"0"`-`"6"`) to a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ListProducts),
            "2" => Some(MenuChoice::AddProduct),
            "3" => Some(MenuChoice::AdjustStock),
            "4" => Some(MenuChoice::DeleteProduct),
            "5" => Some(MenuChoice::ListSuppliers),
            "6" => Some(MenuChoice::AddSupplier),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n--- Inventory System ---
1. View Products
2. Add Product
3. Update Stock
4. Delete Product
5. View Suppliers
6. Add Supplier
0. Exit";

/// The interactive shell over any line reader and writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Shell { input, output }
    }

    /// Consumes the shell, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the exit choice or end of input.
    ///
    /// The store's connection is closed on the way out.
    pub async fn run(&mut self, store: &mut InventoryStore) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;

            let Some(line) = self.prompt("Select an option: ")? else {
                debug!("End of input");
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => self.dispatch(choice, store).await?,
                None => writeln!(
                    self.output,
                    "\n[!] Invalid input. Please enter a number between 0 and 6."
                )?,
            }
        }

        store.close_connection().await;
        info!("Shell exited");
        Ok(())
    }

    async fn dispatch(&mut self, choice: MenuChoice, store: &mut InventoryStore) -> io::Result<()> {
        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::ListProducts => self.list_products(store).await,
            MenuChoice::AddProduct => self.add_product(store).await,
            MenuChoice::AdjustStock => self.adjust_stock(store).await,
            MenuChoice::DeleteProduct => self.delete_product(store).await,
            MenuChoice::ListSuppliers => self.list_suppliers(store).await,
            MenuChoice::AddSupplier => self.add_supplier(store).await,
            MenuChoice::Exit => Ok(()),
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    async fn list_products(&mut self, store: &mut InventoryStore) -> io::Result<()> {
        match store.get_all_products().await {
            Ok(rows) if rows.is_empty() => writeln!(self.output, "No products found."),
            Ok(rows) => {
                for row in rows {
                    writeln!(self.output, "{}", Product::from(row))?;
                }
                Ok(())
            }
            Err(err) => self.database_error(&err),
        }
    }

    async fn add_product(&mut self, store: &mut InventoryStore) -> io::Result<()> {
        let Some(sku) = self.field("SKU: ", validate_sku)? else {
            return Ok(());
        };
        let Some(quantity) = self.field("Quantity: ", parse_quantity)? else {
            return Ok(());
        };
        let Some(name) = self.field("Name: ", validate_product_name)? else {
            return Ok(());
        };
        let Some(price) = self.field("Price: ", parse_price)? else {
            return Ok(());
        };

        match store.insert_product(&sku, quantity, &name, price).await {
            Ok(()) => writeln!(self.output, "Success: {name} added to inventory"),
            Err(DbError::UniqueViolation { .. }) => writeln!(
                self.output,
                "Failure: Could not add product (SKU might be a duplicate)"
            ),
            Err(err) => writeln!(self.output, "Failure: Could not add product ({err})"),
        }
    }

    async fn adjust_stock(&mut self, store: &mut InventoryStore) -> io::Result<()> {
        let Some(id) = self.number("Product ID: ", "Error: Please enter valid numbers.")? else {
            return Ok(());
        };
        let Some(delta) =
            self.number("Amount to add/remove: ", "Error: Please enter valid numbers.")?
        else {
            return Ok(());
        };

        match store.update_stock(id, delta).await {
            Ok(0) => writeln!(self.output, "Error: Product with ID {id} was not found."),
            Ok(_) => writeln!(self.output, "Success! Updated stock for ID {id}."),
            Err(err) => self.database_error(&err),
        }
    }

    async fn delete_product(&mut self, store: &mut InventoryStore) -> io::Result<()> {
        let Some(id) = self.number("ID to delete: ", "Error: Please enter an existing ID")? else {
            return Ok(());
        };

        match store.delete(id).await {
            Ok(0) => writeln!(
                self.output,
                "Error: Product ID {id} does not exist in the database."
            ),
            Ok(_) => writeln!(self.output, "Success: Product {id} deleted."),
            Err(err) => self.database_error(&err),
        }
    }

    async fn list_suppliers(&mut self, store: &mut InventoryStore) -> io::Result<()> {
        match store.get_all_suppliers().await {
            Ok(rows) if rows.is_empty() => writeln!(self.output, "No suppliers found."),
            Ok(rows) => {
                for row in rows {
                    writeln!(self.output, "{}", Supplier::from(row))?;
                }
                Ok(())
            }
            Err(err) => self.database_error(&err),
        }
    }

    async fn add_supplier(&mut self, store: &mut InventoryStore) -> io::Result<()> {
        let Some(name) = self.field("Supplier name: ", validate_supplier_name)? else {
            return Ok(());
        };
        let Some(email) = self.field("Email: ", validate_email)? else {
            return Ok(());
        };

        match store.insert_supplier(&name, &email).await {
            Ok(()) => writeln!(self.output, "Success: Supplier {name} added"),
            Err(DbError::UniqueViolation { .. }) => writeln!(
                self.output,
                "Failure: Could not add supplier (email might be a duplicate)"
            ),
            Err(err) => writeln!(self.output, "Failure: Could not add supplier ({err})"),
        }
    }

    // =========================================================================
    // Input Helpers
    // =========================================================================

    /// Prints `label` and reads one line without its terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Prompts for a field and validates it.
    ///
    /// Prints the rule that was broken and returns `None` when the value is
    /// rejected (or input ended).
    fn field<T>(
        &mut self,
        label: &str,
        validate: impl Fn(&str) -> ValidationResult<T>,
    ) -> io::Result<Option<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };

        match validate(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                debug!(field = err.field(), "Input rejected");
                writeln!(self.output, "Error: {err}")?;
                Ok(None)
            }
        }
    }

    /// Prompts for an integer, printing `on_error` if it does not parse.
    fn number(&mut self, label: &str, on_error: &str) -> io::Result<Option<i64>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };

        match raw.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "{on_error}")?;
                Ok(None)
            }
        }
    }

    fn database_error(&mut self, err: &DbError) -> io::Result<()> {
        writeln!(self.output, "Database error: {err}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockroom_db::test_support::memory_store;
    use stockroom_db::DbConfig;

    /// Runs the shell over `script` and returns everything it printed.
    async fn run_script(store: &mut InventoryStore, script: &str) -> String {
        let mut shell = Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        shell.run(store).await.unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::ListProducts));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::AddSupplier));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("list"), None);
    }

    #[tokio::test]
    async fn test_exit_closes_connection() {
        let mut store = memory_store().await;
        assert!(store.is_connected());

        let out = run_script(&mut store, "0\n").await;

        assert!(out.contains("--- Inventory System ---"));
        assert!(out.contains("Select an option: "));
        assert!(!store.is_connected());
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let mut store = memory_store().await;
        run_script(&mut store, "").await;
        assert!(!store.is_connected());
    }

    #[tokio::test]
    async fn test_invalid_choice() {
        let mut store = memory_store().await;
        let out = run_script(&mut store, "9\n0\n").await;
        assert!(out.contains("[!] Invalid input. Please enter a number between 0 and 6."));
    }

    #[tokio::test]
    async fn test_add_and_list_product() {
        let mut store = memory_store().await;

        let out = run_script(&mut store, "2\nA1\n10\nWidget Pro 2\n19.5\n1\n0\n").await;

        assert!(out.contains("Success: Widget Pro 2 added to inventory"));
        assert!(out.contains("ID: 1 | Name: Widget Pro 2 | Sku: A1 | Quantity: 10 | Price: 19.50"));
    }

    #[tokio::test]
    async fn test_list_empty_tables() {
        let mut store = memory_store().await;
        let out = run_script(&mut store, "1\n5\n0\n").await;

        assert!(out.contains("No products found."));
        assert!(out.contains("No suppliers found."));
    }

    #[tokio::test]
    async fn test_duplicate_sku_reports_failure() {
        let mut store = memory_store().await;

        let out = run_script(
            &mut store,
            "2\nA1\n1\nFirst\n1\n2\nA1\n2\nSecond\n2\n0\n",
        )
        .await;

        assert!(out.contains("Success: First added to inventory"));
        assert!(out.contains("Failure: Could not add product (SKU might be a duplicate)"));
    }

    #[tokio::test]
    async fn test_product_validation_messages() {
        let cases = [
            ("2\n\n0\n", "Error: SKU cannot be empty"),
            ("2\n1abc\n0\n", "Error: SKU must start with a letter (A-Z)"),
            ("2\nA1\nmany\n0\n", "Error: You must enter an integer for Quantity"),
            ("2\nA1\n-1\n0\n", "Error: Quantity shouldn't be < 0"),
            ("2\nA1\n1\n  \n0\n", "Error: Name cannot be empty"),
            (
                "2\nA1\n1\nWidget!\n0\n",
                "Error: Special characters (symbols) are not allowed in Name",
            ),
            ("2\nA1\n1\nWidget\nfree\n0\n", "Error: Price should be a number"),
            ("2\nA1\n1\nWidget\n0\n0\n", "Error: Price should be a positive number"),
            ("2\nA1\n1\nWidget\n0.004\n0\n", "Error: Price should be a positive number"),
        ];

        for (script, expected) in cases {
            let mut store = memory_store().await;
            let out = run_script(&mut store, script).await;
            assert!(out.contains(expected), "expected {expected:?} in:\n{out}");
            assert!(!out.contains("added to inventory"));
        }
    }

    #[tokio::test]
    async fn test_added_price_is_stored_in_cents() {
        let mut store = memory_store().await;

        let out = run_script(
            &mut store,
            "2\nA1\n1\nWidget\n2.346\n2\nB2\n1\nBig\n1e307\n1\n0\n",
        )
        .await;

        assert!(out.contains("Sku: A1 | Quantity: 1 | Price: 2.35"));
        assert!(out.contains("Success: Big added to inventory"));
        assert!(!out.contains("inf"));
    }

    #[tokio::test]
    async fn test_rejected_field_returns_to_menu() {
        let mut store = memory_store().await;

        // After the bad SKU the next line is read as a menu choice, not a field.
        let out = run_script(&mut store, "2\n1abc\n5\n0\n").await;

        assert!(out.contains("Error: SKU must start with a letter (A-Z)"));
        assert!(out.contains("No suppliers found."));
        assert!(!out.contains("Quantity: "));
    }

    #[tokio::test]
    async fn test_adjust_stock() {
        let mut store = memory_store().await;
        store.insert_product("S1", 10, "Screw", 0.25).await.unwrap();

        let out = run_script(&mut store, "3\n1\n-4\n1\n0\n").await;

        assert!(out.contains("Success! Updated stock for ID 1."));
        assert!(out.contains("Quantity: 6"));
    }

    #[tokio::test]
    async fn test_adjust_stock_not_found() {
        let mut store = memory_store().await;
        let out = run_script(&mut store, "3\n42\n5\n0\n").await;
        assert!(out.contains("Error: Product with ID 42 was not found."));
    }

    #[tokio::test]
    async fn test_adjust_stock_bad_number() {
        let mut store = memory_store().await;
        let out = run_script(&mut store, "3\none\n0\n").await;
        assert!(out.contains("Error: Please enter valid numbers."));
    }

    #[tokio::test]
    async fn test_delete_product() {
        let mut store = memory_store().await;
        store.insert_product("D1", 1, "Doomed", 1.0).await.unwrap();

        let out = run_script(&mut store, "4\n1\n4\n1\n4\nx\n0\n").await;

        assert!(out.contains("Success: Product 1 deleted."));
        assert!(out.contains("Error: Product ID 1 does not exist in the database."));
        assert!(out.contains("Error: Please enter an existing ID"));
    }

    #[tokio::test]
    async fn test_add_and_list_supplier() {
        let mut store = memory_store().await;

        let out = run_script(&mut store, "6\n Acme Corp \na@b.com\n5\n0\n").await;

        assert!(out.contains("Success: Supplier Acme Corp added"));
        assert!(out.contains("ID: 1 | Name: Acme Corp | Email: a@b.com"));
    }

    #[tokio::test]
    async fn test_duplicate_supplier_email() {
        let mut store = memory_store().await;

        let out = run_script(
            &mut store,
            "6\nAcme\na@b.com\n6\nOther\na@b.com\n5\n0\n",
        )
        .await;

        assert!(out.contains("Failure: Could not add supplier (email might be a duplicate)"));
        assert_eq!(out.matches("| Email: a@b.com").count(), 1);
        assert!(!out.contains("Name: Other"));
    }

    #[tokio::test]
    async fn test_supplier_validation_messages() {
        let cases = [
            ("6\n   \n0\n", "Error: Supplier name cannot be empty"),
            ("6\nAcme\n\n0\n", "Error: Email cannot be empty"),
            ("6\nAcme\n a@b.com\n0\n", "Error: Email must not contain spaces"),
            ("6\nAcme\na @b.com\n0\n", "Error: Email must not contain spaces"),
            ("6\nAcme\n1a@b.com\n0\n", "Error: Email must start with a letter (A-Z)"),
        ];

        for (script, expected) in cases {
            let mut store = memory_store().await;
            let out = run_script(&mut store, script).await;
            assert!(out.contains(expected), "expected {expected:?} in:\n{out}");
        }
    }

    #[tokio::test]
    async fn test_database_errors_do_not_stop_the_loop() {
        // No schema loaded: every statement fails.
        let mut store = InventoryStore::new(DbConfig::in_memory());

        let out = run_script(&mut store, "1\n3\n1\n1\n5\n0\n").await;

        assert_eq!(out.matches("Database error: Query failed").count(), 3);
        assert!(out.ends_with("Select an option: "));
    }

    #[tokio::test]
    async fn test_connection_failure_is_reported() {
        let config = DbConfig::in_memory()
            .database_url("sqlite:///nonexistent-dir/stockroom/inventory.db?mode=ro");
        let mut store = InventoryStore::new(config);

        let out = run_script(&mut store, "1\n0\n").await;

        assert!(out.contains("Database error: Connection failed"));
        assert!(!store.is_connected());
    }
}

//! Shared fixtures for unit tests in this crate and in the shell.
//!
//! Compiled for this crate's tests and behind the `test-support` feature.

use crate::store::{DbConfig, InventoryStore};

const SQLITE_SCHEMA: &str = include_str!("../../../schema/sqlite.sql");

/// Splits a DDL script into executable statements, skipping comment-only
/// chunks.
fn statements(script: &str) -> impl Iterator<Item = &str> {
    script.split(';').map(str::trim).filter(|chunk| {
        chunk.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with("--")
        })
    })
}

/// Runs each statement of `script` on the store's connection.
pub async fn apply_script(store: &mut InventoryStore, script: &str) {
    for statement in statements(script) {
        let conn = store.connection().await.expect("connect");
        sqlx::query(statement)
            .execute(conn)
            .await
            .expect("apply schema statement");
    }
}

/// An in-memory SQLite store with the reference schema loaded.
pub async fn memory_store() -> InventoryStore {
    let mut store = InventoryStore::new(DbConfig::in_memory());
    apply_script(&mut store, SQLITE_SCHEMA).await;
    store
}

//! # Stockroom CLI
//!
//! Wires configuration, logging, the store and the interactive shell
//! together.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging                                                  │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: warn, info for stockroom crates; RUST_LOG overrides      │
//! │                                                                         │
//! │  2. Load Configuration                                                  │
//! │     • STOCKROOM_* environment variables (see config.rs)                 │
//! │                                                                         │
//! │  3. Create the Store                                                    │
//! │     • No connection yet: the first menu action opens it                 │
//! │                                                                         │
//! │  4. Run the Shell on stdin / stdout                                     │
//! │     • Exit choice or end of input closes the connection                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod shell;

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shell::Shell;
use stockroom_db::InventoryStore;

/// Runs the application until the operator exits.
///
/// Database failures never end the program; only an invalid configuration
/// or a broken terminal produce a failure exit code.
pub async fn run() -> ExitCode {
    init_tracing();

    info!("Starting Stockroom");

    let db_config = match config::load() {
        Ok(db_config) => db_config,
        Err(err) => {
            error!(error = %err, "Invalid configuration");
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(db = %db_config.redacted_url(), "Configuration loaded");

    let mut store = InventoryStore::new(db_config);
    let mut shell = Shell::new(io::stdin().lock(), io::stdout());

    match shell.run(&mut store).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Terminal I/O failed");
            store.close_connection().await;
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_db=trace` - Trace the persistence layer only
/// - Default: WARN, INFO for stockroom crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,stockroom_cli=info,stockroom_db=info,sqlx=warn")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

//! # Stockroom Entry Point
//!
//! Interactive inventory manager. The setup lives in `lib.rs` so it can be
//! tested without a terminal.

use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    stockroom_cli::run().await
}

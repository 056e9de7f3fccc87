//! hub-ledger CLI
//!
//! Command-line front end for the wallet ledger.
//!
//! # Usage
//!
//! ```bash
//! hub-ledger init --balance 100
//! hub-ledger balance
//! hub-ledger pix bob@example.com 40
//! hub-ledger pay 34191.79001 125.50
//! hub-ledger top-up 5511999999999 vivo 20
//! hub-ledger loan 1000
//! hub-ledger history -n 10
//! hub-ledger statement > statement.csv
//! ```
//!
//! The ledger document defaults to `data/db.json` and can be changed with
//! `--db` or `HUB_LEDGER_DB`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (declined action, missing or corrupt ledger, write failure, etc.)

use hub_ledger::{cli, observability};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    observability::init(args.verbose);

    let mut output = std::io::stdout();
    if let Err(e) = cli::execute(&args, &mut output) {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

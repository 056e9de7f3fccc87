//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `wallet`: The persisted wallet state
//! - `transaction`: Transaction kinds, identifiers and history entries
//! - `receipt`: Results returned by accepted actions
//! - `money`: Persistable amount range and currency formatting
//! - `error`: Error types for the ledger

pub mod error;
pub mod money;
pub mod receipt;
pub mod transaction;
pub mod wallet;

pub use error::LedgerError;
pub use money::{ensure_persistable, format_brl, MAX_AMOUNT};
pub use receipt::{LoanQuote, Receipt};
pub use transaction::{Transaction, TransactionId, TransactionKind};
pub use wallet::WalletState;

//! Wallet Ledger Library
//! # Overview
//!
//! This library provides the ledger core of a mobile wallet: a balance and an
//! append-only transaction history, persisted as one JSON document that is
//! rewritten after every accepted action.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (WalletState, Transaction, errors, receipts)
//! - [`config`] - Ledger location and action policies
//! - [`core`] - Business logic components:
//!   - [`core::ledger_store`] - Owns the state; the only path that changes the balance
//!   - [`core::engine`] - Admissibility checks for each wallet action
//!   - [`core::shared`] - Single-writer handle for multi-threaded callers
//! - [`io`] - Document format, file and memory backends, CSV statements
//! - [`cli`] - CLI arguments parsing and rendering
//!
//! # Wallet Actions
//!
//! - **PIX transfer**: Debit to a recipient key (requires sufficient balance)
//! - **Bill payment**: Debit for a boleto barcode (requires sufficient balance)
//! - **Phone top-up**: Debit for a carrier and number (no funds check by default)
//! - **Loan**: Credit of the principal; the total repayable is reported only
//!
//! # Invariants
//!
//! - `balance == opening balance + sum of all transaction amounts`
//! - Transactions are never modified, removed or reordered once appended
//! - Transaction ids are unique for the lifetime of the ledger

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;
pub mod types;

pub use crate::config::{LedgerConfig, MissingLedgerPolicy, TopUpPolicy};
pub use crate::core::{LedgerBackend, LedgerStore, SharedLedger, WalletEngine};
pub use crate::io::{JsonFileBackend, MemoryBackend};
pub use crate::types::{
    LedgerError, LoanQuote, Receipt, Transaction, TransactionId, TransactionKind, WalletState,
};

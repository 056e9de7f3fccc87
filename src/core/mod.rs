//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Persistence backend and clock abstractions
//! - `ledger_store` - Wallet state ownership and the only mutation path
//! - `engine` - Action-level policies (transfers, bills, top-ups, loans)
//! - `shared` - Mutex-guarded engine handle for multi-threaded callers

pub mod engine;
pub mod ledger_store;
pub mod shared;
pub mod traits;

pub use engine::WalletEngine;
pub use ledger_store::LedgerStore;
pub use shared::SharedLedger;
pub use traits::{Clock, FixedClock, LedgerBackend, SystemClock};

//! Core traits for ledger persistence and time
//!
//! These seams let the ledger store run against the JSON file on disk in
//! production and against an in-memory document and a fixed clock in tests.

use crate::types::{LedgerError, WalletState};
use chrono::{Local, NaiveDateTime};

/// Persistence backend for the wallet state
///
/// A backend holds exactly one document. `save` always replaces the whole
/// document; there is no incremental append.
pub trait LedgerBackend {
    /// Human-readable location of the document, used in errors and logs
    fn location(&self) -> String;

    /// Whether a document currently exists at this location
    fn exists(&self) -> bool;

    /// Read the persisted document
    ///
    /// Fails with `StorageUnavailable` if it is missing or malformed.
    fn load(&self) -> Result<WalletState, LedgerError>;

    /// Overwrite the persisted document with `state`
    ///
    /// Fails with `StorageWriteFailed` if the medium rejects the write.
    fn save(&mut self, state: &WalletState) -> Result<(), LedgerError>;
}

/// Source of transaction timestamps
pub trait Clock {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

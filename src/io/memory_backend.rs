//! In-memory ledger backend
//!
//! Keeps the "persisted" document in a field instead of on disk. Writes can
//! be made to fail on demand, which lets tests exercise the storage error
//! paths of the ledger store.

use crate::core::traits::LedgerBackend;
use crate::types::{LedgerError, WalletState};

const LOCATION: &str = "memory";

/// Ledger backend holding the document in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    stored: Option<WalletState>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryBackend {
    /// Backend whose document already holds `state`
    pub fn new(state: WalletState) -> Self {
        MemoryBackend {
            stored: Some(state),
            ..Self::default()
        }
    }

    /// Backend with no document, so loading fails
    pub fn empty() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The last successfully saved document
    pub fn stored(&self) -> Option<&WalletState> {
        self.stored.as_ref()
    }

    /// Number of successful saves
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl LedgerBackend for MemoryBackend {
    fn location(&self) -> String {
        LOCATION.to_string()
    }

    fn exists(&self) -> bool {
        self.stored.is_some()
    }

    fn load(&self) -> Result<WalletState, LedgerError> {
        self.stored
            .clone()
            .ok_or_else(|| LedgerError::storage_unavailable(LOCATION, "document not found"))
    }

    fn save(&mut self, state: &WalletState) -> Result<(), LedgerError> {
        if self.fail_writes {
            return Err(LedgerError::storage_write_failed(
                LOCATION,
                "write rejected",
            ));
        }
        self.stored = Some(state.clone());
        self.writes += 1;
        Ok(())
    }
}

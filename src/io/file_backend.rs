//! JSON file backend
//!
//! Persists the wallet state as a single JSON document on disk. Every save
//! rewrites the whole document: the new content is written to a temporary
//! file in the same directory, flushed, and renamed over the target, so a
//! failed write never leaves a truncated ledger behind.

use crate::config::MissingLedgerPolicy;
use crate::core::traits::LedgerBackend;
use crate::io::json_format::{decode_document, encode_document};
use crate::types::{LedgerError, WalletState};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Ledger backend storing the document at a file path
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
    missing: MissingLedgerPolicy,
}

impl JsonFileBackend {
    /// Create a backend for `path` that refuses to start without a document
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileBackend {
            path: path.into(),
            missing: MissingLedgerPolicy::Refuse,
        }
    }

    /// Set the behavior for a missing document
    pub fn with_missing_policy(mut self, missing: MissingLedgerPolicy) -> Self {
        self.missing = missing;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_atomically(&self, bytes: &[u8]) -> std::io::Result<()> {
        let directory = self.directory();
        fs::create_dir_all(directory)?;

        let mut file = NamedTempFile::new_in(directory)?;
        file.write_all(bytes)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl LedgerBackend for JsonFileBackend {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<WalletState, LedgerError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return match self.missing {
                    MissingLedgerPolicy::Refuse => Err(LedgerError::storage_unavailable(
                        self.location(),
                        "document not found",
                    )),
                    MissingLedgerPolicy::SeedEmpty => {
                        tracing::info!(path = %self.location(), "No ledger found, seeding empty wallet");
                        Ok(WalletState::default())
                    }
                };
            }
            Err(e) => return Err(LedgerError::storage_unavailable(self.location(), e)),
        };

        let state = decode_document(&bytes)
            .map_err(|reason| LedgerError::storage_unavailable(self.location(), reason))?;

        tracing::debug!(
            path = %self.location(),
            balance = %state.balance,
            transactions = state.transactions.len(),
            "Ledger loaded"
        );

        Ok(state)
    }

    fn save(&mut self, state: &WalletState) -> Result<(), LedgerError> {
        let bytes = encode_document(state)
            .map_err(|reason| LedgerError::storage_write_failed(self.location(), reason))?;

        self.write_atomically(&bytes)
            .map_err(|e| LedgerError::storage_write_failed(self.location(), e))?;

        tracing::debug!(path = %self.location(), bytes = bytes.len(), "Ledger saved");

        Ok(())
    }
}

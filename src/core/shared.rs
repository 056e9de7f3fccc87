//! Shared wallet engine
//!
//! The ledger itself has no concurrency control: every mutation rewrites the
//! whole document, so two unsynchronised writers would lose transactions.
//! `SharedLedger` puts a single mutex around the engine so callers on
//! different threads are serialized through one writer.

use crate::core::engine::WalletEngine;
use crate::core::traits::{Clock, LedgerBackend, SystemClock};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Cloneable handle to a mutex-guarded wallet engine
pub struct SharedLedger<B, C = SystemClock> {
    inner: Arc<Mutex<WalletEngine<B, C>>>,
}

impl<B, C> Clone for SharedLedger<B, C> {
    fn clone(&self) -> Self {
        SharedLedger {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: LedgerBackend, C: Clock> SharedLedger<B, C> {
    pub fn new(engine: WalletEngine<B, C>) -> Self {
        SharedLedger {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine
    ///
    /// The lock is held for the whole closure, so a check-then-commit action
    /// inside it cannot interleave with another writer.
    pub fn with<R>(&self, f: impl FnOnce(&mut WalletEngine<B, C>) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut engine)
    }

    pub fn balance(&self) -> Decimal {
        self.inner.lock().balance()
    }
}

//! Ledger store
//!
//! This module provides the `LedgerStore`, the single owner of the wallet
//! balance and its append-only transaction history. It is the only path
//! through which the balance can change.
//!
//! The store is responsible for:
//! - Loading the wallet state from a backend when opened
//! - Appending transactions and updating the balance (`record_transaction`)
//! - Persisting the full state synchronously after every mutation
//!
//! `record_transaction` performs no admissibility checks; the wallet engine
//! decides whether an action may commit before calling it.

use crate::core::traits::{Clock, LedgerBackend, SystemClock};
use crate::types::{
    ensure_persistable, LedgerError, Transaction, TransactionId, TransactionKind, WalletState,
};
use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

/// Owner of the wallet state and its persistence backend
#[derive(Debug)]
pub struct LedgerStore<B, C = SystemClock> {
    backend: B,
    clock: C,
    state: WalletState,
}

impl<B: LedgerBackend> LedgerStore<B, SystemClock> {
    /// Load the wallet state from `backend`
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the document is missing or malformed.
    pub fn open(backend: B) -> Result<Self, LedgerError> {
        Self::open_with_clock(backend, SystemClock)
    }
}

impl<B: LedgerBackend, C: Clock> LedgerStore<B, C> {
    /// Load the wallet state from `backend`, timestamping with `clock`
    pub fn open_with_clock(backend: B, clock: C) -> Result<Self, LedgerError> {
        let state = backend.load()?;
        tracing::info!(
            location = %backend.location(),
            balance = %state.balance,
            transactions = state.transactions.len(),
            "Ledger opened"
        );
        Ok(LedgerStore {
            backend,
            clock,
            state,
        })
    }

    /// Write a fresh wallet with `opening_balance` and no history to `backend`
    ///
    /// Any existing document is overwritten. The opening balance must be
    /// persistable (whole cents within [`crate::types::MAX_AMOUNT`]).
    pub fn initialize(
        mut backend: B,
        clock: C,
        opening_balance: Decimal,
    ) -> Result<Self, LedgerError> {
        ensure_persistable(opening_balance)?;
        let state = WalletState::with_balance(opening_balance);
        backend.save(&state)?;
        tracing::info!(
            location = %backend.location(),
            balance = %opening_balance,
            "Ledger initialized"
        );
        Ok(LedgerStore {
            backend,
            clock,
            state,
        })
    }

    /// Current wallet state
    pub fn state(&self) -> &WalletState {
        &self.state
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.state.balance
    }

    /// Full history in chronological order
    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    /// The `limit` most recent transactions, newest first
    pub fn recent(&self, limit: usize) -> Vec<&Transaction> {
        self.state.recent(limit).collect()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Append a transaction, apply it to the balance and persist
    ///
    /// Builds a transaction with a fresh unique id and the current time,
    /// appends it to the history, adds `amount` to the balance and saves the
    /// whole state. Returns the created transaction.
    ///
    /// # Errors
    ///
    /// - `ArithmeticOverflow` if the new balance is not representable; nothing
    ///   is changed.
    /// - `InvalidAmount` if the amount or the new balance could not be written
    ///   to the document exactly (see [`crate::types::money`]); nothing is
    ///   changed.
    /// - `StorageWriteFailed` if the backend rejects the write; the append and
    ///   the balance change are undone, so memory matches the last persisted
    ///   document.
    pub fn record_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Transaction, LedgerError> {
        let previous_balance = self.state.balance;
        let new_balance = previous_balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("record_transaction"))?;
        ensure_persistable(amount)?;
        if ensure_persistable(new_balance).is_err() {
            return Err(LedgerError::invalid_amount(
                amount,
                "resulting balance is outside the persistable range",
            ));
        }

        let transaction = Transaction {
            id: self.fresh_id(),
            kind,
            amount,
            description: description.into(),
            timestamp: truncate_to_minute(self.clock.now()),
        };

        self.state.transactions.push(transaction.clone());
        self.state.balance = new_balance;

        if let Err(e) = self.backend.save(&self.state) {
            self.state.transactions.pop();
            self.state.balance = previous_balance;
            tracing::error!(
                id = %transaction.id,
                kind = %transaction.kind,
                error = %e,
                "Persisting transaction failed, rolled back"
            );
            return Err(e);
        }

        tracing::debug!(
            id = %transaction.id,
            kind = %transaction.kind,
            amount = %transaction.amount,
            balance = %new_balance,
            "Transaction recorded"
        );

        Ok(transaction)
    }

    /// Persist the current state, overwriting the stored document
    pub fn save(&mut self) -> Result<(), LedgerError> {
        self.backend.save(&self.state)
    }

    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::generate();
            if !self.state.transactions.iter().any(|tx| tx.id == id) {
                return id;
            }
        }
    }
}

// The persisted layout has minute precision; truncating at creation keeps
// save-then-load an identity.
fn truncate_to_minute(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FixedClock;
    use crate::io::MemoryBackend;
    use crate::types::MAX_AMOUNT;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .and_then(|d| d.and_hms_milli_opt(9, 7, 42, 500))
                .unwrap(),
        )
    }

    fn store_with_balance(balance: Decimal) -> LedgerStore<MemoryBackend, FixedClock> {
        LedgerStore::open_with_clock(MemoryBackend::new(WalletState::with_balance(balance)), clock())
            .unwrap()
    }

    #[test]
    fn test_open_fails_without_document() {
        let result = LedgerStore::open(MemoryBackend::empty());
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::StorageUnavailable { .. }
        ));
    }

    #[test]
    fn test_initialize_writes_opening_balance() {
        let store =
            LedgerStore::initialize(MemoryBackend::empty(), clock(), Decimal::from(250)).unwrap();

        assert_eq!(store.balance(), Decimal::from(250));
        assert!(store.transactions().is_empty());
        assert_eq!(
            store.backend().stored(),
            Some(&WalletState::with_balance(Decimal::from(250)))
        );
    }

    #[test]
    fn test_record_transaction_appends_and_persists() {
        let mut store = store_with_balance(Decimal::new(10000, 2));

        let tx = store
            .record_transaction(TransactionKind::TransferOut, Decimal::new(-4000, 2), "Envio para bob")
            .unwrap();

        assert_eq!(store.balance(), Decimal::new(6000, 2));
        assert_eq!(store.transactions(), &[tx.clone()]);
        assert_eq!(tx.kind, TransactionKind::TransferOut);
        assert_eq!(tx.amount, Decimal::new(-4000, 2));
        assert_eq!(store.backend().stored(), Some(store.state()));
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn test_record_transaction_truncates_timestamp_to_minute() {
        let mut store = store_with_balance(Decimal::ZERO);

        let tx = store
            .record_transaction(TransactionKind::LoanCredit, Decimal::from(100), "Crédito contratado")
            .unwrap();

        assert_eq!(
            tx.timestamp,
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .and_then(|d| d.and_hms_opt(9, 7, 0))
                .unwrap()
        );
    }

    #[test]
    fn test_record_transaction_never_touches_existing_entries() {
        let mut store = store_with_balance(Decimal::from(500));

        let first = store
            .record_transaction(TransactionKind::TopUp, Decimal::from(-20), "Vivo - 1")
            .unwrap();
        let second = store
            .record_transaction(TransactionKind::TopUp, Decimal::from(-30), "Claro - 2")
            .unwrap();

        assert_eq!(store.transactions().len(), 2);
        assert_eq!(store.transactions()[0], first);
        assert_eq!(store.transactions()[1], second);
        assert_ne!(first.id, second.id);
        assert_eq!(store.recent(1), vec![&second]);
    }

    #[test]
    fn test_record_transaction_rolls_back_on_write_failure() {
        let mut store = store_with_balance(Decimal::new(10000, 2));
        store
            .record_transaction(TransactionKind::TopUp, Decimal::from(-10), "Oi - 1")
            .unwrap();
        let before = store.state().clone();

        store.backend_mut().set_fail_writes(true);
        let result = store.record_transaction(TransactionKind::TopUp, Decimal::from(-10), "Oi - 2");

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::StorageWriteFailed { .. }
        ));
        assert_eq!(store.state(), &before);
        assert_eq!(store.backend().stored(), Some(&before));
    }

    #[test]
    fn test_record_transaction_overflow_changes_nothing() {
        let mut store = store_with_balance(Decimal::MAX);

        let result = store.record_transaction(TransactionKind::LoanCredit, Decimal::MAX, "overflow");

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::ArithmeticOverflow { .. }
        ));
        assert_eq!(store.balance(), Decimal::MAX);
        assert!(store.transactions().is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_save_overwrites_backend_document() {
        let mut store = store_with_balance(Decimal::from(7));
        store.save().unwrap();
        assert_eq!(store.backend().write_count(), 1);
        assert_eq!(
            store.backend().stored(),
            Some(&WalletState::with_balance(Decimal::from(7)))
        );
    }
    #[test]
    fn test_record_transaction_rejects_unpersistable_amount() {
        let mut store = store_with_balance(Decimal::from(100));

        let result = store.record_transaction(
            TransactionKind::TransferOut,
            Decimal::new(-10_001, 4),
            "Envio para bob",
        );

        assert!(matches!(result.unwrap_err(), LedgerError::InvalidAmount { .. }));
        assert!(store.transactions().is_empty());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_record_transaction_keeps_balance_within_max() {
        let mut store = store_with_balance(-MAX_AMOUNT);

        let result = store.record_transaction(TransactionKind::TopUp, Decimal::from(-1), "Vivo - 1");

        assert!(matches!(result.unwrap_err(), LedgerError::InvalidAmount { .. }));
        assert_eq!(store.balance(), -MAX_AMOUNT);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_initialize_rejects_sub_cent_opening_balance() {
        let result = LedgerStore::initialize(MemoryBackend::empty(), clock(), Decimal::new(1, 3));

        assert!(matches!(result.unwrap_err(), LedgerError::InvalidAmount { .. }));
    }
}

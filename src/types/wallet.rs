//! Wallet state types
//!
//! `WalletState` is the whole persisted ledger: the current balance and the
//! append-only history that produced it.

use super::transaction::Transaction;
use rust_decimal::Decimal;

/// Wallet balance plus its transaction history
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalletState {
    /// Current spendable funds. May be negative (see top-up policy).
    pub balance: Decimal,

    /// Transactions in chronological (insertion) order
    pub transactions: Vec<Transaction>,
}

impl WalletState {
    /// Create a wallet with an opening balance and no history
    pub fn with_balance(balance: Decimal) -> Self {
        WalletState {
            balance,
            transactions: Vec::new(),
        }
    }

    /// Sum of all recorded transaction amounts, `None` on overflow
    pub fn history_total(&self) -> Option<Decimal> {
        self.transactions
            .iter()
            .try_fold(Decimal::ZERO, |total, tx| total.checked_add(tx.amount))
    }

    /// Balance the wallet held before any recorded transaction
    ///
    /// The ledger keeps `balance == opening_balance + history_total` at all
    /// times, so this is derived rather than stored. `None` if a loaded
    /// document's amounts overflow.
    pub fn opening_balance(&self) -> Option<Decimal> {
        self.history_total()
            .and_then(|total| self.balance.checked_sub(total))
    }

    /// The `limit` most recent transactions, newest first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev().take(limit)
    }
}

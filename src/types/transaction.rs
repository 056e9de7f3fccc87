//! Transaction-related types for the wallet ledger
//!
//! This module defines the transaction identifier, the enumerated transaction
//! kinds and the immutable `Transaction` entry appended to the wallet history.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Transaction identifier
///
/// New identifiers are random UUID v4 strings. Identifiers loaded from an
/// existing ledger document are kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        TransactionId(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        TransactionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kinds of wallet transactions
///
/// The set is open: labels that are not recognised when a ledger document is
/// loaded are kept as [`TransactionKind::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Outgoing PIX transfer
    ///
    /// Debits the wallet. Requires sufficient balance.
    TransferOut,

    /// Boleto (bill) payment
    ///
    /// Debits the wallet. Requires sufficient balance.
    BillPayment,

    /// Mobile phone top-up
    ///
    /// Debits the wallet. No balance check under the default policy.
    TopUp,

    /// Loan principal credited to the wallet
    LoanCredit,

    /// Any other label found in a loaded document
    Other(String),
}

impl TransactionKind {
    /// Label used in the persisted ledger document
    pub fn label(&self) -> &str {
        match self {
            TransactionKind::TransferOut => "PIX enviado",
            TransactionKind::BillPayment => "Pagamento",
            TransactionKind::TopUp => "Recarga",
            TransactionKind::LoanCredit => "Empréstimo",
            TransactionKind::Other(label) => label,
        }
    }

    /// Parse a persisted label. Never fails; unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "PIX enviado" => TransactionKind::TransferOut,
            "Pagamento" => TransactionKind::BillPayment,
            "Recarga" => TransactionKind::TopUp,
            "Empréstimo" => TransactionKind::LoanCredit,
            other => TransactionKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single entry in the wallet history
///
/// Transactions are created by the ledger store only and are never modified
/// after being appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique identifier, never reused
    pub id: TransactionId,

    /// What kind of operation produced this entry
    pub kind: TransactionKind,

    /// Signed amount
    ///
    /// Negative values are funds leaving the wallet, positive values are
    /// funds entering it.
    pub amount: Decimal,

    /// Counterparty or purpose of the transaction
    pub description: String,

    /// Local creation time, minute precision
    pub timestamp: NaiveDateTime,
}

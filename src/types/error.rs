//! Error types for the wallet ledger
//!
//! This module defines all error types that can occur while loading, mutating
//! or persisting the ledger. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Declined actions**: Insufficient funds, invalid amounts or inputs
//! - **Storage errors**: Ledger document missing, corrupt or not writable
//! - **Arithmetic errors**: Overflow in balance calculations

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Every variant carries enough context to render a single-line message to
/// the user. Declined actions never change wallet state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Balance is below the requested debit
    ///
    /// The action is declined; balance and history are unchanged and nothing
    /// is persisted.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the check
        balance: Decimal,
        /// Amount the action tried to debit
        requested: Decimal,
    },

    /// Ledger document is missing or malformed
    ///
    /// Fatal at startup unless the ledger is configured to seed an empty
    /// wallet when the document is missing.
    #[error("Ledger unavailable at {path}: {reason}")]
    StorageUnavailable {
        /// Location of the ledger document
        path: String,
        /// What went wrong
        reason: String,
    },

    /// Ledger document could not be written
    ///
    /// The mutation that triggered the write has been rolled back in memory.
    #[error("Failed to write ledger at {path}: {reason}")]
    StorageWriteFailed {
        /// Location of the ledger document
        path: String,
        /// What went wrong
        reason: String,
    },

    /// Amount is out of the accepted range for the action
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
        /// Why it was rejected
        reason: String,
    },

    /// A required text input is blank
    #[error("Missing required input: {field}")]
    InvalidInput {
        /// Name of the input field
        field: String,
    },

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// A ledger document already exists where a fresh one was requested
    #[error("Ledger already exists at {path} (use --force to overwrite)")]
    LedgerExists {
        /// Location of the existing document
        path: String,
    },

    /// Rendering results to the output stream failed
    #[error("Output error: {message}")]
    OutputFailed {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::OutputFailed {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::OutputFailed {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds { balance, requested }
    }

    /// Create a StorageUnavailable error
    pub fn storage_unavailable(path: impl Into<String>, reason: impl ToString) -> Self {
        LedgerError::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a StorageWriteFailed error
    pub fn storage_write_failed(path: impl Into<String>, reason: impl ToString) -> Self {
        LedgerError::StorageWriteFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal, reason: &str) -> Self {
        LedgerError::InvalidAmount {
            amount,
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: &str) -> Self {
        LedgerError::InvalidInput {
            field: field.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an OutputFailed error
    pub fn output_failed(error: impl ToString) -> Self {
        LedgerError::OutputFailed {
            message: error.to_string(),
        }
    }

    /// Whether this error is a declined action rather than a storage fault
    ///
    /// Declined actions leave the ledger untouched and are safe to retry with
    /// different input.
    pub fn is_declined(&self) -> bool {
        matches!(
            self,
            LedgerError::InsufficientFunds { .. }
                | LedgerError::InvalidAmount { .. }
                | LedgerError::InvalidInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { balance: Decimal::new(10000, 2), requested: Decimal::new(15000, 2) },
        "Insufficient funds: balance 100.00, requested 150.00"
    )]
    #[case::storage_unavailable(
        LedgerError::StorageUnavailable { path: "data/db.json".to_string(), reason: "not found".to_string() },
        "Ledger unavailable at data/db.json: not found"
    )]
    #[case::storage_write_failed(
        LedgerError::StorageWriteFailed { path: "data/db.json".to_string(), reason: "read-only".to_string() },
        "Failed to write ledger at data/db.json: read-only"
    )]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: Decimal::new(50, 2), reason: "below minimum 1.00".to_string() },
        "Invalid amount 0.50: below minimum 1.00"
    )]
    #[case::invalid_input(
        LedgerError::InvalidInput { field: "pix key".to_string() },
        "Missing required input: pix key"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "record_transaction".to_string() },
        "Arithmetic overflow in record_transaction"
    )]
    #[case::ledger_exists(
        LedgerError::LedgerExists { path: "db.json".to_string() },
        "Ledger already exists at db.json (use --force to overwrite)"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(Decimal::ONE, Decimal::TWO),
        LedgerError::InsufficientFunds { balance: Decimal::ONE, requested: Decimal::TWO }
    )]
    #[case::storage_unavailable(
        LedgerError::storage_unavailable("db.json", "corrupt"),
        LedgerError::StorageUnavailable { path: "db.json".to_string(), reason: "corrupt".to_string() }
    )]
    #[case::invalid_input(
        LedgerError::invalid_input("barcode"),
        LedgerError::InvalidInput { field: "barcode".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_converts_to_output_failed() {
        let error: LedgerError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(
            error,
            LedgerError::OutputFailed {
                message: "pipe closed".to_string()
            }
        );
        assert!(!error.is_declined());
    }

    #[rstest]
    #[case::declined_funds(LedgerError::insufficient_funds(Decimal::ONE, Decimal::TWO), true)]
    #[case::declined_input(LedgerError::invalid_input("barcode"), true)]
    #[case::storage(LedgerError::storage_write_failed("db.json", "disk full"), false)]
    fn test_is_declined(#[case] error: LedgerError, #[case] declined: bool) {
        assert_eq!(error.is_declined(), declined);
    }
}

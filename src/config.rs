//! Ledger configuration
//!
//! Holds the location of the ledger document and the policies the wallet
//! engine applies to each action. Values come from CLI arguments (see
//! [`crate::cli::CliArgs::to_ledger_config`]) and fall back to the defaults
//! below when missing or out of range.

use rust_decimal::Decimal;
use std::path::PathBuf;

/// What to do when the ledger document does not exist at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingLedgerPolicy {
    /// Fail with `StorageUnavailable`
    #[default]
    Refuse,
    /// Start from an empty wallet (balance 0, no history)
    ///
    /// The document is created by the first accepted action.
    SeedEmpty,
}

/// Admissibility rule for phone top-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopUpPolicy {
    /// Accept every top-up, even when it drives the balance negative
    ///
    /// Overdrafts are logged as warnings.
    #[default]
    AllowOverdraft,
    /// Apply the same funds check as transfers and bill payments
    RequireFunds,
}

/// Configuration for the ledger store and wallet engine
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    /// Path of the JSON ledger document
    pub db_path: PathBuf,
    /// Behavior when the document is missing
    pub missing_ledger: MissingLedgerPolicy,
    /// Funds check for top-ups
    pub top_up: TopUpPolicy,
    /// Interest applied to loan principal to compute the total repayable
    pub interest_rate: Decimal,
    /// Smallest amount accepted for transfers, bills and top-ups
    pub min_action_amount: Decimal,
    /// Smallest loan principal accepted
    pub min_loan_amount: Decimal,
    /// Number of transactions shown by default in the recent history
    pub history_limit: usize,
}

/// Default location of the ledger document
pub const DEFAULT_DB_PATH: &str = "data/db.json";

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            missing_ledger: MissingLedgerPolicy::default(),
            top_up: TopUpPolicy::default(),
            interest_rate: Decimal::new(8, 2),
            min_action_amount: Decimal::new(100, 2),
            min_loan_amount: Decimal::new(10000, 2),
            history_limit: 5,
        }
    }
}

impl LedgerConfig {
    /// Replace out-of-range values with their defaults
    ///
    /// A negative interest rate, a non-positive minimum amount or a zero
    /// history limit are reset with a warning.
    pub fn validated(self) -> Self {
        let default = Self::default();

        let interest_rate = if self.interest_rate.is_sign_negative() {
            tracing::warn!(
                interest_rate = %self.interest_rate,
                default = %default.interest_rate,
                "Invalid interest_rate, using default"
            );
            default.interest_rate
        } else {
            self.interest_rate
        };

        let min_action_amount = if self.min_action_amount <= Decimal::ZERO {
            tracing::warn!(
                min_action_amount = %self.min_action_amount,
                default = %default.min_action_amount,
                "Invalid min_action_amount, using default"
            );
            default.min_action_amount
        } else {
            self.min_action_amount
        };

        let min_loan_amount = if self.min_loan_amount <= Decimal::ZERO {
            tracing::warn!(
                min_loan_amount = %self.min_loan_amount,
                default = %default.min_loan_amount,
                "Invalid min_loan_amount, using default"
            );
            default.min_loan_amount
        } else {
            self.min_loan_amount
        };

        let history_limit = if self.history_limit == 0 {
            tracing::warn!(
                default = default.history_limit,
                "Invalid history_limit (0), using default"
            );
            default.history_limit
        } else {
            self.history_limit
        };

        Self {
            interest_rate,
            min_action_amount,
            min_loan_amount,
            history_limit,
            ..self
        }
    }
}

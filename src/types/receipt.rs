//! Results of accepted wallet actions

use super::money::format_brl;
use super::transaction::{Transaction, TransactionKind};
use rust_decimal::Decimal;

/// Loan simulation: principal, rate and the total to repay
///
/// The total is reported to the user only; it is never stored as a
/// liability in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanQuote {
    pub principal: Decimal,
    pub interest_rate: Decimal,
    /// `principal * (1 + interest_rate)`
    pub total_repayable: Decimal,
}

/// Outcome of an accepted action
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// The transaction the action committed
    pub transaction: Transaction,

    /// Present for loans only
    pub loan: Option<LoanQuote>,
}

impl Receipt {
    /// Human-readable confirmation for the user
    pub fn message(&self) -> String {
        match (&self.transaction.kind, &self.loan) {
            (TransactionKind::TransferOut, _) => "PIX sent successfully!".to_string(),
            (TransactionKind::BillPayment, _) => "Payment completed!".to_string(),
            (TransactionKind::TopUp, _) => "Top-up completed!".to_string(),
            (TransactionKind::LoanCredit, Some(quote)) => format!(
                "Loan approved! Total to repay: {}",
                format_brl(quote.total_repayable)
            ),
            (TransactionKind::LoanCredit, None) => "Loan approved!".to_string(),
            (TransactionKind::Other(label), _) => format!("{} recorded", label),
        }
    }
}

//! Wallet engine
//!
//! This module provides the `WalletEngine` that turns user actions into
//! ledger transactions. Each action is a single check-then-commit:
//! admissibility is decided first, and only accepted actions reach
//! `LedgerStore::record_transaction`.
//!
//! The engine enforces business rules such as:
//! - Minimum amounts taken from the action forms (1.00, loans 100.00)
//! - Amounts limited to whole cents within the persistable range
//! - Funds checks for transfers and bill payments
//! - The configured top-up policy (overdraft allowed by default)

use crate::config::{LedgerConfig, TopUpPolicy};
use crate::core::ledger_store::LedgerStore;
use crate::core::traits::{Clock, LedgerBackend, SystemClock};
use crate::types::{ensure_persistable, LedgerError, LoanQuote, Receipt, TransactionKind};
use rust_decimal::Decimal;

/// Description used for every loan credit
pub const LOAN_DESCRIPTION: &str = "Crédito contratado";

/// Action-level policies on top of a ledger store
#[derive(Debug)]
pub struct WalletEngine<B, C = SystemClock> {
    store: LedgerStore<B, C>,
    config: LedgerConfig,
}

impl<B: LedgerBackend, C: Clock> WalletEngine<B, C> {
    /// Create a new WalletEngine over an opened store
    pub fn new(store: LedgerStore<B, C>, config: LedgerConfig) -> Self {
        WalletEngine { store, config }
    }

    pub fn store(&self) -> &LedgerStore<B, C> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LedgerStore<B, C> {
        &mut self.store
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn balance(&self) -> Decimal {
        self.store.balance()
    }

    pub fn into_store(self) -> LedgerStore<B, C> {
        self.store
    }

    /// Send a PIX transfer to `key`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key is blank
    /// - The amount is below the minimum action amount
    /// - The amount exceeds the balance (`InsufficientFunds`)
    /// - Persisting the transaction fails
    pub fn send_transfer(&mut self, key: &str, amount: Decimal) -> Result<Receipt, LedgerError> {
        let key = require_text(key, "pix key")?;
        self.check_amount(amount, self.config.min_action_amount)?;
        self.ensure_funds(amount, "send_transfer")?;

        let transaction = self.store.record_transaction(
            TransactionKind::TransferOut,
            -amount,
            format!("Envio para {}", key),
        )?;

        tracing::info!(id = %transaction.id, key = %key, amount = %amount, "PIX sent");

        Ok(Receipt {
            transaction,
            loan: None,
        })
    }

    /// Pay the bill identified by `barcode`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The barcode is blank
    /// - The amount is below the minimum action amount
    /// - The amount exceeds the balance (`InsufficientFunds`)
    /// - Persisting the transaction fails
    pub fn pay_bill(&mut self, barcode: &str, amount: Decimal) -> Result<Receipt, LedgerError> {
        let barcode = require_text(barcode, "barcode")?;
        self.check_amount(amount, self.config.min_action_amount)?;
        self.ensure_funds(amount, "pay_bill")?;

        let transaction = self.store.record_transaction(
            TransactionKind::BillPayment,
            -amount,
            format!("Boleto {}", barcode),
        )?;

        tracing::info!(id = %transaction.id, barcode = %barcode, amount = %amount, "Bill paid");

        Ok(Receipt {
            transaction,
            loan: None,
        })
    }

    /// Top up the phone `number` with `carrier`
    ///
    /// Under [`TopUpPolicy::AllowOverdraft`] there is no funds check and the
    /// balance may become negative; such overdrafts are logged as warnings.
    /// Under [`TopUpPolicy::RequireFunds`] the transfer funds check applies.
    pub fn top_up_phone(
        &mut self,
        number: &str,
        carrier: &str,
        amount: Decimal,
    ) -> Result<Receipt, LedgerError> {
        let number = require_text(number, "phone number")?;
        let carrier = require_text(carrier, "carrier")?;
        self.check_amount(amount, self.config.min_action_amount)?;

        if self.config.top_up == TopUpPolicy::RequireFunds {
            self.ensure_funds(amount, "top_up_phone")?;
        }

        let transaction = self.store.record_transaction(
            TransactionKind::TopUp,
            -amount,
            format!("{} - {}", carrier, number),
        )?;

        if self.store.balance() < Decimal::ZERO {
            tracing::warn!(
                id = %transaction.id,
                balance = %self.store.balance(),
                "Top-up accepted without funds check, balance is negative"
            );
        }

        tracing::info!(id = %transaction.id, carrier = %carrier, amount = %amount, "Phone topped up");

        Ok(Receipt {
            transaction,
            loan: None,
        })
    }

    /// Compute the total repayable for a loan of `amount` without contracting it
    pub fn quote_loan(&self, amount: Decimal) -> Result<LoanQuote, LedgerError> {
        self.check_amount(amount, self.config.min_loan_amount)?;

        let rate = self.config.interest_rate;
        let total_repayable = Decimal::ONE
            .checked_add(rate)
            .and_then(|factor| amount.checked_mul(factor))
            .ok_or_else(|| LedgerError::arithmetic_overflow("quote_loan"))?;

        Ok(LoanQuote {
            principal: amount,
            interest_rate: rate,
            total_repayable,
        })
    }

    /// Contract a loan, crediting the principal immediately
    ///
    /// The total repayable is returned in the receipt and not recorded as a
    /// liability.
    pub fn contract_loan(&mut self, amount: Decimal) -> Result<Receipt, LedgerError> {
        let quote = self.quote_loan(amount)?;

        let transaction =
            self.store
                .record_transaction(TransactionKind::LoanCredit, amount, LOAN_DESCRIPTION)?;

        tracing::info!(
            id = %transaction.id,
            principal = %quote.principal,
            total_repayable = %quote.total_repayable,
            "Loan contracted"
        );

        Ok(Receipt {
            transaction,
            loan: Some(quote),
        })
    }

    fn check_amount(&self, amount: Decimal, minimum: Decimal) -> Result<(), LedgerError> {
        if let Err(e) = ensure_persistable(amount) {
            tracing::warn!(amount = %amount, "Amount outside the persistable range");
            return Err(e);
        }
        if amount < minimum {
            tracing::warn!(amount = %amount, minimum = %minimum, "Amount below minimum");
            return Err(LedgerError::invalid_amount(
                amount,
                &format!("below minimum {:.2}", minimum),
            ));
        }
        Ok(())
    }

    fn ensure_funds(&self, amount: Decimal, operation: &str) -> Result<(), LedgerError> {
        let balance = self.store.balance();
        if amount > balance {
            tracing::warn!(
                operation,
                balance = %balance,
                requested = %amount,
                "Declined: insufficient funds"
            );
            return Err(LedgerError::insufficient_funds(balance, amount));
        }
        Ok(())
    }
}

fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str, LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid_input(field));
    }
    Ok(trimmed)
}

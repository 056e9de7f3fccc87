//! Command execution and rendering
//!
//! Opens the ledger named by the configuration, runs one command through the
//! wallet engine and renders the result to `output`.

use crate::cli::args::{CliArgs, Command};
use crate::config::LedgerConfig;
use crate::core::{LedgerBackend, LedgerStore, SystemClock, WalletEngine};
use crate::io::json_format::format_timestamp;
use crate::io::{write_statement_csv, JsonFileBackend};
use crate::types::{format_brl, LedgerError, LoanQuote, Receipt, Transaction};
use rust_decimal::Decimal;
use std::io::Write;

/// Execute the parsed command line, writing user-facing output to `output`
pub fn execute(args: &CliArgs, output: &mut dyn Write) -> Result<(), LedgerError> {
    let config = args.to_ledger_config();
    let backend =
        JsonFileBackend::new(&config.db_path).with_missing_policy(config.missing_ledger);

    if let Command::Init { balance, force } = &args.command {
        if backend.exists() && !force {
            return Err(LedgerError::LedgerExists {
                path: backend.location(),
            });
        }
        let store = LedgerStore::initialize(backend, SystemClock, *balance)?;
        writeln!(
            output,
            "Ledger created at {} with balance {}",
            config.db_path.display(),
            format_brl(store.balance())
        )?;
        return Ok(());
    }

    let store = LedgerStore::open(backend)?;
    let mut engine = WalletEngine::new(store, config.clone());

    run(&args.command, &mut engine, &config, output)
}

fn run<B: LedgerBackend>(
    command: &Command,
    engine: &mut WalletEngine<B>,
    config: &LedgerConfig,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    match command {
        Command::Init { .. } => Ok(()),
        Command::Balance => Ok(writeln!(output, "Balance: {}", format_brl(engine.balance()))?),
        Command::History { .. } => {
            let recent = engine.store().recent(config.history_limit);
            if recent.is_empty() {
                return Ok(writeln!(output, "No transactions yet")?);
            }
            for tx in recent {
                writeln!(output, "{}", format_transaction(tx))?;
            }
            Ok(())
        }
        Command::Pix { key, amount } => {
            let receipt = engine.send_transfer(key, *amount)?;
            render_receipt(&receipt, engine.balance(), output)
        }
        Command::Pay { barcode, amount } => {
            let receipt = engine.pay_bill(barcode, *amount)?;
            render_receipt(&receipt, engine.balance(), output)
        }
        Command::TopUp {
            number,
            carrier,
            amount,
        } => {
            let receipt = engine.top_up_phone(number, carrier.name(), *amount)?;
            render_receipt(&receipt, engine.balance(), output)
        }
        Command::Loan { amount } => {
            let receipt = engine.contract_loan(*amount)?;
            render_receipt(&receipt, engine.balance(), output)
        }
        Command::QuoteLoan { amount } => {
            let quote = engine.quote_loan(*amount)?;
            render_quote(&quote, output)
        }
        Command::Statement => write_statement_csv(engine.store().transactions(), output),
    }
}

fn render_receipt(
    receipt: &Receipt,
    balance: Decimal,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    writeln!(output, "{}", receipt.message())?;
    writeln!(output, "{}", format_transaction(&receipt.transaction))?;
    writeln!(output, "Balance: {}", format_brl(balance))?;
    Ok(())
}

fn render_quote(quote: &LoanQuote, output: &mut dyn Write) -> Result<(), LedgerError> {
    writeln!(
        output,
        "Loan of {} at {}% interest: total to repay {}",
        format_brl(quote.principal),
        (quote.interest_rate * Decimal::ONE_HUNDRED).normalize(),
        format_brl(quote.total_repayable)
    )?;
    Ok(())
}

/// One history line: kind | description | amount | date
pub fn format_transaction(tx: &Transaction) -> String {
    format!(
        "{} | {} | {} | {}",
        tx.kind,
        tx.description,
        format_brl(tx.amount),
        format_timestamp(&tx.timestamp)
    )
}

use crate::config::{LedgerConfig, MissingLedgerPolicy, TopUpPolicy, DEFAULT_DB_PATH};
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Mobile wallet ledger: PIX transfers, bill payments, top-ups and loans
#[derive(Parser, Debug)]
#[command(name = "hub-ledger")]
#[command(about = "Mobile wallet ledger backed by a JSON document", long_about = None)]
pub struct CliArgs {
    /// Path of the JSON ledger document
    #[arg(
        long = "db",
        value_name = "PATH",
        env = "HUB_LEDGER_DB",
        default_value = DEFAULT_DB_PATH,
        global = true
    )]
    pub db_path: PathBuf,

    /// Start from an empty wallet when the ledger document is missing
    #[arg(long = "seed-if-missing", global = true)]
    pub seed_if_missing: bool,

    /// Decline top-ups that exceed the balance
    #[arg(long = "require-funds-for-top-up", global = true)]
    pub require_funds_for_top_up: bool,

    /// Loan interest rate as a fraction (default: 0.08)
    #[arg(long = "interest-rate", value_name = "RATE", global = true)]
    pub interest_rate: Option<Decimal>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Wallet actions and queries
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a fresh ledger document
    Init {
        /// Opening balance
        #[arg(long, default_value = "0")]
        balance: Decimal,
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
    /// Show the current balance
    Balance,
    /// Show the most recent transactions, newest first
    History {
        /// Number of transactions to show (default: 5)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
    /// Send a PIX transfer
    Pix {
        /// Recipient PIX key
        key: String,
        amount: Decimal,
    },
    /// Pay a bill (boleto)
    Pay {
        /// Barcode or reference of the bill
        barcode: String,
        amount: Decimal,
    },
    /// Top up a mobile phone
    TopUp {
        /// Phone number
        number: String,
        #[arg(value_enum, ignore_case = true)]
        carrier: Carrier,
        amount: Decimal,
    },
    /// Contract a loan; the principal is credited immediately
    Loan { amount: Decimal },
    /// Show the total repayable for a loan without contracting it
    QuoteLoan { amount: Decimal },
    /// Write the full history as CSV to stdout
    Statement,
}

/// Supported mobile carriers
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Carrier {
    Vivo,
    Claro,
    Tim,
    Oi,
}

impl Carrier {
    /// Display name used in transaction descriptions
    pub fn name(&self) -> &'static str {
        match self {
            Carrier::Vivo => "Vivo",
            Carrier::Claro => "Claro",
            Carrier::Tim => "TIM",
            Carrier::Oi => "Oi",
        }
    }
}

impl CliArgs {
    /// Create a LedgerConfig from CLI arguments
    ///
    /// Values not given on the command line fall back to the defaults;
    /// out-of-range values are reset by [`LedgerConfig::validated`].
    pub fn to_ledger_config(&self) -> LedgerConfig {
        let default = LedgerConfig::default();

        let history_limit = match &self.command {
            Command::History { limit: Some(limit) } => *limit,
            _ => default.history_limit,
        };

        LedgerConfig {
            db_path: self.db_path.clone(),
            missing_ledger: if self.seed_if_missing {
                MissingLedgerPolicy::SeedEmpty
            } else {
                MissingLedgerPolicy::Refuse
            },
            top_up: if self.require_funds_for_top_up {
                TopUpPolicy::RequireFunds
            } else {
                TopUpPolicy::AllowOverdraft
            },
            interest_rate: self.interest_rate.unwrap_or(default.interest_rate),
            history_limit,
            ..default
        }
        .validated()
    }
}

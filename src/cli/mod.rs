// CLI module
// Command-line interface, argument parsing and command execution

mod args;
mod commands;

pub use args::{Carrier, CliArgs, Command};
pub use commands::{execute, format_transaction};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments, missing required arguments, or
/// --help flag), clap will automatically display an error message or help
/// text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

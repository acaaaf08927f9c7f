//! cli
//!
//! Command-line interface layer for Refoliate.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and flags
//! - Resolve the output configuration from flags
//! - Delegate to the align command
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves the
//! [`Output`](crate::ui::output::Output) configuration, and dispatches to
//! [`commands::align`], which drives the Scan -> Gate -> Plan -> Execute
//! lifecycle. All tree mutation happens inside the command.

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;

use crate::ui::output::Output;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let out = Output::from_flags(cli.colorize, cli.debug, cli.dry_run);

    commands::align(
        &out,
        &cli.se_dir,
        &cli.qnl_dir,
        cli.dry_run,
        !cli.no_check_permissions,
    )
}

//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Validation
//!
//! Both positional paths are validated at parse time: each must exist and be
//! a directory, and each is canonicalized to an absolute, symlink-free path
//! before the command sees it. A failing path is a usage error (exit code 2)
//! and nothing is scanned.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

/// Refoliate - rename delivered page directories after their scan masters
#[derive(Parser, Debug)]
#[command(name = "refoliate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Delivery tree holding the per-page master images
    #[arg(value_name = "SE_DIR", value_parser = parse_existing_dir)]
    pub se_dir: PathBuf,

    /// Target tree holding the numeric page directories to rename
    #[arg(value_name = "QNL_DIR", value_parser = parse_existing_dir)]
    pub qnl_dir: PathBuf,

    /// Plan and log every rename without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Highlight source and destination paths in plan output
    #[arg(short, long)]
    pub colorize: bool,

    /// Show each planned rename
    #[arg(short, long)]
    pub debug: bool,

    /// Skip the target-tree write permission check
    #[arg(short = 'p', long, hide = true)]
    pub no_check_permissions: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Parse-time validation for the positional directory arguments.
fn parse_existing_dir(raw: &str) -> Result<PathBuf, String> {
    let path = fs::canonicalize(raw).map_err(|e| format!("'{raw}': {e}"))?;
    if !path.is_dir() {
        return Err(format!("'{raw}' is not a directory"));
    }
    Ok(path)
}

//! Refoliate binary entry point.
//!
//! All behavior lives in the library; this shim runs the CLI and maps the
//! error chain onto stderr and a non-zero exit status.

use std::process::ExitCode;

use refoliate::cli;
use refoliate::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Alternate format renders the whole context chain on one line.
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

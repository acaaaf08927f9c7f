//! core::exec
//!
//! Rename executor: applies a [`RenamePlan`] pair by pair.
//!
//! # Failure model
//!
//! Renames are independent; no transaction spans the batch. A failed rename
//! aborts the remaining pairs and propagates with context naming the failing
//! pair. Already-applied renames stay applied - re-running after the cause is
//! fixed skips them naturally, because renamed directories no longer match
//! the numeric filter.

use std::fs;

use anyhow::{Context as _, Result};

use crate::core::plan::RenamePlan;
use crate::ui::output::Output;

/// Apply the plan in positional order.
///
/// Each pair is logged at debug verbosity before it is acted on; in dry-run
/// mode the log line is all that happens.
///
/// # Errors
///
/// Propagates the OS error of the first failed rename, wrapped with the pair
/// being attempted.
pub fn execute(plan: &RenamePlan, dry_run: bool, out: &Output) -> Result<()> {
    for pair in plan.pairs() {
        out.debug(format!(
            "rename {} -> {}",
            out.source(&pair.source.display().to_string()),
            out.destination(&pair.destination.display().to_string())
        ));

        if !dry_run {
            fs::rename(&pair.source, &pair.destination).with_context(|| {
                format!(
                    "failed to rename {} to {}",
                    pair.source.display(),
                    pair.destination.display()
                )
            })?;
        }
    }

    Ok(())
}

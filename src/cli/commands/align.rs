//! align command - rename numeric page directories after their masters
//!
//! # Lifecycle
//!
//! Scan -> Gate -> Plan -> Execute:
//!
//! 1. Derive the work identifier and list both trees with the shared
//!    comparator
//! 2. Run the pre-flight gate; any failed check aborts with zero renames
//! 3. Pair the two ordered listings positionally
//! 4. Walk the plan in order, logging each pair and renaming unless dry
//!
//! # Failure model
//!
//! Gate failures exit before any mutation. A rename failing mid-batch leaves
//! prior renames applied and aborts the rest; re-running skips completed
//! pairs because renamed directories no longer match the numeric filter.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::core::entry::EntryFilter;
use crate::core::exec;
use crate::core::plan::{self, RenamePlan};
use crate::core::preflight::Preflight;
use crate::core::scan::scan_sorted;
use crate::core::types::WorkId;
use crate::ui::output::Output;

/// Rename every numeric page directory in `qnl_dir` to the basename of its
/// positionally corresponding master image in `se_dir`.
///
/// # Arguments
///
/// * `out` - Resolved output configuration
/// * `se_dir` - Delivery tree holding the master images
/// * `qnl_dir` - Target tree holding the numeric page directories
/// * `dry_run` - Log the plan without touching the filesystem
/// * `check_permissions` - Run the target-tree permission query in the gate
pub fn align(
    out: &Output,
    se_dir: &Path,
    qnl_dir: &Path,
    dry_run: bool,
    check_permissions: bool,
) -> Result<()> {
    let work_id = WorkId::from_delivery_dir(se_dir)?;
    out.debug(format!("work identifier: {work_id}"));

    let already_named = scan_sorted(qnl_dir, &EntryFilter::WorkPrefix(&work_id))
        .with_context(|| format!("failed to read target tree {}", qnl_dir.display()))?
        .len();
    let sources = scan_sorted(qnl_dir, &EntryFilter::NumericDir)
        .with_context(|| format!("failed to read target tree {}", qnl_dir.display()))?;
    let markers = scan_sorted(se_dir, &EntryFilter::MarkerFile)
        .with_context(|| format!("failed to read delivery tree {}", se_dir.display()))?;
    let destinations = plan::destinations(&markers, qnl_dir);

    out.debug(format!(
        "found {} master images and {} numeric page directories",
        destinations.len(),
        sources.len()
    ));

    Preflight {
        se_dir,
        qnl_dir,
        sources: &sources,
        destinations: &destinations,
        already_named,
        check_permissions,
    }
    .gate(out)?;

    let plan = RenamePlan::from_lists(sources, destinations);
    exec::execute(&plan, dry_run, out)?;

    if dry_run {
        out.print(format!(
            "dry run: would rename {} page directories",
            plan.len()
        ));
    } else {
        out.print(format!("renamed {} page directories", plan.len()));
    }

    Ok(())
}

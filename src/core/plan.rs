//! core::plan
//!
//! Destination synthesis and the rename plan.
//!
//! # Design
//!
//! The plan is plain data built before anything is mutated: one
//! [`RenamePair`] per page, pairing the i-th numeric directory with the i-th
//! synthesized destination. Correctness rests entirely on both input lists
//! being sorted by the same key (see [`crate::core::scan`]); the plan itself
//! adds no matching logic.

use std::path::{Path, PathBuf};

use crate::core::entry::{cleaned_name, MARKER_SUFFIX};

/// One positional source -> destination pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    /// Numeric page directory in the target tree.
    pub source: PathBuf,
    /// Its new path, named after the corresponding master image.
    pub destination: PathBuf,
}

/// The full ordered batch of renames for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pairs: Vec<RenamePair>,
}

impl RenamePlan {
    /// Pair two equal-length ordered listings positionally.
    ///
    /// Callers run the pre-flight gate first, which rejects unequal counts
    /// before any plan is built.
    pub fn from_lists(sources: Vec<PathBuf>, destinations: Vec<PathBuf>) -> Self {
        let pairs = sources
            .into_iter()
            .zip(destinations)
            .map(|(source, destination)| RenamePair {
                source,
                destination,
            })
            .collect();
        Self { pairs }
    }

    /// The pairs in rename order.
    pub fn pairs(&self) -> &[RenamePair] {
        &self.pairs
    }

    /// Number of renames in the batch.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Synthesize one destination path per marker file, in input order.
///
/// The destination basename is the marker's cleaned basename with
/// [`MARKER_SUFFIX`] stripped, re-rooted under `qnl_dir`. Entries without the
/// suffix are skipped; listings produced by the marker filter always carry
/// it, and a skip can only surface later as a count mismatch in the gate.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use refoliate::core::plan::destinations;
///
/// let markers = vec![PathBuf::from("/d/se/000001_d.tif")];
/// assert_eq!(
///     destinations(&markers, Path::new("/d/qnl")),
///     vec![PathBuf::from("/d/qnl/000001")]
/// );
/// ```
pub fn destinations(markers: &[PathBuf], qnl_dir: &Path) -> Vec<PathBuf> {
    markers
        .iter()
        .filter_map(|marker| {
            let name = marker.file_name()?.to_string_lossy();
            let stem = cleaned_name(&name).strip_suffix(MARKER_SUFFIX)?;
            Some(qnl_dir.join(stem))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_strips_suffix_and_reroots() {
        let markers = vec![
            PathBuf::from("/work/se/BK1_000001_d.tif"),
            PathBuf::from("/work/se/BK1_000002_d.tif"),
        ];

        let dests = destinations(&markers, Path::new("/work/qnl"));
        assert_eq!(
            dests,
            vec![
                PathBuf::from("/work/qnl/BK1_000001"),
                PathBuf::from("/work/qnl/BK1_000002"),
            ]
        );
    }

    #[test]
    fn destination_cleans_marked_names() {
        let markers = vec![PathBuf::from("/work/se/\u{feff}000001_d.tif")];

        let dests = destinations(&markers, Path::new("/work/qnl"));
        assert_eq!(dests, vec![PathBuf::from("/work/qnl/000001")]);
    }

    #[test]
    fn destination_preserves_input_order() {
        let markers = vec![
            PathBuf::from("/se/zz_d.tif"),
            PathBuf::from("/se/aa_d.tif"),
        ];

        let dests = destinations(&markers, Path::new("/qnl"));
        assert_eq!(
            dests,
            vec![PathBuf::from("/qnl/zz"), PathBuf::from("/qnl/aa")]
        );
    }

    #[test]
    fn unsuffixed_entry_is_skipped() {
        let markers = vec![
            PathBuf::from("/se/a_d.tif"),
            PathBuf::from("/se/stray.txt"),
        ];

        assert_eq!(destinations(&markers, Path::new("/qnl")).len(), 1);
    }

    #[test]
    fn pairing_is_strictly_positional() {
        let sources = vec![
            PathBuf::from("qnl/007"),
            PathBuf::from("qnl/012"),
            PathBuf::from("qnl/045"),
        ];
        let dests = vec![
            PathBuf::from("qnl/p1"),
            PathBuf::from("qnl/p2"),
            PathBuf::from("qnl/p3"),
        ];

        let plan = RenamePlan::from_lists(sources, dests);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.pairs()[0].source, PathBuf::from("qnl/007"));
        assert_eq!(plan.pairs()[0].destination, PathBuf::from("qnl/p1"));
        assert_eq!(plan.pairs()[1].source, PathBuf::from("qnl/012"));
        assert_eq!(plan.pairs()[1].destination, PathBuf::from("qnl/p2"));
        assert_eq!(plan.pairs()[2].source, PathBuf::from("qnl/045"));
        assert_eq!(plan.pairs()[2].destination, PathBuf::from("qnl/p3"));
    }

    #[test]
    fn empty_lists_make_empty_plan() {
        let plan = RenamePlan::from_lists(vec![], vec![]);
        assert!(plan.is_empty());
    }
}

//! Property-based tests for the scan, plan, and pairing core.
//!
//! These tests use proptest to verify the ordering and pairing invariants
//! hold across randomly generated inputs.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use refoliate::core::entry::{EntryFilter, EntryKind, MARKER_SUFFIX, NAME_MARK};
use refoliate::core::plan::{destinations, RenamePlan};
use refoliate::core::scan::sort_key;

/// Strategy for characters that may appear in a delivered entry name.
fn name_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('-'),
        Just('_'),
        Just('.'),
        Just(' '),
    ]
}

/// Strategy for entry names without the leading invisible mark.
///
/// `.` and `..` are excluded because they are path components, not entry
/// names a directory listing would yield.
fn plain_name() -> impl Strategy<Value = String> {
    prop::collection::vec(name_char(), 1..24).prop_filter_map("not a path component", |chars| {
        let name: String = chars.into_iter().collect();
        if name == "." || name == ".." {
            None
        } else {
            Some(name)
        }
    })
}

/// Strategy for stems that make a valid destination basename.
fn stem() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}"
}

proptest! {
    /// The numeric predicate accepts exactly the all-ASCII-digit names.
    #[test]
    fn numeric_predicate_is_all_digits(name in plain_name()) {
        let expected = name.bytes().all(|b| b.is_ascii_digit());
        prop_assert_eq!(
            EntryFilter::NumericDir.matches(&name, EntryKind::Dir),
            expected
        );
    }

    /// All-digit names pass as directories and never as any other kind.
    #[test]
    fn digit_names_need_directory_kind(name in "[0-9]{1,12}") {
        prop_assert!(EntryFilter::NumericDir.matches(&name, EntryKind::Dir));
        prop_assert!(!EntryFilter::NumericDir.matches(&name, EntryKind::File));
        prop_assert!(!EntryFilter::NumericDir.matches(&name, EntryKind::Other));
    }

    /// The marker predicate accepts exactly the regular files carrying the
    /// suffix.
    #[test]
    fn marker_predicate_requires_suffix_and_file(name in plain_name()) {
        let expected = name.ends_with(MARKER_SUFFIX);
        prop_assert_eq!(
            EntryFilter::MarkerFile.matches(&name, EntryKind::File),
            expected
        );
        prop_assert!(!EntryFilter::MarkerFile.matches(&name, EntryKind::Dir));
    }

    /// Any suffixed name matches as a file.
    #[test]
    fn suffixed_names_match_as_files(stem in stem()) {
        let name = format!("{stem}{MARKER_SUFFIX}");
        prop_assert!(EntryFilter::MarkerFile.matches(&name, EntryKind::File));
    }

    /// A leading mark never changes how a name sorts.
    #[test]
    fn mark_is_transparent_to_ordering(name in plain_name()) {
        let marked = format!("{NAME_MARK}{name}");
        prop_assert_eq!(
            sort_key(&Path::new("/t").join(&marked)).0,
            sort_key(&Path::new("/t").join(&name)).0
        );
    }

    /// Sorting by the scan key does not depend on input order.
    #[test]
    fn ordering_is_input_order_independent(
        names in prop::collection::vec(plain_name(), 1..12),
        rot in 0usize..12,
    ) {
        let mut straight: Vec<PathBuf> =
            names.iter().map(|n| Path::new("/t").join(n)).collect();
        let mut rotated = straight.clone();
        let split = rot % rotated.len();
        rotated.rotate_left(split);

        straight.sort_by_key(|p| sort_key(p));
        rotated.sort_by_key(|p| sort_key(p));
        prop_assert_eq!(straight, rotated);
    }

    /// Destination synthesis strips the suffix and re-roots under the target
    /// tree.
    #[test]
    fn destination_round_trip(stem in stem()) {
        let marker = Path::new("/work/se").join(format!("{stem}{MARKER_SUFFIX}"));
        let dests = destinations(&[marker], Path::new("/work/qnl"));
        prop_assert_eq!(dests, vec![Path::new("/work/qnl").join(&stem)]);
    }

    /// Pairing is strictly positional for any equal-length listings.
    #[test]
    fn pairing_is_positional(
        entries in prop::collection::vec((plain_name(), stem()), 0..16),
    ) {
        let sources: Vec<PathBuf> = entries
            .iter()
            .map(|(s, _)| Path::new("/qnl").join(s))
            .collect();
        let dests: Vec<PathBuf> = entries
            .iter()
            .map(|(_, d)| Path::new("/qnl").join(d))
            .collect();

        let plan = RenamePlan::from_lists(sources.clone(), dests.clone());
        prop_assert_eq!(plan.len(), entries.len());
        for (i, pair) in plan.pairs().iter().enumerate() {
            prop_assert_eq!(&pair.source, &sources[i]);
            prop_assert_eq!(&pair.destination, &dests[i]);
        }
    }
}

//! Generic record filtering against the current region selection.
//!
//! Every collection routes through the same inclusion rule; only the
//! location-extraction step differs per collection. The policy is
//! fail-open: a record the filter cannot place geographically is shown
//! rather than silently dropped.

use tracing::debug;

use crate::matcher::{LocationMatch, match_location};
use crate::selection::RegionSelection;

/// How a record relates to geography, as reported by its collection's
/// extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordScope {
    /// Free-text location to resolve against the catalog.
    Location(String),
    /// Explicitly system-scoped; always included.
    Global,
    /// No location available; included under the fail-open policy.
    Unknown,
}

/// Whether a record with the given scope passes the current selection.
pub fn scope_included(selection: &RegionSelection<'_>, scope: &RecordScope) -> bool {
    let text = match scope {
        RecordScope::Global | RecordScope::Unknown => return true,
        RecordScope::Location(text) => text,
    };

    match match_location(selection.catalog(), text) {
        LocationMatch::District { district, .. } => selection.is_selected(&district.id),
        LocationMatch::Division(division) => division
            .districts
            .iter()
            .any(|d| selection.is_selected(&d.id)),
        LocationMatch::Unresolved => {
            debug!(location = %text, "location did not resolve; including record");
            true
        }
    }
}

/// Filter a collection against the current selection.
///
/// `extract` supplies the per-collection location; the inclusion rule is
/// shared. With the whole country selected the collection passes through
/// without per-record matching.
pub fn filter_records<'r, T>(
    records: &'r [T],
    selection: &RegionSelection<'_>,
    extract: impl Fn(&T) -> RecordScope,
) -> Vec<&'r T> {
    if selection.is_all_selected() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| scope_included(selection, &extract(record)))
        .collect()
}

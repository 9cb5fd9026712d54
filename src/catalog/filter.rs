//! Case-insensitive substring filter over one category's records.
//!
//! Matching is plain containment on lowercased text: no tokenizing, no
//! fuzziness, no ranking. Results are always a subsequence of the input in
//! the input's order. The query is not trimmed, so a whitespace-only query
//! is matched literally.

use crate::catalog::model::Institution;
use tracing::trace;

/// Return the records whose name, type, or website contains `query`,
/// ignoring case.
///
/// An empty query returns every record unchanged.
pub fn filter<'a>(records: &'a [Institution], query: &str) -> Vec<&'a Institution> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    let matched: Vec<&Institution> = records
        .iter()
        .filter(|record| matches_folded(record, &needle))
        .collect();
    trace!(
        query,
        candidates = records.len(),
        matched = matched.len(),
        "filtered institutions"
    );
    matched
}

/// Predicate for an already-lowercased needle.
pub(crate) fn matches_folded(record: &Institution, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    // A record without a website can still match on its other fields.
    record.name.to_lowercase().contains(needle)
        || record.kind.to_lowercase().contains(needle)
        || record
            .website
            .as_deref()
            .is_some_and(|website| website.to_lowercase().contains(needle))
}

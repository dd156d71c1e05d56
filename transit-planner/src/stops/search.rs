//! Stop name autocomplete.

use crate::domain::Stop;

/// Number of suggestions shown when the caller does not ask for a limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Find stops whose name contains `query`, ignoring case.
///
/// The query is trimmed first; a blank query matches nothing. Matches keep
/// the relative order of `stops` and at most `limit` are returned.
pub fn search<'a>(query: &str, stops: &'a [Stop], limit: usize) -> Vec<&'a Stop> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    stops
        .iter()
        .filter(|stop| stop.name_contains_lowercase(&needle))
        .take(limit)
        .collect()
}

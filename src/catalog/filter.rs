/// Maximum number of names shown in the suggestion popup
pub const MAX_SUGGESTIONS: usize = 10;

/// Names containing `query` (case-insensitive) as a contiguous substring
///
/// Results keep catalog order and stop after `MAX_SUGGESTIONS`. An empty query
/// yields an empty list, which callers treat as "hide suggestions".
pub fn filter_suggestions(query: &str, catalog: &[String]) -> Vec<String> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|name| name.contains(needle.as_str()))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;

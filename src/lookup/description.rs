use crate::api::types::FlavorTextEntry;

/// Shown when a species has no usable English flavor text
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";

const DESCRIPTION_LANGUAGE: &str = "en";

/// First English flavor text, flattened to a single line
pub fn english_description(entries: &[FlavorTextEntry]) -> String {
    entries
        .iter()
        .find(|entry| entry.language.name == DESCRIPTION_LANGUAGE)
        .map(|entry| flatten_line_breaks(&entry.flavor_text))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| DESCRIPTION_PLACEHOLDER.to_string())
}

/// Replace each line feed, carriage return and form feed with one space
pub fn flatten_line_breaks(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\u{000C}' => ' ',
            other => other,
        })
        .collect()
}

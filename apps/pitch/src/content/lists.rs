//! List-field normalization: the one place string-or-array input is resolved.

use crate::models::RawList;

/// Delimiters accepted inside a single-string list field.
const LIST_DELIMITERS: &[char] = &['\n', ';'];

/// Resolves a raw list field into a sequence of non-empty strings.
///
/// - `Items`: order and duplicates preserved; blank entries dropped.
/// - `Text`: split on newline or semicolon, each piece trimmed, empty pieces dropped.
/// - `Absent`: empty.
pub fn to_list(raw: &RawList) -> Vec<String> {
    match raw {
        RawList::Items(items) => clean_items(items),
        RawList::Text(text) => split_delimited(text),
        RawList::Absent => Vec::new(),
    }
}

/// Splits a delimited string. `";;;"` and `"  \n "` both yield an empty list.
pub fn split_delimited(text: &str) -> Vec<String> {
    text.split(LIST_DELIMITERS)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drops entries that are empty or whitespace-only. Kept entries are not rewritten.
pub fn clean_items(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .cloned()
        .collect()
}

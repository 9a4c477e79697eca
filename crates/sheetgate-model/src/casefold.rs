#![deny(unsafe_code)]

//! Case-insensitive name matching for sheet and header names.
//!
//! Matching works one character at a time: a character only folds when its
//! case mapping is itself a single character, so `ß` never matches `SS`.

/// Fold `text` so that two names match ignoring case iff their folds are
/// equal.
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// True when `left` and `right` match ignoring case.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars().count() == right.chars().count()
        && left
            .chars()
            .zip(right.chars())
            .all(|(l, r)| l == r || fold_char(l) == fold_char(r))
}

fn fold_char(ch: char) -> char {
    let upper = single(ch.to_uppercase()).unwrap_or(ch);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

//! Label and identifier casing.

use convert_case::{Case, Casing};

/// Lowercase, underscore-separated identifier from a human label.
///
/// Any character that is not alphanumeric separates words. Empty or
/// separator-only input yields an empty string so callers can fall back.
pub fn to_snake_case(text: &str) -> String {
    let spaced: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let words = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    if words.is_empty() {
        return String::new();
    }
    words.to_case(Case::Snake)
}

/// Human label from an `_`, `-` or space separated identifier.
///
/// Every word is capitalized: `my_video` becomes `My Video`.
pub fn to_sentence_case(identifier: &str) -> String {
    let words = identifier
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if words.is_empty() {
        return String::new();
    }
    words.to_case(Case::Title)
}

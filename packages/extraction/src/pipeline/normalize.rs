//! Whitespace normalization, truncation and word counting.

/// Appended to content cut at the length limit.
pub const TRUNCATION_MARKER: &str = "...";

/// Whitespace collapsed by normalization. Covers Unicode `White_Space`
/// plus the byte-order mark, which some CMSes leave inside text nodes.
fn is_collapsible(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Collapse every whitespace run into one ASCII space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split(is_collapsible)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keep the first `max_chars` characters and append [`TRUNCATION_MARKER`]
/// when the text is longer than that; otherwise return it unchanged.
pub fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((byte_idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_idx);
        text.push_str(TRUNCATION_MARKER);
    }
    text
}

/// Length in characters (Unicode scalar values).
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Count of single-space separated tokens.
///
/// Deliberately crude: the truncation marker counts as part of the last
/// token, and an empty string counts as one.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}

/// Collapse all whitespace runs to single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count non-empty whitespace-delimited tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

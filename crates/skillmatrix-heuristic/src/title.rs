//! Title extraction

/// Maximum title length before truncation, in characters
pub const MAX_TITLE_CHARS: usize = 100;

/// Title used when the first line has no content
pub const TITLE_PLACEHOLDER: &str = "Unknown Position";

const ELLIPSIS: &str = "...";

/// First line of the text, trimmed and capped at [`MAX_TITLE_CHARS`]
pub(crate) fn extract_title(text: &str) -> String {
    let first_line = text.lines().next().map(str::trim).unwrap_or_default();

    if first_line.is_empty() {
        return TITLE_PLACEHOLDER.to_string();
    }

    if first_line.chars().count() > MAX_TITLE_CHARS {
        let mut title: String = first_line.chars().take(MAX_TITLE_CHARS).collect();
        title.push_str(ELLIPSIS);
        title
    } else {
        first_line.to_string()
    }
}

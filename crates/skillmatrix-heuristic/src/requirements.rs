//! Requirement section capture

use once_cell::sync::Lazy;
use regex::Regex;

/// Cap on entries taken from a requirement section
pub const MAX_REQUIREMENTS: usize = 10;

/// Requirement reported when no must-have section is found
pub const DEFAULT_MUST_HAVE: &str = "Experience with relevant technologies";

static MUST_HAVE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:requirements?|must[\s-]have|required skills?)[:\s]+").unwrap());

/// Must-have capture stops at a blank line or the next known section
static MUST_HAVE_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\n[ \t\r]*\n|nice[\s-]to[\s-]have|responsibilities").unwrap()
});

static NICE_TO_HAVE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:nice[\s-]to[\s-]have|bonus|preferred)[:\s]+").unwrap());

static NICE_TO_HAVE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•\-*]\s*").unwrap());

/// Extracted requirement lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Requirements {
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
}

pub(crate) fn extract_requirements(text: &str) -> Requirements {
    let must_have = capture_section(text, &MUST_HAVE_HEADER, &MUST_HAVE_END)
        .unwrap_or_else(|| vec![DEFAULT_MUST_HAVE.to_string()]);
    let nice_to_have = capture_section(text, &NICE_TO_HAVE_HEADER, &NICE_TO_HAVE_END).unwrap_or_default();

    Requirements {
        must_have,
        nice_to_have,
    }
}

/// Body after the first `header` match, up to the first `end` match
fn capture_section(text: &str, header: &Regex, end: &Regex) -> Option<Vec<String>> {
    let start = header.find(text)?.end();
    let rest = &text[start..];
    let body = match end.find(rest) {
        Some(m) => &rest[..m.start()],
        None => rest,
    };
    Some(split_items(body))
}

fn split_items(body: &str) -> Vec<String> {
    body.lines()
        .map(|line| BULLET.replace(line.trim(), "").into_owned())
        .filter(|item| !item.is_empty())
        .take(MAX_REQUIREMENTS)
        .collect()
}

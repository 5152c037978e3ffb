//! Seniority detection

use once_cell::sync::Lazy;
use regex::Regex;
use skillmatrix_domain::Seniority;

/// Cue patterns in priority order. The first pattern that matches anywhere in
/// the text wins, regardless of where the cues occur.
static SENIORITY_PATTERNS: Lazy<Vec<(Seniority, Regex)>> = Lazy::new(|| {
    vec![
        (
            Seniority::Junior,
            Regex::new(r"(?i)\b(?:junior|jr|entry|graduates?)\b").unwrap(),
        ),
        (Seniority::Senior, Regex::new(r"(?i)\b(?:senior|sr)\b").unwrap()),
        (
            Seniority::Lead,
            Regex::new(r"(?i)\b(?:lead|principal|staff|architect)\b").unwrap(),
        ),
        (
            Seniority::Mid,
            Regex::new(r"(?i)\b(?:mid[\s-]?level|intermediate|regular)\b").unwrap(),
        ),
    ]
});

pub(crate) fn detect_seniority(text: &str) -> Seniority {
    SENIORITY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(level, _)| *level)
        .unwrap_or(Seniority::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_junior_beats_senior_regardless_of_position() {
        let text = "Senior engineers will mentor our new junior hire.";
        assert_eq!(detect_seniority(text), Seniority::Junior);
    }

    #[test]
    fn test_senior_beats_lead() {
        assert_eq!(detect_seniority("Lead the team as a Sr. Engineer"), Seniority::Senior);
    }

    #[test]
    fn test_lead_only() {
        assert_eq!(detect_seniority("Tech Lead, Payments"), Seniority::Lead);
        assert_eq!(detect_seniority("Principal Engineer"), Seniority::Lead);
        assert_eq!(detect_seniority("Solutions Architect"), Seniority::Lead);
    }

    #[test]
    fn test_mid_cues() {
        assert_eq!(detect_seniority("Mid-level Backend Developer"), Seniority::Mid);
        assert_eq!(detect_seniority("mid level developer"), Seniority::Mid);
        assert_eq!(detect_seniority("Intermediate Developer"), Seniority::Mid);
        assert_eq!(detect_seniority("Regular Java Developer"), Seniority::Mid);
    }

    #[test]
    fn test_entry_level_is_junior() {
        assert_eq!(detect_seniority("Entry-level QA role"), Seniority::Junior);
        assert_eq!(detect_seniority("Graduates welcome"), Seniority::Junior);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect_seniority("SENIOR DEVELOPER"), Seniority::Senior);
    }

    #[test]
    fn test_no_cues_is_unknown() {
        assert_eq!(detect_seniority("Backend Developer wanted"), Seniority::Unknown);
        assert_eq!(detect_seniority(""), Seniority::Unknown);
    }

    #[test]
    fn test_cues_inside_longer_words_ignored() {
        assert_eq!(
            detect_seniority("Great leadership and seniority-free culture at Sentry"),
            Seniority::Unknown
        );
    }
}

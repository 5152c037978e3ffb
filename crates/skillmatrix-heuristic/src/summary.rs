//! Summary template

use skillmatrix_domain::{Salary, Seniority, Skills};

/// Soft cap on summary length, in whitespace-delimited tokens
pub const MAX_SUMMARY_WORDS: usize = 60;

pub(crate) fn build_summary(
    title: &str,
    seniority: Seniority,
    skills: &Skills,
    salary: Option<&Salary>,
) -> String {
    let seniority_text = match seniority {
        Seniority::Unknown => String::new(),
        level => format!("{}-level ", level),
    };

    let salary_text = salary
        .map(|s| format!(" with {} compensation", s.describe()))
        .unwrap_or_default();

    let top_skills: Vec<&str> = skills
        .frontend
        .iter()
        .take(2)
        .chain(skills.backend.iter().take(2))
        .map(String::as_str)
        .collect();
    let focus = if top_skills.is_empty() {
        "various technologies".to_string()
    } else {
        top_skills.join(", ")
    };

    let summary = format!(
        "{}{} position requiring {} technical skills across frontend, backend, and infrastructure{}. Key focus areas include {}.",
        seniority_text,
        title,
        skills.total(),
        salary_text,
        focus
    );

    truncate_words(&summary, MAX_SUMMARY_WORDS)
}

/// Keep the first `limit` whitespace-delimited tokens. Text within the limit
/// is returned untouched.
fn truncate_words(text: &str, limit: usize) -> String {
    if text.split_whitespace().count() <= limit {
        return text.to_string();
    }
    text.split_whitespace().take(limit).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatrix_domain::Currency;

    fn skills() -> Skills {
        Skills {
            frontend: vec!["react".into(), "typescript".into(), "css".into()],
            backend: vec!["node.js".into(), "graphql".into(), "rest".into()],
            devops: vec!["docker".into()],
            ..Skills::default()
        }
    }

    #[test]
    fn test_full_template() {
        let salary = Salary::range(Currency::USD, 80000.0, 120000.0);
        let summary = build_summary("Fullstack Engineer", Seniority::Senior, &skills(), Some(&salary));
        assert_eq!(
            summary,
            "senior-level Fullstack Engineer position requiring 7 technical skills across frontend, \
             backend, and infrastructure with USD 80000-120000 compensation. Key focus areas include \
             react, typescript, node.js, graphql."
        );
    }

    #[test]
    fn test_unknown_seniority_and_no_skills() {
        let summary = build_summary("Engineer", Seniority::Unknown, &Skills::default(), None);
        assert_eq!(
            summary,
            "Engineer position requiring 0 technical skills across frontend, backend, and \
             infrastructure. Key focus areas include various technologies."
        );
    }

    #[test]
    fn test_long_title_truncated_to_sixty_tokens() {
        let title = vec!["word"; 80].join(" ");
        let summary = build_summary(&title, Seniority::Mid, &skills(), None);
        assert_eq!(summary.split_whitespace().count(), MAX_SUMMARY_WORDS);
        assert!(summary.starts_with("mid-level word word"));
    }

    #[test]
    fn test_truncate_words_keeps_short_text_verbatim() {
        assert_eq!(truncate_words("a  b", 5), "a  b");
        assert_eq!(truncate_words("a b c d", 2), "a b");
    }
}

//! Heuristic extractor

use crate::keywords::{KeywordTables, DEFAULT_KEYWORDS};
use crate::requirements::extract_requirements;
use crate::salary::extract_salary;
use crate::seniority::detect_seniority;
use crate::summary::build_summary;
use crate::title::extract_title;
use once_cell::sync::Lazy;
use regex::RegexSet;
use skillmatrix_domain::{SkillCategory, SkillMatrix, Skills};
use tracing::debug;

static DEFAULT_EXTRACTOR: Lazy<HeuristicExtractor> = Lazy::new(|| {
    HeuristicExtractor::new(DEFAULT_KEYWORDS).expect("built-in keyword tables must compile")
});

/// One compiled matcher per keyword-bearing category
#[derive(Debug, Clone)]
struct CategoryMatcher {
    category: SkillCategory,
    keywords: &'static [&'static str],
    patterns: RegexSet,
}

impl CategoryMatcher {
    fn new(category: SkillCategory, keywords: &'static [&'static str]) -> Result<Self, regex::Error> {
        let patterns = RegexSet::new(keywords.iter().map(|kw| whole_word_pattern(kw)))?;
        Ok(Self {
            category,
            keywords,
            patterns,
        })
    }

    /// Matched keywords in table order
    fn matches(&self, text: &str) -> Vec<String> {
        let hits = self.patterns.matches(text);
        self.keywords
            .iter()
            .enumerate()
            .filter(|(idx, _)| hits.matched(*idx))
            .map(|(_, kw)| kw.to_string())
            .collect()
    }
}

/// Case-insensitive whole-word pattern. Word boundaries are only asserted on
/// keyword edges that are word characters, so `c#` and `.net` still match.
fn whole_word_pattern(keyword: &str) -> String {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let leading = if is_word(keyword.chars().next()) { r"\b" } else { "" };
    let trailing = if is_word(keyword.chars().last()) { r"\b" } else { "" };
    format!("(?i){}{}{}", leading, regex::escape(keyword), trailing)
}

/// Deterministic keyword-and-pattern extractor.
///
/// Holds the compiled keyword tables it was built from; extraction itself is
/// a pure function of the input text.
#[derive(Debug, Clone)]
pub struct HeuristicExtractor {
    matchers: Vec<CategoryMatcher>,
}

impl HeuristicExtractor {
    /// Compile an extractor over the given keyword tables
    ///
    /// # Errors
    ///
    /// Fails only if a keyword produces a pattern the regex engine rejects,
    /// e.g. one exceeding the compiled size limit.
    pub fn new(tables: KeywordTables) -> Result<Self, regex::Error> {
        let matchers = SkillCategory::ALL
            .into_iter()
            .filter(|category| !tables.get(*category).is_empty())
            .map(|category| CategoryMatcher::new(category, tables.get(category)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { matchers })
    }

    /// Shared extractor over [`DEFAULT_KEYWORDS`]
    pub fn shared() -> &'static HeuristicExtractor {
        &DEFAULT_EXTRACTOR
    }

    /// Extract a skill matrix. Never fails; every output satisfies the schema.
    pub fn extract(&self, text: &str) -> SkillMatrix {
        let title = extract_title(text);
        let seniority = detect_seniority(text);
        let skills = self.extract_skills(text);
        let requirements = extract_requirements(text);
        let salary = extract_salary(text);
        let summary = build_summary(&title, seniority, &skills, salary.as_ref());

        debug!(
            "Heuristic extraction: seniority={}, skills={}, must_have={}, nice_to_have={}, salary={}",
            seniority,
            skills.total(),
            requirements.must_have.len(),
            requirements.nice_to_have.len(),
            salary.is_some()
        );

        let matrix = SkillMatrix {
            title,
            seniority,
            skills,
            must_have: requirements.must_have,
            nice_to_have: requirements.nice_to_have,
            salary,
            summary,
        };

        debug_assert!(
            skillmatrix_schema::validate_matrix(&matrix).valid,
            "heuristic output violates the schema"
        );

        matrix
    }

    fn extract_skills(&self, text: &str) -> Skills {
        let mut skills = Skills::default();
        for matcher in &self.matchers {
            *skills.get_mut(matcher.category) = matcher.matches(text);
        }
        skills
    }
}

/// Extract with the built-in keyword tables
pub fn heuristic_extract(text: &str) -> SkillMatrix {
    HeuristicExtractor::shared().extract(text)
}

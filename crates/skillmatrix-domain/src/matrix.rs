//! SkillMatrix - the structured record produced by every extraction strategy

use crate::{Salary, Seniority};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed skill categories of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    /// Browser-side technologies
    Frontend,
    /// Server-side languages and frameworks
    Backend,
    /// Infrastructure and delivery tooling
    Devops,
    /// Blockchain and smart-contract tooling
    Web3,
    /// Anything that does not fit the categories above
    Other,
}

impl SkillCategory {
    /// Every category, in wire order
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Devops,
        SkillCategory::Web3,
        SkillCategory::Other,
    ];

    /// Key used for this category in the `skills` object
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Devops => "devops",
            SkillCategory::Web3 => "web3",
            SkillCategory::Other => "other",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorized skill tags. Order within a category is significant and
/// duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    /// Frontend skills
    pub frontend: Vec<String>,
    /// Backend skills
    pub backend: Vec<String>,
    /// DevOps skills
    pub devops: Vec<String>,
    /// Web3 skills
    pub web3: Vec<String>,
    /// Uncategorized skills
    pub other: Vec<String>,
}

impl Skills {
    /// Skills of one category
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Devops => &self.devops,
            SkillCategory::Web3 => &self.web3,
            SkillCategory::Other => &self.other,
        }
    }

    /// Mutable access to one category
    pub fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Frontend => &mut self.frontend,
            SkillCategory::Backend => &mut self.backend,
            SkillCategory::Devops => &mut self.devops,
            SkillCategory::Web3 => &mut self.web3,
            SkillCategory::Other => &mut self.other,
        }
    }

    /// Total number of tags across all categories
    pub fn total(&self) -> usize {
        SkillCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    /// Iterate `(category, tags)` in wire order
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        SkillCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Structured description of a job posting.
///
/// Built fresh for each extraction and never mutated afterwards; fields are
/// public so callers can destructure, but no extractor hands out `&mut`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatrix {
    /// Job title, at most 100 characters plus an optional `...` marker
    pub title: String,

    /// Requested experience level
    pub seniority: Seniority,

    /// Categorized skill tags
    pub skills: Skills,

    /// Required qualifications
    #[serde(rename = "mustHave")]
    pub must_have: Vec<String>,

    /// Preferred / bonus qualifications
    #[serde(rename = "niceToHave")]
    pub nice_to_have: Vec<String>,

    /// Salary range, when the posting states one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Salary>,

    /// Short prose summary of the role
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Currency;

    fn sample() -> SkillMatrix {
        SkillMatrix {
            title: "Backend Engineer".to_string(),
            seniority: Seniority::Senior,
            skills: Skills {
                backend: vec!["rust".to_string(), "go".to_string()],
                devops: vec!["docker".to_string()],
                ..Skills::default()
            },
            must_have: vec!["5 years of Rust".to_string()],
            nice_to_have: vec![],
            salary: Some(Salary::range(Currency::EUR, 70000.0, 90000.0)),
            summary: "Senior backend role.".to_string(),
        }
    }

    #[test]
    fn test_skill_total_counts_every_category() {
        assert_eq!(sample().skills.total(), 3);
    }

    #[test]
    fn test_skills_iter_follows_wire_order() {
        let matrix = sample();
        let keys: Vec<_> = matrix.skills.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(keys, vec!["frontend", "backend", "devops", "web3", "other"]);
    }

    #[test]
    fn test_wire_format_uses_camel_case_requirement_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("mustHave").is_some());
        assert!(json.get("niceToHave").is_some());
        assert!(json.get("must_have").is_none());
        assert_eq!(json["salary"]["currency"], "EUR");
    }

    #[test]
    fn test_absent_salary_is_omitted() {
        let mut matrix = sample();
        matrix.salary = None;
        let json = serde_json::to_value(matrix).unwrap();
        assert!(json.get("salary").is_none());
    }
}

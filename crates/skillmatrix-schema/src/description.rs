//! Schema description embedded in generation prompts

/// Full schema description for the primary extraction prompt
pub const SCHEMA_DESCRIPTION: &str = r#"{
  "title": "string - job title",
  "seniority": "junior" | "mid" | "senior" | "lead" | "unknown",
  "skills": {
    "frontend": ["array of frontend technologies"],
    "backend": ["array of backend technologies"],
    "devops": ["array of devops/infrastructure tools"],
    "web3": ["array of blockchain/web3 technologies like solidity, wagmi, viem, merkle, staking"],
    "other": ["array of other relevant skills"]
  },
  "mustHave": ["array of required qualifications"],
  "niceToHave": ["array of preferred/bonus qualifications"],
  "salary": {
    "currency": "USD" | "EUR" | "PLN" | "GBP",
    "min": number,
    "max": number
  },
  "summary": "string - max 60 words summarizing the role"
}"#;

/// Compact schema description for the corrective retry prompt
pub const RETRY_SCHEMA_DESCRIPTION: &str = r#"{
  "title": "string",
  "seniority": "junior" | "mid" | "senior" | "lead" | "unknown",
  "skills": {
    "frontend": [],
    "backend": [],
    "devops": [],
    "web3": [],
    "other": []
  },
  "mustHave": [],
  "niceToHave": [],
  "salary": { "currency": "USD"|"EUR"|"PLN"|"GBP", "min": number, "max": number } or omit,
  "summary": "string max 60 words"
}"#;

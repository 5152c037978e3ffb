//! Seniority levels for a role

use serde::{Deserialize, Serialize};
use std::fmt;

/// Experience level requested by a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    /// Junior, entry-level or graduate roles
    Junior,

    /// Mid-level / intermediate roles
    Mid,

    /// Senior roles
    Senior,

    /// Lead, principal, staff and architect roles
    Lead,

    /// No seniority cue found
    Unknown,
}

impl Seniority {
    /// Every level, in wire order
    pub const ALL: [Seniority; 5] = [
        Seniority::Junior,
        Seniority::Mid,
        Seniority::Senior,
        Seniority::Lead,
        Seniority::Unknown,
    ];

    /// Get the level name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
            Seniority::Lead => "lead",
            Seniority::Unknown => "unknown",
        }
    }

    /// Parse a level from its wire name (exact, lowercase)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == s)
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Seniority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid seniority: {}", s))
    }
}

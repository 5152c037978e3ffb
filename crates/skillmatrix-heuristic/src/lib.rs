//! Skill Matrix Heuristic Extractor
//!
//! Deterministic text-to-record extraction using keyword tables and regular
//! expressions. No network access, no shared mutable state: the compiled
//! extractor is immutable and can be used from any number of threads.
//!
//! # Pipeline
//!
//! ```text
//! text ─┬─ title (first line, ≤100 chars)
//!       ├─ seniority (ordered cue patterns)
//!       ├─ skills (whole-word keyword tables)
//!       ├─ mustHave / niceToHave (section capture)
//!       ├─ salary (currency range pattern)
//!       └─ summary (template over the above, ≤60 tokens)
//! ```
//!
//! # Example
//!
//! ```
//! use skillmatrix_heuristic::heuristic_extract;
//! use skillmatrix_domain::Seniority;
//!
//! let matrix = heuristic_extract("Senior React Developer\nWe use React and Node.js.");
//! assert_eq!(matrix.title, "Senior React Developer");
//! assert_eq!(matrix.seniority, Seniority::Senior);
//! assert_eq!(matrix.skills.frontend, vec!["react"]);
//! assert_eq!(matrix.skills.backend, vec!["node.js"]);
//! ```

#![warn(missing_docs)]

mod extractor;
mod keywords;
mod requirements;
mod salary;
mod seniority;
mod summary;
mod title;

pub use extractor::{heuristic_extract, HeuristicExtractor};
pub use keywords::{KeywordTables, DEFAULT_KEYWORDS};
pub use requirements::{DEFAULT_MUST_HAVE, MAX_REQUIREMENTS};
pub use summary::MAX_SUMMARY_WORDS;
pub use title::{MAX_TITLE_CHARS, TITLE_PLACEHOLDER};

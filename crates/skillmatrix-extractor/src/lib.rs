//! Skill Matrix Extractor
//!
//! Turns a free-text job description into a validated [`SkillMatrix`].
//!
//! # Architecture
//!
//! ```text
//!                    ┌─ use_ai && credential ─→ AiExtractor ─→ TextGenerator
//! text → Coordinator ┤                              │ (any error)
//!                    └──────────────────────────────┴──────────→ heuristic_extract
//! ```
//!
//! The AI path is a bounded state machine: one primary attempt and at most one
//! corrective retry carrying the validator's messages. Every failure on that
//! path is caught by the [`Coordinator`], which then returns the heuristic
//! record tagged [`ExtractionMethod::Heuristic`].
//!
//! # Example Usage
//!
//! ```no_run
//! use skillmatrix_extractor::{Coordinator, ExtractorConfig, GeminiFactory};
//!
//! # async fn example() {
//! let coordinator = Coordinator::new(GeminiFactory::default(), ExtractorConfig::default())
//!     .expect("default config is valid");
//!
//! let extraction = coordinator
//!     .extract("Senior Rust Engineer\nRequirements:\n- Tokio", true, Some("api-key"))
//!     .await;
//!
//! println!("{} via {}", extraction.data.title, extraction.method);
//! # }
//! ```
//!
//! [`SkillMatrix`]: skillmatrix_domain::SkillMatrix

#![warn(missing_docs)]

mod config;
mod coordinator;
mod error;
mod extractor;
mod parser;
mod prompt;


pub use config::ExtractorConfig;
pub use coordinator::{Coordinator, Extraction, ExtractionMethod, GeminiFactory, GeneratorFactory};
pub use error::ExtractorError;
pub use extractor::AiExtractor;
pub use parser::{parse_llm_response, strip_code_fences};
pub use prompt::PromptBuilder;

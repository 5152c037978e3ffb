//! Skill Matrix Domain Layer
//!
//! Core value types shared by every extraction strategy. The record doubles
//! as the JSON wire format returned to callers and requested from the
//! generation service.
//!
//! ## Key Concepts
//!
//! - **SkillMatrix**: the structured record describing a job posting
//! - **Seniority**: closed set of experience levels
//! - **Salary**: optional currency-tagged range
//! - **TextGenerator**: boundary trait for external text-generation services

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod matrix;
pub mod salary;
pub mod seniority;
pub mod traits;

pub use matrix::{SkillCategory, SkillMatrix, Skills};
pub use salary::{Currency, Salary};
pub use seniority::Seniority;
pub use traits::{GenerationParams, TextGenerator};

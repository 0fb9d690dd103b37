//! Core library for resume-lint.
//!
//! Content-quality analysis for structured résumé data: weak phrase
//! detection, ATS/readability/impact scoring, rule-based suggestions, and
//! the power verb and industry keyword advisors. Everything here is a pure
//! function of its input, so the same résumé always yields the same report.
//!
//! # Modules
//!
//! - [`analysis`] - The [`analyze_resume_content`] orchestrator
//! - [`config`] - Configuration loading and management
//! - [`detector`] - Weak phrase detection over a single text field
//! - [`error`] - Error types and result aliases
//! - [`keywords`] - Per-industry keyword lists
//! - [`lexicon`] - The weak phrase lexicon and its compiled matchers
//! - [`model`] - The résumé record analysis reads
//! - [`power_verbs`] - Power verb taxonomy and context advisor
//! - [`report`] - Serializable report structs
//! - [`scoring`] - ATS, readability, and impact calculators
//! - [`suggestions`] - Improvement suggestion rules
//!
//! # Quick Start
//!
//! ```
//! use resume_lint_core::{Resume, analyze_resume_content};
//!
//! let resume: Resume = serde_json::from_str(
//!     r#"{ "personalInfo": { "summary": "Responsible for the build pipeline." } }"#,
//! )
//! .expect("valid résumé JSON");
//!
//! let report = analyze_resume_content(&resume);
//! assert_eq!(report.weak_phrases[0].phrase, "responsible for");
//! assert!(report.ats_score <= 100);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod detector;
pub mod error;
pub mod keywords;
pub mod lexicon;
pub mod model;
pub mod power_verbs;
pub mod report;
pub mod scoring;
pub mod suggestions;

pub use analysis::{analyze_resume_content, analyze_resume_content_with};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use detector::detect_weak_phrases;
pub use error::{ConfigError, ConfigResult, LexiconError, LexiconResult};
pub use keywords::{Industry, industry_keywords};
pub use lexicon::{Lexicon, LexiconEntry};
pub use model::{
    EducationEntry, ExperienceEntry, PersonalInfo, Proficiency, Resume, ResumeSettings, Skill,
};
pub use power_verbs::{VerbCategory, all_power_verbs, suggest_power_verbs};
pub use report::{ResumeContentIntelligence, Section, Suggestion, SuggestionKind, WeakPhrase};
pub use scoring::{
    Scores, calculate_ats_score, calculate_impact_score, calculate_readability_score,
};
pub use suggestions::generate_suggestions;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

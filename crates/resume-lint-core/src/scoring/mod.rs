//! Résumé quality scores.
//!
//! Three independent point rubrics, each a pure function of the résumé that
//! returns an integer in `0..=100`. Sub-rubrics are capped individually and
//! the total is clamped, so adding a rubric line can never push a score past
//! 100.

pub mod ats;
pub mod impact;
pub mod readability;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Resume;

pub use ats::calculate_ats_score;
pub use impact::calculate_impact_score;
pub use readability::calculate_readability_score;

/// Upper bound for every score.
pub const MAX_SCORE: u8 = 100;

/// The three scores for one résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Scores {
    /// Applicant-tracking-system compatibility.
    pub ats: u8,
    /// Readability.
    pub readability: u8,
    /// Impact.
    pub impact: u8,
}

impl Scores {
    /// Run all three calculators.
    pub fn compute(resume: &Resume) -> Self {
        Self {
            ats: calculate_ats_score(resume),
            readability: calculate_readability_score(resume),
            impact: calculate_impact_score(resume),
        }
    }
}

/// Clamp a raw point total to `0..=100`.
fn clamp_score(points: u32) -> u8 {
    u8::try_from(points.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}

/// `per_item * count`, capped at `cap`.
fn capped(count: usize, per_item: u32, cap: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(per_item)
        .min(cap)
}

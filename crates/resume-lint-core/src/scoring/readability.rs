//! Readability score: how quickly a reviewer can scan the résumé.
//!
//! | Rubric        | Max | Points                                                    |
//! |---------------|-----|-----------------------------------------------------------|
//! | Summary       | 20  | 30–100 words 20, any other non-empty summary 10           |
//! | Descriptions  | 30  | per entry: achievements 5, one 50–200 char bullet 5       |
//! | Bullet count  | 20  | ≥10 achievements 20, ≥5 achievements 10                   |
//! | Completeness  | 30  | summary 10, experience 10, education 5, skills 5          |

use std::ops::RangeInclusive;

use crate::model::{ExperienceEntry, Resume};

use super::clamp_score;

/// Summary word count that earns full summary points.
pub const SUMMARY_WORDS: RangeInclusive<usize> = 30..=100;

/// Achievement length, in characters, considered well-sized.
pub const ACHIEVEMENT_CHARS: RangeInclusive<usize> = 50..=200;

const DESCRIPTION_CAP: u32 = 30;

/// Score how scannable the résumé is.
#[tracing::instrument(skip_all)]
pub fn calculate_readability_score(resume: &Resume) -> u8 {
    let summary = summary_points(resume);
    let descriptions = description_points(resume);
    let bullets = bullet_points(resume);
    let completeness = completeness_points(resume);
    tracing::trace!(summary, descriptions, bullets, completeness, "readability rubric");

    clamp_score(summary + descriptions + bullets + completeness)
}

fn summary_points(resume: &Resume) -> u32 {
    if !resume.has_summary() {
        return 0;
    }
    let words = resume.summary().split_whitespace().count();
    if SUMMARY_WORDS.contains(&words) { 20 } else { 10 }
}

fn description_points(resume: &Resume) -> u32 {
    resume
        .experience
        .iter()
        .map(entry_description_points)
        .sum::<u32>()
        .min(DESCRIPTION_CAP)
}

fn entry_description_points(entry: &ExperienceEntry) -> u32 {
    let mut points = 0;
    if !entry.achievements.is_empty() {
        points += 5;
    }
    if entry
        .achievements
        .iter()
        .any(|a| ACHIEVEMENT_CHARS.contains(&a.chars().count()))
    {
        points += 5;
    }
    points
}

fn bullet_points(resume: &Resume) -> u32 {
    match resume.achievements().count() {
        n if n >= 10 => 20,
        n if n >= 5 => 10,
        _ => 0,
    }
}

fn completeness_points(resume: &Resume) -> u32 {
    let mut points = 0;
    if resume.has_summary() {
        points += 10;
    }
    if !resume.experience.is_empty() {
        points += 10;
    }
    if !resume.education.is_empty() {
        points += 5;
    }
    if !resume.skills.is_empty() {
        points += 5;
    }
    points
}

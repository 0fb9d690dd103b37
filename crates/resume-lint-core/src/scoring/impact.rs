//! Impact score: how well achievements are quantified and owned.
//!
//! - Metrics: 10 per metric entry, max 50
//! - Quantified achievements (containing a digit): 5 each, max 30
//! - Achievements using a power verb: 2 each, max 20
//!
//! A power verb counts only at the start of a word, so "Handled" earns no
//! credit for "Led".

use crate::model::Resume;
use crate::power_verbs::contains_power_verb;

use super::{capped, clamp_score};

/// Score how much measurable impact the experience section shows.
#[tracing::instrument(skip_all)]
pub fn calculate_impact_score(resume: &Resume) -> u8 {
    let metrics = capped(resume.metric_count(), 10, 50);

    let quantified = resume
        .achievements()
        .filter(|a| a.chars().any(|c| c.is_ascii_digit()))
        .count();
    let quantified = capped(quantified, 5, 30);

    let powered = resume
        .achievements()
        .filter(|a| contains_power_verb(a))
        .count();
    let powered = capped(powered, 2, 20);

    tracing::trace!(metrics, quantified, powered, "impact rubric");
    clamp_score(metrics + quantified + powered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExperienceEntry;

    fn resume_with(entries: Vec<ExperienceEntry>) -> Resume {
        Resume {
            experience: entries,
            ..Default::default()
        }
    }

    fn entry(achievements: &[&str], metrics: usize) -> ExperienceEntry {
        ExperienceEntry {
            achievements: achievements.iter().map(|s| s.to_string()).collect(),
            metrics: (0..metrics).map(|i| format!("metric {i}")).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_resume_scores_zero() {
        assert_eq!(calculate_impact_score(&Resume::default()), 0);
    }

    #[test]
    fn quantified_entry_without_power_verbs() {
        let resume = resume_with(vec![entry(
            &[
                "Cut build times by 40%",
                "Onboarded 12 new hires",
                "Closed 3 enterprise deals",
            ],
            1,
        )]);
        // one metric 10 + three quantified 15
        assert_eq!(calculate_impact_score(&resume), 25);
    }

    #[test]
    fn quantified_entry_with_power_verbs() {
        let resume = resume_with(vec![entry(
            &[
                "Engineered a cache cutting latency 40%",
                "Mentored 4 engineers",
                "Scaled ingestion to 2B events/day",
            ],
            1,
        )]);
        // 10 + 15 + three power verbs 6
        assert_eq!(calculate_impact_score(&resume), 31);
    }

    #[test]
    fn metrics_cap_at_50() {
        let resume = resume_with(vec![entry(&[], 4), entry(&[], 4)]);
        assert_eq!(calculate_impact_score(&resume), 50);
    }

    #[test]
    fn quantification_caps_at_30() {
        let bullets: Vec<String> = (0..8).map(|i| format!("Shipped release {i}")).collect();
        let refs: Vec<&str> = bullets.iter().map(String::as_str).collect();
        let resume = resume_with(vec![entry(&refs, 0)]);
        assert_eq!(calculate_impact_score(&resume), 30);
    }

    #[test]
    fn power_verbs_cap_at_20() {
        let bullets = vec!["Optimized the query planner"; 15];
        let resume = resume_with(vec![entry(&bullets, 0)]);
        assert_eq!(calculate_impact_score(&resume), 20);
    }

    #[test]
    fn power_verbs_ignore_case() {
        let resume = resume_with(vec![entry(&["SPEARHEADED the migration"], 0)]);
        assert_eq!(calculate_impact_score(&resume), 2);
    }

    #[test]
    fn verb_inside_a_word_earns_nothing() {
        let resume = resume_with(vec![entry(&["Handled escalations", "A skilled operator"], 0)]);
        assert_eq!(calculate_impact_score(&resume), 0);

        let resume = resume_with(vec![entry(&["Led escalations"], 0)]);
        assert_eq!(calculate_impact_score(&resume), 2);
    }

    #[test]
    fn maxed_out_resume_scores_100() {
        let bullets = vec!["Launched 10 products"; 10];
        let resume = resume_with(vec![entry(&bullets, 5)]);
        assert_eq!(calculate_impact_score(&resume), 100);
    }
}

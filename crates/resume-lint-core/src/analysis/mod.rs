//! Résumé content analysis.
//!
//! [`analyze_resume_content`] is the single entry point: it runs the weak
//! phrase detector over the summary and every achievement, computes the three
//! scores independently, and derives suggestions from both.
//!
//! Every stage is a pure function of the résumé, so callers can also invoke
//! the detector, calculators, or suggestion rules individually.

use crate::detector;
use crate::lexicon::Lexicon;
use crate::model::Resume;
use crate::report::{ResumeContentIntelligence, WeakPhrase};
use crate::scoring::Scores;
use crate::suggestions;

/// Location label for detections in the summary.
pub const SUMMARY_LOCATION: &str = "Summary";

/// Location label for an achievement, using 1-based indices.
pub fn achievement_location(entry_index: usize, achievement_index: usize) -> String {
    format!(
        "Experience {}, Achievement {}",
        entry_index + 1,
        achievement_index + 1
    )
}

/// Analyze a résumé with the builtin lexicon.
pub fn analyze_resume_content(resume: &Resume) -> ResumeContentIntelligence {
    analyze_resume_content_with(Lexicon::builtin(), resume)
}

/// Analyze a résumé with a caller-supplied lexicon.
#[tracing::instrument(
    skip_all,
    fields(
        experience = resume.experience.len(),
        skills = resume.skills.len(),
        lexicon = lexicon.len()
    )
)]
pub fn analyze_resume_content_with(lexicon: &Lexicon, resume: &Resume) -> ResumeContentIntelligence {
    let weak_phrases = collect_weak_phrases(lexicon, resume);
    let scores = Scores::compute(resume);
    let suggestions = suggestions::generate_suggestions(resume, &weak_phrases, &scores);

    tracing::debug!(
        weak_phrases = weak_phrases.len(),
        ats = scores.ats,
        readability = scores.readability,
        impact = scores.impact,
        suggestions = suggestions.len(),
        "resume analyzed"
    );

    ResumeContentIntelligence {
        weak_phrases,
        missing_keywords: Vec::new(),
        ats_score: scores.ats,
        readability_score: scores.readability,
        impact_score: scores.impact,
        suggestions,
    }
}

/// Weak phrases across the summary, then each achievement in résumé order.
pub fn collect_weak_phrases(lexicon: &Lexicon, resume: &Resume) -> Vec<WeakPhrase> {
    let mut found = detector::detect_with(lexicon, resume.summary(), SUMMARY_LOCATION);

    for (i, entry) in resume.experience.iter().enumerate() {
        for (j, achievement) in entry.achievements.iter().enumerate() {
            found.extend(detector::detect_with(
                lexicon,
                achievement,
                &achievement_location(i, j),
            ));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EducationEntry, ExperienceEntry, PersonalInfo, Proficiency, Skill};
    use crate::report::Section;

    fn summary_only(summary: &str) -> Resume {
        Resume {
            personal_info: PersonalInfo {
                summary: Some(summary.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn empty_resume() {
        let report = analyze_resume_content(&Resume::default());
        assert!(report.weak_phrases.is_empty());
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.ats_score, 5);
        assert_eq!(report.readability_score, 0);
        assert_eq!(report.impact_score, 0);

        let sections: Vec<_> = report.suggestions.iter().map(|s| s.section).collect();
        assert!(sections.contains(&Section::Personal));
        assert!(sections.contains(&Section::Skills));
        assert!(!sections.contains(&Section::Experience));
        assert!(!sections.contains(&Section::Content));
    }

    #[test]
    fn summary_weak_phrases() {
        let resume = summary_only(
            "I was responsible for managing the team and helped various stakeholders",
        );
        let report = analyze_resume_content(&resume);
        for phrase in ["responsible for", "helped", "various"] {
            let hit = report
                .weak_phrases
                .iter()
                .find(|w| w.phrase == phrase)
                .unwrap_or_else(|| panic!("missing {phrase}"));
            assert_eq!(hit.location, "Summary");
        }
    }

    #[test]
    fn repeated_summary_phrase_reported_once() {
        let resume = summary_only("Responsible for QA. Also responsible for releases.");
        let report = analyze_resume_content(&resume);
        let hits = report
            .weak_phrases
            .iter()
            .filter(|w| w.phrase == "responsible for")
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn achievement_locations_are_one_based() {
        let resume = Resume {
            experience: vec![
                ExperienceEntry {
                    achievements: vec!["Shipped the billing rewrite".into()],
                    ..Default::default()
                },
                ExperienceEntry {
                    achievements: vec!["Helped onboard clients".into(), "Worked on SSO".into()],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let report = analyze_resume_content(&resume);
        let locations: Vec<_> = report
            .weak_phrases
            .iter()
            .map(|w| (w.phrase.as_str(), w.location.as_str()))
            .collect();
        assert_eq!(
            locations,
            vec![
                ("helped", "Experience 2, Achievement 1"),
                ("worked on", "Experience 2, Achievement 2"),
            ]
        );
    }

    #[test]
    fn same_phrase_in_different_fields_counts_per_field() {
        let mut resume = summary_only("Helped the team.");
        resume.experience.push(ExperienceEntry {
            achievements: vec!["Helped ship v2".into()],
            ..Default::default()
        });
        let report = analyze_resume_content(&resume);
        assert_eq!(report.weak_phrases.len(), 2);
    }

    #[test]
    fn skills_education_and_ats_template() {
        let mut skills: Vec<Skill> = (0..10)
            .map(|i| Skill {
                name: Some(format!("skill {i}")),
                proficiency: Some(Proficiency::Beginner),
            })
            .collect();
        skills[9].proficiency = Some(Proficiency::Expert);
        let mut resume = Resume {
            education: vec![EducationEntry::default(); 5],
            skills,
            ..Default::default()
        };
        resume.settings.ats_optimized = true;

        let report = analyze_resume_content(&resume);
        assert_eq!(report.ats_score, 15 + 20 + 5 + 10);
    }

    #[test]
    fn quantified_entry_impact() {
        let resume = Resume {
            experience: vec![ExperienceEntry {
                achievements: vec![
                    "Cut costs by 30%".into(),
                    "Hired 5 people".into(),
                    "Resolved 200 tickets".into(),
                ],
                metrics: vec!["$1M saved".into()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let report = analyze_resume_content(&resume);
        assert_eq!(report.impact_score, 10 + 15);
    }

    #[test]
    fn analysis_is_idempotent() {
        let resume = summary_only("Worked on many things and helped a lot of people.");
        let first = serde_json::to_string(&analyze_resume_content(&resume)).unwrap();
        let second = serde_json::to_string(&analyze_resume_content(&resume)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn weak_phrase_rule_fires_above_five() {
        let resume = summary_only(
            "Responsible for ops, helped sales, worked on various stuff, handled many tickets.",
        );
        let report = analyze_resume_content(&resume);
        assert!(report.weak_phrases.len() > 5);
        let content = report
            .suggestions
            .iter()
            .find(|s| s.section == Section::Content)
            .expect("content warning");
        assert!(content.message.contains(&report.weak_phrases.len().to_string()));
    }

    #[test]
    fn extended_lexicon_is_applied() {
        let lexicon = Lexicon::with_extra([("utilized", "Used")]).unwrap();
        let resume = summary_only("Utilized Terraform.");
        let report = analyze_resume_content_with(&lexicon, &resume);
        assert_eq!(report.weak_phrases.len(), 1);
        assert_eq!(report.weak_phrases[0].suggestion, "Used");
    }

    #[test]
    fn scores_stay_in_bounds() {
        let bullet = "Engineered 10 services handling 5M requests and helped various teams";
        let resume = Resume {
            personal_info: PersonalInfo {
                summary: Some("word ".repeat(60)),
                email: Some("a@b.co".into()),
                ..Default::default()
            },
            experience: vec![
                ExperienceEntry {
                    achievements: vec![bullet.to_string(); 12],
                    metrics: vec!["x".into(); 9],
                    ..Default::default()
                };
                4
            ],
            ..Default::default()
        };
        let report = analyze_resume_content(&resume);
        assert!(report.ats_score <= 100);
        assert!(report.readability_score <= 100);
        assert_eq!(report.impact_score, 100);
    }
}

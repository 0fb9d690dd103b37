//! Rule-based improvement suggestions.
//!
//! Rules are evaluated in a fixed order and never suppress one another, so
//! the same input always yields the same suggestions in the same order.

use crate::model::Resume;
use crate::report::{Section, Suggestion, SuggestionKind, WeakPhrase};
use crate::scoring::Scores;

/// ATS score below which a general warning is raised.
pub const ATS_WARNING_THRESHOLD: u8 = 70;

/// Skill count below which more skills are suggested.
pub const MIN_SKILLS: usize = 8;

/// Weak phrase detections above which a content warning is raised.
pub const MAX_WEAK_PHRASES: usize = 5;

/// Generate suggestions from the résumé, its weak phrases, and its scores.
#[tracing::instrument(skip_all, fields(weak_phrases = weak_phrases.len()))]
pub fn generate_suggestions(
    resume: &Resume,
    weak_phrases: &[WeakPhrase],
    scores: &Scores,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if scores.ats < ATS_WARNING_THRESHOLD {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Warning,
            section: Section::General,
            message: "Your ATS score is below 70. Add keywords, contact details, and \
                      use the ATS-optimized template to improve parsing."
                .to_string(),
        });
    }

    if !resume.personal_info.has_professional_profile() {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Improvement,
            section: Section::Personal,
            message: "Add a LinkedIn or GitHub profile to strengthen credibility.".to_string(),
        });
    }

    if resume.experience.iter().any(|e| e.achievements.is_empty()) {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Error,
            section: Section::Experience,
            message: "Some experience entries have no achievements. Add 3-5 bullet points \
                      describing your impact in each role."
                .to_string(),
        });
    }

    if resume.skills.len() < MIN_SKILLS {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Improvement,
            section: Section::Skills,
            message: "Add more skills to improve keyword matching. Aim for 8-12 relevant skills."
                .to_string(),
        });
    }

    if weak_phrases.len() > MAX_WEAK_PHRASES {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Warning,
            section: Section::Content,
            message: format!(
                "Found {} weak phrases. Replace them with strong action verbs to show ownership.",
                weak_phrases.len()
            ),
        });
    }

    tracing::debug!(count = suggestions.len(), "suggestions generated");
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExperienceEntry, PersonalInfo, Skill};

    const GOOD_SCORES: Scores = Scores {
        ats: 90,
        readability: 90,
        impact: 90,
    };

    fn weak(n: usize) -> Vec<WeakPhrase> {
        (0..n)
            .map(|i| WeakPhrase {
                phrase: format!("phrase {i}"),
                suggestion: "Led".to_string(),
                location: "Summary".to_string(),
            })
            .collect()
    }

    fn polished() -> Resume {
        Resume {
            personal_info: PersonalInfo {
                linkedin: Some("in/jdoe".into()),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                achievements: vec!["Shipped".into()],
                ..Default::default()
            }],
            skills: vec![Skill::default(); 8],
            ..Default::default()
        }
    }

    fn sections(suggestions: &[Suggestion]) -> Vec<Section> {
        suggestions.iter().map(|s| s.section).collect()
    }

    #[test]
    fn polished_resume_gets_no_suggestions() {
        assert!(generate_suggestions(&polished(), &weak(5), &GOOD_SCORES).is_empty());
    }

    #[test]
    fn empty_resume_rules() {
        let scores = Scores::compute(&Resume::default());
        let suggestions = generate_suggestions(&Resume::default(), &[], &scores);
        assert_eq!(
            sections(&suggestions),
            vec![Section::General, Section::Personal, Section::Skills]
        );
    }

    #[test]
    fn low_ats_warns() {
        let scores = Scores {
            ats: 69,
            ..GOOD_SCORES
        };
        let suggestions = generate_suggestions(&polished(), &[], &scores);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Warning);
        assert_eq!(suggestions[0].section, Section::General);
    }

    #[test]
    fn ats_of_70_does_not_warn() {
        let scores = Scores {
            ats: 70,
            ..GOOD_SCORES
        };
        assert!(generate_suggestions(&polished(), &[], &scores).is_empty());
    }

    #[test]
    fn entry_without_achievements_is_an_error() {
        let mut resume = polished();
        resume.experience.push(ExperienceEntry::default());
        let suggestions = generate_suggestions(&resume, &[], &GOOD_SCORES);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::Error);
        assert_eq!(suggestions[0].section, Section::Experience);
    }

    #[test]
    fn too_few_skills() {
        let mut resume = polished();
        resume.skills.truncate(7);
        let suggestions = generate_suggestions(&resume, &[], &GOOD_SCORES);
        assert_eq!(sections(&suggestions), vec![Section::Skills]);
        assert_eq!(suggestions[0].kind, SuggestionKind::Improvement);
    }

    #[test]
    fn weak_phrase_message_includes_count() {
        let suggestions = generate_suggestions(&polished(), &weak(6), &GOOD_SCORES);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].section, Section::Content);
        assert!(suggestions[0].message.contains("Found 6 weak phrases"));
    }

    #[test]
    fn all_rules_fire_in_order() {
        let resume = Resume {
            experience: vec![ExperienceEntry::default()],
            ..Default::default()
        };
        let scores = Scores {
            ats: 10,
            ..GOOD_SCORES
        };
        let suggestions = generate_suggestions(&resume, &weak(7), &scores);
        assert_eq!(
            sections(&suggestions),
            vec![
                Section::General,
                Section::Personal,
                Section::Experience,
                Section::Skills,
                Section::Content,
            ]
        );
    }
}

//! ATS (applicant tracking system) compatibility score.
//!
//! | Rubric      | Max | Points                                                      |
//! |-------------|-----|-------------------------------------------------------------|
//! | Contact     | 20  | email 5, phone 5, location 5, LinkedIn or GitHub 5          |
//! | Experience  | 25  | any entry 10, any achievements 10, any metrics 5            |
//! | Education   | 15  | any entry 15                                                |
//! | Skills      | 20  | ≥5 skills 10, ≥10 skills +5, any advanced/expert +5         |
//! | Formatting  | 20  | no profile image 5, ATS template 10, summary ≥100 chars 5   |

use crate::model::Resume;

use super::clamp_score;

/// Summary length (in characters) that earns the formatting bonus.
pub const MIN_SUMMARY_CHARS: usize = 100;

/// Score how well an ATS is likely to parse the résumé.
#[tracing::instrument(skip_all)]
pub fn calculate_ats_score(resume: &Resume) -> u8 {
    let contact = contact_points(resume);
    let experience = experience_points(resume);
    let education = education_points(resume);
    let skills = skills_points(resume);
    let formatting = formatting_points(resume);
    tracing::trace!(contact, experience, education, skills, formatting, "ats rubric");

    clamp_score(contact + experience + education + skills + formatting)
}

fn contact_points(resume: &Resume) -> u32 {
    let info = &resume.personal_info;
    [
        info.has_email(),
        info.has_phone(),
        info.has_location(),
        info.has_professional_profile(),
    ]
    .into_iter()
    .filter(|&present| present)
    .count() as u32
        * 5
}

fn experience_points(resume: &Resume) -> u32 {
    let mut points = 0;
    if !resume.experience.is_empty() {
        points += 10;
    }
    if resume.experience.iter().any(|e| !e.achievements.is_empty()) {
        points += 10;
    }
    if resume.experience.iter().any(|e| !e.metrics.is_empty()) {
        points += 5;
    }
    points
}

fn education_points(resume: &Resume) -> u32 {
    if resume.education.is_empty() { 0 } else { 15 }
}

fn skills_points(resume: &Resume) -> u32 {
    let count = resume.skills.len();
    let mut points = 0;
    if count >= 5 {
        points += 10;
    }
    if count >= 10 {
        points += 5;
    }
    if resume.skills.iter().any(|s| s.is_high_proficiency()) {
        points += 5;
    }
    points
}

fn formatting_points(resume: &Resume) -> u32 {
    let mut points = 0;
    if !resume.settings.show_profile_image {
        points += 5;
    }
    if resume.settings.ats_optimized {
        points += 10;
    }
    if resume.summary().chars().count() >= MIN_SUMMARY_CHARS {
        points += 5;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        EducationEntry, ExperienceEntry, PersonalInfo, Proficiency, ResumeSettings, Skill,
    };

    fn skills(n: usize) -> Vec<Skill> {
        (0..n)
            .map(|i| Skill {
                name: Some(format!("skill-{i}")),
                proficiency: Some(Proficiency::Intermediate),
            })
            .collect()
    }

    fn full_resume() -> Resume {
        let mut all_skills = skills(12);
        all_skills[0].proficiency = Some(Proficiency::Expert);
        Resume {
            personal_info: PersonalInfo {
                summary: Some("x".repeat(120)),
                email: Some("a@b.co".into()),
                phone: Some("555-0100".into()),
                location: Some("Berlin".into()),
                github: Some("gh/jdoe".into()),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                achievements: vec!["Shipped it".into()],
                metrics: vec!["2x".into()],
                ..Default::default()
            }],
            education: vec![EducationEntry::default()],
            skills: all_skills,
            settings: ResumeSettings {
                show_profile_image: false,
                ats_optimized: true,
            },
        }
    }

    #[test]
    fn empty_resume_only_gets_no_image_bonus() {
        assert_eq!(calculate_ats_score(&Resume::default()), 5);
    }

    #[test]
    fn profile_image_forfeits_bonus() {
        let resume = Resume {
            settings: ResumeSettings {
                show_profile_image: true,
                ats_optimized: false,
            },
            ..Default::default()
        };
        assert_eq!(calculate_ats_score(&resume), 0);
    }

    #[test]
    fn complete_resume_scores_100() {
        assert_eq!(calculate_ats_score(&full_resume()), 100);
    }

    #[test]
    fn contact_points_each_worth_five() {
        let resume = Resume {
            personal_info: PersonalInfo {
                email: Some("a@b.co".into()),
                linkedin: Some("in/jdoe".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(calculate_ats_score(&resume), 5 + 10);
    }

    #[test]
    fn linkedin_and_github_share_one_bonus() {
        let resume = Resume {
            personal_info: PersonalInfo {
                linkedin: Some("in/jdoe".into()),
                github: Some("gh/jdoe".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(calculate_ats_score(&resume), 5 + 5);
    }

    #[test]
    fn education_is_binary() {
        let one = Resume {
            education: vec![EducationEntry::default()],
            ..Default::default()
        };
        let five = Resume {
            education: vec![EducationEntry::default(); 5],
            ..Default::default()
        };
        assert_eq!(calculate_ats_score(&one), calculate_ats_score(&five));
        assert_eq!(calculate_ats_score(&one), 5 + 15);
    }

    #[test]
    fn skill_thresholds() {
        let score = |n| {
            calculate_ats_score(&Resume {
                skills: skills(n),
                ..Default::default()
            })
        };
        assert_eq!(score(4), 5);
        assert_eq!(score(5), 5 + 10);
        assert_eq!(score(9), 5 + 10);
        assert_eq!(score(10), 5 + 15);
    }

    #[test]
    fn full_skills_and_ats_template_bonus() {
        let mut all_skills = skills(10);
        all_skills[3].proficiency = Some(Proficiency::Expert);
        let resume = Resume {
            education: vec![EducationEntry::default(); 5],
            skills: all_skills,
            settings: ResumeSettings {
                show_profile_image: false,
                ats_optimized: true,
            },
            ..Default::default()
        };
        // education 15 + skills 20 + no image 5 + ats template 10
        assert_eq!(calculate_ats_score(&resume), 50);
    }

    #[test]
    fn summary_bonus_needs_100_chars() {
        let with_summary = |len| Resume {
            personal_info: PersonalInfo {
                summary: Some("é".repeat(len)),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(calculate_ats_score(&with_summary(99)), 5);
        assert_eq!(calculate_ats_score(&with_summary(100)), 10);
    }

    #[test]
    fn adding_fields_never_lowers_score() {
        let mut resume = Resume::default();
        let mut last = calculate_ats_score(&resume);

        let steps: Vec<Box<dyn Fn(&mut Resume)>> = vec![
            Box::new(|r| r.personal_info.phone = Some("555".into())),
            Box::new(|r| r.skills = skills(6)),
            Box::new(|r| r.settings.ats_optimized = true),
            Box::new(|r| r.experience.push(ExperienceEntry::default())),
            Box::new(|r| r.experience[0].achievements.push("Did a thing".into())),
            Box::new(|r| r.experience[0].metrics.push("10%".into())),
            Box::new(|r| r.education.push(EducationEntry::default())),
        ];
        for step in steps {
            step(&mut resume);
            let next = calculate_ats_score(&resume);
            assert!(next >= last, "score dropped from {last} to {next}");
            last = next;
        }
    }
}

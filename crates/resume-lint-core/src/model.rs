//! Résumé input model.
//!
//! Mirrors the record the résumé builder hands to the engine. Keys are
//! camelCase on the wire. Every field is optional: absent text is `None`,
//! absent sequences are empty and absent flags are `false`. An explicit
//! `null` is read the same as a missing key, so no absent field can make
//! deserialization (or scoring) fail.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A résumé record. Read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    /// Contact details and summary.
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "Option<PersonalInfo>")]
    pub personal_info: PersonalInfo,
    /// Work history, most relevant first.
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Vec<ExperienceEntry>>")]
    pub experience: Vec<ExperienceEntry>,
    /// Education history. Only presence matters to scoring.
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Vec<EducationEntry>>")]
    pub education: Vec<EducationEntry>,
    /// Listed skills.
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Vec<Skill>>")]
    pub skills: Vec<Skill>,
    /// Presentation flags.
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "Option<ResumeSettings>")]
    pub settings: ResumeSettings,
}

impl Resume {
    /// The summary text, or `""` when absent.
    pub fn summary(&self) -> &str {
        self.personal_info.summary.as_deref().unwrap_or_default()
    }

    /// Whether the summary has any non-whitespace text.
    pub fn has_summary(&self) -> bool {
        is_present(self.personal_info.summary.as_deref())
    }

    /// Iterate over every achievement across all experience entries.
    pub fn achievements(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|entry| entry.achievements.iter().map(String::as_str))
    }

    /// Total number of metric entries across all experience entries.
    pub fn metric_count(&self) -> usize {
        self.experience.iter().map(|entry| entry.metrics.len()).sum()
    }
}

/// Contact details and the free-text summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    /// Candidate name.
    pub full_name: Option<String>,
    /// Professional summary paragraph.
    pub summary: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// City / region.
    pub location: Option<String>,
    /// LinkedIn profile URL or handle.
    pub linkedin: Option<String>,
    /// GitHub profile URL or handle.
    pub github: Option<String>,
    /// Personal website.
    pub website: Option<String>,
}

impl PersonalInfo {
    /// Whether an email address is present.
    pub fn has_email(&self) -> bool {
        is_present(self.email.as_deref())
    }

    /// Whether a phone number is present.
    pub fn has_phone(&self) -> bool {
        is_present(self.phone.as_deref())
    }

    /// Whether a location is present.
    pub fn has_location(&self) -> bool {
        is_present(self.location.as_deref())
    }

    /// Whether a LinkedIn or GitHub profile is present.
    pub fn has_professional_profile(&self) -> bool {
        is_present(self.linkedin.as_deref()) || is_present(self.github.as_deref())
    }
}

/// One position in the work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Employer name.
    pub company: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Start date as entered by the user.
    pub start_date: Option<String>,
    /// End date as entered by the user.
    pub end_date: Option<String>,
    /// Free-text role description.
    pub description: Option<String>,
    /// Bullet points, in display order.
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Vec<String>>")]
    pub achievements: Vec<String>,
    /// Quantified facts (e.g. "Cut p95 latency by 40%").
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Vec<String>>")]
    pub metrics: Vec<String>,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    /// School or university.
    pub institution: Option<String>,
    /// Degree earned.
    pub degree: Option<String>,
    /// Field of study.
    pub field: Option<String>,
    /// Graduation date as entered by the user.
    pub graduation_date: Option<String>,
}

/// A listed skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    /// Skill name.
    pub name: Option<String>,
    /// Self-assessed level.
    #[schemars(with = "Option<String>")]
    pub proficiency: Option<Proficiency>,
}

impl Skill {
    /// Whether the skill is rated advanced or expert.
    pub fn is_high_proficiency(&self) -> bool {
        matches!(
            self.proficiency,
            Some(Proficiency::Advanced | Proficiency::Expert)
        )
    }
}

/// Skill proficiency level.
///
/// Parsed case-insensitively. Levels outside the known four are kept as
/// [`Proficiency::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Proficiency {
    /// Just starting out.
    Beginner,
    /// Working knowledge.
    Intermediate,
    /// Strong, independent use.
    Advanced,
    /// Recognized authority.
    Expert,
    /// Any other label.
    Other(String),
}

impl Proficiency {
    /// Returns the level as a lowercase string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Proficiency {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            "expert" => Self::Expert,
            _ => Self::Other(value),
        }
    }
}

impl From<Proficiency> for String {
    fn from(value: Proficiency) -> Self {
        match value {
            Proficiency::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation flags that affect ATS parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeSettings {
    /// Whether a profile photo is rendered.
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "Option<bool>")]
    pub show_profile_image: bool,
    /// Whether the ATS-optimized template is selected.
    #[serde(deserialize_with = "null_as_default")]
    #[schemars(with = "Option<bool>")]
    pub ats_optimized: bool,
}

/// Read `null` as the field's default. Missing keys are covered by
/// `#[serde(default)]` on the containing struct.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A text field counts as present only if it has non-whitespace content.
fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

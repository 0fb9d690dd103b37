//! Report structs returned by the analysis pipeline.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use in
//! both CLI JSON output and MCP tool responses. Keys are camelCase to match
//! the résumé record they describe.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Full content analysis of one résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContentIntelligence {
    /// Weak phrases found in the summary and achievements.
    pub weak_phrases: Vec<WeakPhrase>,
    /// Keywords missing for the target industry.
    ///
    /// Not yet populated: always empty.
    pub missing_keywords: Vec<String>,
    /// Applicant-tracking-system compatibility (0–100).
    pub ats_score: u8,
    /// Readability (0–100).
    pub readability_score: u8,
    /// Impact (0–100).
    pub impact_score: u8,
    /// Improvement suggestions, in rule order.
    pub suggestions: Vec<Suggestion>,
}

/// A weak phrase detected in one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WeakPhrase {
    /// The lexicon phrase that matched.
    pub phrase: String,
    /// Suggested stronger alternatives.
    pub suggestion: String,
    /// Where it was found, e.g. `"Summary"` or `"Experience 2, Achievement 1"`.
    pub location: String,
}

/// One improvement suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Severity.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Résumé section the suggestion applies to.
    pub section: Section,
    /// Human-readable message.
    pub message: String,
}

/// Suggestion severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Likely to hurt the résumé.
    Warning,
    /// Optional polish.
    Improvement,
    /// Something is missing outright.
    Error,
}

impl SuggestionKind {
    /// Returns the kind as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Improvement => "improvement",
            Self::Error => "error",
        }
    }
}

/// Résumé section a suggestion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// The résumé as a whole.
    General,
    /// Contact details.
    Personal,
    /// Work history.
    Experience,
    /// Skills list.
    Skills,
    /// Wording across all text fields.
    Content,
}

impl Section {
    /// Returns the section as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Personal => "personal",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Content => "content",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_camel_case() {
        let report = ResumeContentIntelligence {
            weak_phrases: vec![],
            missing_keywords: vec![],
            ats_score: 5,
            readability_score: 0,
            impact_score: 0,
            suggestions: vec![Suggestion {
                kind: SuggestionKind::Improvement,
                section: Section::Skills,
                message: "Add skills.".to_string(),
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["atsScore"], 5);
        assert!(json["missingKeywords"].as_array().unwrap().is_empty());
        assert_eq!(json["suggestions"][0]["type"], "improvement");
        assert_eq!(json["suggestions"][0]["section"], "skills");
    }
}

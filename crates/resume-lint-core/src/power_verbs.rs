//! Power verb taxonomy and advisor.
//!
//! Strong action verbs grouped by the kind of contribution they signal.
//! [`suggest_power_verbs`] picks a group from free-text context with a fixed
//! cascade of trigger substrings.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Category of power verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VerbCategory {
    /// Directing people and initiatives.
    Leadership,
    /// Reaching goals and winning recognition.
    Achievement,
    /// Building something new.
    Creation,
    /// Making something better.
    Improvement,
    /// Investigating and evaluating.
    Analysis,
    /// Working across teams.
    Collaboration,
    /// Expanding reach or revenue.
    Growth,
}

impl VerbCategory {
    /// Every category, in taxonomy order.
    pub const ALL: [Self; 7] = [
        Self::Leadership,
        Self::Achievement,
        Self::Creation,
        Self::Improvement,
        Self::Analysis,
        Self::Collaboration,
        Self::Growth,
    ];

    /// Returns the category as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Leadership => "leadership",
            Self::Achievement => "achievement",
            Self::Creation => "creation",
            Self::Improvement => "improvement",
            Self::Analysis => "analysis",
            Self::Collaboration => "collaboration",
            Self::Growth => "growth",
        }
    }
}

impl std::fmt::Display for VerbCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const LEADERSHIP: &[&str] = &[
    "Spearheaded",
    "Orchestrated",
    "Directed",
    "Championed",
    "Mobilized",
    "Headed",
    "Supervised",
    "Mentored",
    "Led",
];

const ACHIEVEMENT: &[&str] = &[
    "Achieved",
    "Exceeded",
    "Surpassed",
    "Attained",
    "Delivered",
    "Earned",
    "Secured",
    "Won",
];

const CREATION: &[&str] = &[
    "Engineered",
    "Designed",
    "Developed",
    "Launched",
    "Pioneered",
    "Established",
    "Founded",
    "Architected",
    "Built",
];

const IMPROVEMENT: &[&str] = &[
    "Optimized",
    "Streamlined",
    "Revamped",
    "Transformed",
    "Modernized",
    "Overhauled",
    "Accelerated",
    "Refined",
];

const ANALYSIS: &[&str] = &[
    "Analyzed",
    "Evaluated",
    "Assessed",
    "Investigated",
    "Diagnosed",
    "Forecasted",
    "Audited",
    "Quantified",
];

const COLLABORATION: &[&str] = &[
    "Partnered",
    "Collaborated",
    "Coordinated",
    "Unified",
    "Aligned",
    "Facilitated",
    "Negotiated",
    "Liaised",
];

const GROWTH: &[&str] = &[
    "Expanded",
    "Scaled",
    "Amplified",
    "Boosted",
    "Maximized",
    "Multiplied",
    "Generated",
    "Grew",
];

/// Verbs in one category.
pub const fn verbs_for(category: VerbCategory) -> &'static [&'static str] {
    match category {
        VerbCategory::Leadership => LEADERSHIP,
        VerbCategory::Achievement => ACHIEVEMENT,
        VerbCategory::Creation => CREATION,
        VerbCategory::Improvement => IMPROVEMENT,
        VerbCategory::Analysis => ANALYSIS,
        VerbCategory::Collaboration => COLLABORATION,
        VerbCategory::Growth => GROWTH,
    }
}

static ALL_VERBS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    VerbCategory::ALL
        .iter()
        .flat_map(|&c| verbs_for(c).iter().copied())
        .collect()
});

/// Case-insensitive matcher over the flattened taxonomy.
static VERB_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(ALL_VERBS.iter())
        .expect("valid verb automaton")
});

/// Every power verb across all categories, in taxonomy order.
pub fn all_power_verbs() -> &'static [&'static str] {
    &ALL_VERBS
}

/// Whether a word in `text` starts with a power verb, ignoring ASCII case.
///
/// A match must begin at the start of `text` or after a non-alphanumeric
/// character, so "skilled" and "Handled" do not count as "Led", while
/// "Led," and "co-led" do. The end of the word is left open.
pub fn contains_power_verb(text: &str) -> bool {
    VERB_MATCHER
        .find_overlapping_iter(text)
        .any(|m| starts_word(text, m.start()))
}

fn starts_word(text: &str, at: usize) -> bool {
    text[..at]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}

/// Context triggers checked in priority order.
const TRIGGERS: &[(VerbCategory, &[&str])] = &[
    (VerbCategory::Leadership, &["lead", "manage"]),
    (VerbCategory::Creation, &["create", "build"]),
    (VerbCategory::Improvement, &["improve", "optimize"]),
    (VerbCategory::Analysis, &["analyze", "research"]),
    (VerbCategory::Growth, &["grow", "scale"]),
    (VerbCategory::Collaboration, &["work with", "team"]),
];

/// Pick the verb category for a free-text context.
///
/// The first category whose trigger occurs in the lowercased context wins;
/// [`VerbCategory::Achievement`] is the fallback.
pub fn classify_context(context: &str) -> VerbCategory {
    let lower = context.to_lowercase();
    TRIGGERS
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| lower.contains(t)))
        .map_or(VerbCategory::Achievement, |(category, _)| *category)
}

/// Suggest power verbs relevant to `context`.
#[tracing::instrument(skip(context), fields(context_len = context.len()))]
pub fn suggest_power_verbs(context: &str) -> &'static [&'static str] {
    let category = classify_context(context);
    tracing::debug!(category = category.as_str(), "classified verb context");
    verbs_for(category)
}

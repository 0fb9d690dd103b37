//! Weak phrase lexicon.
//!
//! Maps low-impact phrasing to stronger alternatives. Each phrase is compiled
//! once into a whole-word, case-insensitive pattern; the builtin lexicon is
//! compiled on first use and shared for the life of the process.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::{LexiconError, LexiconResult};

/// Builtin weak phrases and their suggested replacements, in detection order.
pub const WEAK_PHRASES: &[(&str, &str)] = &[
    ("responsible for", "Led, Managed, Directed"),
    ("helped", "Facilitated, Enabled, Accelerated"),
    ("worked on", "Developed, Executed, Delivered"),
    ("assisted with", "Supported, Partnered on, Contributed to"),
    ("participated in", "Contributed to, Drove, Championed"),
    ("was involved in", "Spearheaded, Drove, Orchestrated"),
    ("duties included", "Delivered, Achieved, Accomplished"),
    ("tasked with", "Executed, Completed, Owned"),
    ("in charge of", "Directed, Oversaw, Headed"),
    ("handled", "Managed, Resolved, Administered"),
    ("dealt with", "Resolved, Negotiated, Addressed"),
    ("tried to", "Pursued, Initiated, Pioneered"),
    ("familiar with", "Proficient in, Experienced with"),
    ("various", "Name the specific items instead"),
    ("many", "Use a specific number"),
    ("several", "Use a specific number"),
    ("a lot of", "Use a specific quantity"),
    ("stuff", "Name the concrete deliverables"),
    ("successfully", "Let the result speak; drop the adverb"),
    ("hard worker", "Show results that demonstrate dedication"),
    ("team player", "Describe a concrete collaboration outcome"),
    ("detail-oriented", "Cite an example of your precision"),
    ("results-driven", "State the results you drove"),
    ("go-getter", "Describe an initiative you started"),
    ("think outside the box", "Describe the novel solution itself"),
];

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::from_pairs(WEAK_PHRASES.iter().copied()).expect("builtin lexicon compiles")
});

/// A compiled set of weak phrases.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

/// One weak phrase with its suggestion and compiled matcher.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    phrase: String,
    suggestion: String,
    pattern: Regex,
}

impl LexiconEntry {
    /// The weak phrase as listed.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The suggested replacement text.
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    /// Whether the phrase occurs in `text` as a whole word, ignoring case.
    pub fn is_in(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

impl Lexicon {
    /// The shipped lexicon, compiled once per process.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Compile a lexicon from `(phrase, suggestion)` pairs, keeping their order.
    pub fn from_pairs<I, P, S>(pairs: I) -> LexiconResult<Self>
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<String>,
        S: Into<String>,
    {
        let mut lexicon = Self {
            entries: Vec::new(),
        };
        for (phrase, suggestion) in pairs {
            lexicon.insert(phrase.into(), suggestion.into())?;
        }
        Ok(lexicon)
    }

    /// The builtin lexicon followed by `extra` phrases.
    ///
    /// An extra phrase that matches a builtin one (ignoring case) replaces
    /// its suggestion in place instead of adding a second entry.
    pub fn with_extra<I, P, S>(extra: I) -> LexiconResult<Self>
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<String>,
        S: Into<String>,
    {
        let mut lexicon = Self::builtin().clone();
        for (phrase, suggestion) in extra {
            lexicon.insert(phrase.into(), suggestion.into())?;
        }
        tracing::debug!(entries = lexicon.len(), "extended lexicon compiled");
        Ok(lexicon)
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon has no phrases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in detection order.
    pub fn entries(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter()
    }

    /// Look up the suggestion for a phrase, ignoring case.
    pub fn suggestion_for(&self, phrase: &str) -> Option<&str> {
        let wanted = normalize(phrase);
        self.entries
            .iter()
            .find(|e| normalize(&e.phrase) == wanted)
            .map(LexiconEntry::suggestion)
    }

    fn insert(&mut self, phrase: String, suggestion: String) -> LexiconResult<()> {
        let normalized = normalize(&phrase);
        if normalized.is_empty() {
            return Err(LexiconError::EmptyPhrase { suggestion });
        }

        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| normalize(&e.phrase) == normalized)
        {
            existing.suggestion = suggestion;
            return Ok(());
        }

        let pattern = compile_phrase(&normalized).map_err(|source| LexiconError::Pattern {
            phrase: phrase.clone(),
            source,
        })?;
        self.entries.push(LexiconEntry {
            phrase: normalized,
            suggestion,
            pattern,
        });
        Ok(())
    }
}

/// Lowercase and collapse internal whitespace.
fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Build the whole-word matcher for a normalized phrase.
///
/// Word boundaries are only asserted on sides that start or end with a word
/// character, so phrases with leading/trailing punctuation still match.
/// Internal spaces match any run of whitespace.
fn compile_phrase(phrase: &str) -> Result<Regex, regex::Error> {
    let body = phrase
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let start = if phrase.starts_with(is_word) { r"\b" } else { "" };
    let end = if phrase.ends_with(is_word) { r"\b" } else { "" };

    RegexBuilder::new(&format!("{start}{body}{end}"))
        .case_insensitive(true)
        .build()
}

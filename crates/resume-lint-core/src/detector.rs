//! Weak phrase detection.
//!
//! Presence is boolean per phrase per call: a phrase repeated in one field
//! yields a single detection.

use crate::lexicon::Lexicon;
use crate::report::WeakPhrase;

/// Detect builtin lexicon phrases in `text`, tagging each hit with `location`.
pub fn detect_weak_phrases(text: &str, location: &str) -> Vec<WeakPhrase> {
    detect_with(Lexicon::builtin(), text, location)
}

/// Detect phrases from `lexicon` in `text`, in lexicon order.
pub fn detect_with(lexicon: &Lexicon, text: &str, location: &str) -> Vec<WeakPhrase> {
    lexicon.detect(text, location)
}

impl Lexicon {
    /// Every phrase of this lexicon present in `text`, in lexicon order.
    pub fn detect(&self, text: &str, location: &str) -> Vec<WeakPhrase> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        self.entries()
            .filter(|entry| entry.is_in(text))
            .map(|entry| WeakPhrase {
                phrase: entry.phrase().to_string(),
                suggestion: entry.suggestion().to_string(),
                location: location.to_string(),
            })
            .collect()
    }
}

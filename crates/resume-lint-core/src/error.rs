//! Error types for resume-lint-core.
//!
//! The analysis pipeline itself is total; errors only arise at the edges
//! where configuration is loaded or the phrase lexicon is extended.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A score gate lies outside the 0-100 score scale.
    #[error("invalid configuration: {field} = {value} is above the maximum score of 100")]
    ScoreOutOfRange {
        /// The offending setting.
        field: &'static str,
        /// The configured value.
        value: u8,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when building a phrase lexicon.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A weak phrase was empty or whitespace-only.
    #[error("weak phrase must not be empty (suggestion: {suggestion:?})")]
    EmptyPhrase {
        /// The suggestion the empty phrase was paired with.
        suggestion: String,
    },

    /// The whole-word pattern for a phrase failed to compile.
    #[error("invalid pattern for weak phrase {phrase:?}: {source}")]
    Pattern {
        /// The offending phrase.
        phrase: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// Result type alias using [`LexiconError`].
pub type LexiconResult<T> = Result<T, LexiconError>;

//! Error types for oulipo-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Invalid-argument failures raised by constraint checks and gematria scoring.
///
/// These are never folded into a `false` verdict: a caller asking for a
/// nonsensical check gets an error, not an answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// A vowel was required but the argument is not one.
    #[error("'{0}' is not a vowel (expected one of A, E, I, O, U, Y)")]
    NotAVowel(String),

    /// A single-letter argument normalized to zero or several letters.
    #[error("expected a single letter, got {0:?}")]
    NotASingleLetter(String),

    /// A letter survived normalization without being a vowel or a consonant.
    #[error("'{0}' is neither a vowel nor a consonant")]
    UnclassifiedLetter(char),

    /// A reference string normalized to no letters at all.
    #[error("reference {0:?} contains no letters")]
    EmptyReference(String),

    /// A length specifier could not be parsed.
    #[error("invalid length specifier {0:?}: expected a number or a comma-separated list")]
    InvalidLength(String),

    /// Chunking was requested with a zero size.
    #[error("chunk size must be at least 1")]
    ZeroChunkSize,

    /// An unknown language tag was provided.
    #[error("unknown language: {name}. Use: {available}")]
    UnknownLanguage {
        /// The language tag that was requested.
        name: String,
        /// Comma-separated list of supported tags.
        available: String,
    },

    /// An unknown gematria table name was provided.
    #[error("unknown gematria table: {name}. Use: {available}")]
    UnknownTable {
        /// The table name that was requested.
        name: String,
        /// Comma-separated list of registered tables.
        available: String,
    },

    /// A custom gematria mapping could not be parsed.
    #[error("invalid gematria mapping: {0}")]
    InvalidTable(String),

    /// The letter has no value in the selected gematria table.
    #[error("letter '{letter}' has no value in gematria table {table}")]
    LetterOutsideTable {
        /// The offending letter.
        letter: char,
        /// The table that was used.
        table: String,
    },

    /// A gematria score does not fit in an `i64`.
    #[error("gematria score overflows in table {table}")]
    ScoreOverflow {
        /// The table that was used.
        table: String,
    },

    /// An unknown constraint name was provided.
    #[error("unknown constraint: {name}. Use: {available}")]
    UnknownConstraint {
        /// The constraint name that was requested.
        name: String,
        /// Comma-separated list of available constraints.
        available: String,
    },

    /// The constraint needs an argument that was not supplied.
    #[error("constraint {constraint} requires {argument}")]
    MissingArgument {
        /// The constraint being evaluated.
        constraint: &'static str,
        /// Human-readable name of the missing argument.
        argument: &'static str,
    },
}

/// Result type alias using [`ConstraintError`].
pub type ConstraintResult<T> = Result<T, ConstraintError>;

//! Anagram family: every check here compares letter multisets.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::single_letter;
use crate::error::{ConstraintError, ConstraintResult};
use crate::multiset::{self, LetterMultiset, Multiset, letter_counts};
use crate::normalize;
use crate::tables::letters::{
    ALPHABET, CONSONANTS, LANGUAGES, SCRABBLE_BAG_EN, SCRABBLE_BAG_FR, ULCERATIONS,
};

/// Language of a language-dependent letter bag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Language {
    /// French.
    #[default]
    Fr,
    /// English.
    En,
}

impl Language {
    /// Returns the language as a two-letter tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Scrabble tile counts for this language, blanks excluded.
    pub fn scrabble_bag(&self) -> &'static HashMap<char, usize> {
        match self {
            Self::Fr => &SCRABBLE_BAG_FR,
            Self::En => &SCRABBLE_BAG_EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            _ => Err(ConstraintError::UnknownLanguage {
                name: s.to_string(),
                available: LANGUAGES.join(", "),
            }),
        }
    }
}

/// Whether `a` and `b` use exactly the same letters.
#[tracing::instrument(skip_all, fields(a_len = a.len(), b_len = b.len()))]
pub fn check_anagram(a: &str, b: &str) -> bool {
    letter_counts(a) == letter_counts(b)
}

/// Whether every letter of `sub` can be taken from `reference`.
#[tracing::instrument(skip_all, fields(sub_len = sub.len(), reference_len = reference.len()))]
pub fn check_subanagram(sub: &str, reference: &str) -> bool {
    letter_counts(sub).is_submultiset_of(&letter_counts(reference))
}

/// Whether `text` uses every letter of the alphabet at least once.
pub fn check_pangram(text: &str) -> bool {
    check_subanagram(ALPHABET, text)
}

/// Whether `text` uses exactly the tiles of a Scrabble set of `language`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_panscrabblogram(text: &str, language: Language) -> bool {
    let bag: LetterMultiset =
        Multiset::from_counts(language.scrabble_bag().iter().map(|(&c, &n)| (c, n)));
    letter_counts(text) == bag
}

/// Heterogram: every run of `reference.len()` letters is an anagram of `reference`.
///
/// A short final run fails. Errors when `reference` has no letters.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_heterogram(text: &str, reference: &str) -> ConstraintResult<bool> {
    let expected = letter_counts(reference);
    if expected.is_empty() {
        return Err(ConstraintError::EmptyReference(reference.to_string()));
    }
    let chunks = multiset::chunk(text, expected.len())?;
    Ok(chunks.iter().all(|piece| letter_counts(piece) == expected))
}

/// Ulcerations: a heterogram on the eleven commonest French letters,
/// optionally with one extra letter.
pub fn check_ulcerations(text: &str, extra: Option<&str>) -> ConstraintResult<bool> {
    let mut reference = ULCERATIONS.to_string();
    if let Some(extra) = extra {
        reference.push(single_letter(extra)?);
    }
    check_heterogram(text, &reference)
}

/// Heteroconsonantism: every consonant of the alphabet exactly once.
pub fn check_heteroconsonantism(text: &str) -> bool {
    letter_counts(&normalize::to_consonants(text)) == letter_counts(CONSONANTS)
}

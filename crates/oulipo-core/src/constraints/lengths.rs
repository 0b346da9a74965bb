//! Length constraints on words and lines.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConstraintError;
use crate::normalize;

/// Allowed word lengths for an n-gram text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthSpec {
    /// Every word has the same length, whatever it is.
    #[default]
    Uniform,
    /// Every word has exactly this length.
    Exactly(usize),
    /// Every word has one of these lengths.
    AnyOf(BTreeSet<usize>),
}

impl FromStr for LengthSpec {
    type Err = ConstraintError;

    /// Parse `""` (uniform), `"7"` (exactly) or `"2,5,7"` (any of).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::Uniform);
        }
        let lengths = trimmed
            .split(',')
            .map(|part| part.trim().parse::<usize>())
            .collect::<Result<BTreeSet<usize>, _>>()
            .map_err(|_| ConstraintError::InvalidLength(s.to_string()))?;

        if trimmed.contains(',') {
            Ok(Self::AnyOf(lengths))
        } else {
            // A lone number parsed fine, so the set holds exactly one length.
            Ok(lengths
                .into_iter()
                .next()
                .map_or(Self::Uniform, Self::Exactly))
        }
    }
}

/// Whether every word length satisfies `spec`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_ngram(text: &str, spec: &LengthSpec) -> bool {
    let lengths = word_lengths(text);
    match spec {
        LengthSpec::Uniform => lengths.iter().collect::<BTreeSet<_>>().len() <= 1,
        LengthSpec::Exactly(n) => lengths.iter().all(|len| len == n),
        LengthSpec::AnyOf(allowed) => lengths.iter().all(|len| allowed.contains(len)),
    }
}

/// Whether every word has at least `min` letters.
pub fn check_mingram(text: &str, min: usize) -> bool {
    word_lengths(text).iter().all(|&len| len >= min)
}

/// Whether every word has at most `max` letters.
pub fn check_maxgram(text: &str, max: usize) -> bool {
    word_lengths(text).iter().all(|&len| len <= max)
}

/// Isosceles text: every non-blank line has the same number of characters.
///
/// Trailing whitespace is not counted.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_isosceles(text: &str) -> bool {
    let lengths: BTreeSet<usize> = normalize::tokenize_lines(text, false)
        .iter()
        .map(|line| line.trim_end().chars().count())
        .collect();
    lengths.len() <= 1
}

fn word_lengths(text: &str) -> Vec<usize> {
    normalize::tokenize_words(text, true)
        .iter()
        .map(|w| w.chars().count())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_of(lengths: &[usize]) -> LengthSpec {
        LengthSpec::AnyOf(lengths.iter().copied().collect())
    }

    #[test]
    fn parse_length_spec() {
        assert_eq!("".parse::<LengthSpec>().unwrap(), LengthSpec::Uniform);
        assert_eq!("7".parse::<LengthSpec>().unwrap(), LengthSpec::Exactly(7));
        assert_eq!("2, 5,7".parse::<LengthSpec>().unwrap(), any_of(&[2, 5, 7]));
        assert_eq!(
            "seven".parse::<LengthSpec>(),
            Err(ConstraintError::InvalidLength("seven".into()))
        );
        assert!("2,,5".parse::<LengthSpec>().is_err());
        assert!("-1".parse::<LengthSpec>().is_err());
    }

    #[test]
    fn ngrams() {
        assert!(check_ngram("", &LengthSpec::Exactly(7)));
        assert!(check_ngram("fenouil", &LengthSpec::Exactly(7)));
        assert!(check_ngram("Halte au fenouil !", &any_of(&[2, 5, 7])));
        assert!(check_ngram("Ab bc cd, de, fg.", &LengthSpec::Uniform));
        assert!(check_ngram("Ab bc cd, de, fg.", &LengthSpec::Exactly(2)));
        assert!(!check_ngram("Ab bc cd, de, fg.", &LengthSpec::Exactly(3)));
        assert!(!check_ngram("Ab bc cd, de, fgh.", &LengthSpec::Exactly(2)));
        assert!(!check_ngram("Halte au fenouil !", &any_of(&[5, 7])));
    }

    #[test]
    fn maxgrams() {
        assert!(check_maxgram("", 1));
        assert!(check_maxgram("fenouil", 8));
        assert!(check_maxgram("fenouil", 7));
        assert!(check_maxgram("Il y a un pb d'as.", 2));
        assert!(!check_maxgram("Il y a un pb d'as.", 1));
        assert!(!check_maxgram("fenouil", 6));
    }

    #[test]
    fn mingrams() {
        assert!(check_mingram("", 1));
        assert!(check_mingram("fenouil", 6));
        assert!(check_mingram("fenouil", 7));
        assert!(check_mingram("Quand trois gamins disent bonjour...", 5));
        assert!(!check_mingram("Quand trois gamins disent bonjour...", 6));
        assert!(!check_mingram("fenouil", 8));
    }

    #[test]
    fn isosceles() {
        assert!(check_isosceles(""));
        assert!(check_isosceles("abc\n\ndéf  \nghi"));
        assert!(!check_isosceles("abc\nde"));
    }
}

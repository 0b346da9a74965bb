//! Word-level counting constraints: ananyms and arithmonyms.

use std::collections::BTreeSet;

use crate::multiset::word_counts;
use crate::normalize;

/// Ananym: `a` and `b` hold the same words, in any order.
#[tracing::instrument(skip_all, fields(a_len = a.len(), b_len = b.len()))]
pub fn check_ananym(a: &str, b: &str) -> bool {
    word_counts(a, true) == word_counts(b, true)
}

/// Arithmonym: every non-blank line holds the same number of words.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_arithmonym(text: &str) -> bool {
    let counts: BTreeSet<usize> = normalize::tokenize_lines(text, false)
        .iter()
        .map(|line| normalize::tokenize_words(line, false).len())
        .collect();
    counts.len() <= 1
}

/// Arithmonym between two texts: both hold the same number of words.
pub fn check_arithmonym_pair(a: &str, b: &str) -> bool {
    normalize::tokenize_words(a, false).len() == normalize::tokenize_words(b, false).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ananyms() {
        assert!(check_ananym("", ""));
        assert!(check_ananym("Le chat mange la souris.", "La souris mange le chat !"));
        assert!(check_ananym("Été, été", "ete ETE"));
        assert!(!check_ananym("le chat", "le chien"));
        assert!(!check_ananym("le le chat", "le chat chat"));
    }

    #[test]
    fn arithmonyms() {
        assert!(check_arithmonym(""));
        assert!(check_arithmonym("Il pleut fort\n\nle vent souffle\nmais où donc ?"));
        assert!(!check_arithmonym("Il pleut\nle vent souffle"));
    }

    #[test]
    fn arithmonym_pairs() {
        assert!(check_arithmonym_pair("", ""));
        assert!(check_arithmonym_pair("un deux trois", "Le gros chat."));
        assert!(!check_arithmonym_pair("un deux", "Le gros chat."));
    }
}

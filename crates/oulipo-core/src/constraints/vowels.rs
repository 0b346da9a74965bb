//! Vowel constraints: monovocalism and okapi alternation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConstraintError, ConstraintResult};
use crate::normalize;
use crate::tables::letters::{is_consonant, is_vowel};

/// Which vowel a monovocalism must use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VowelChoice {
    /// Any single vowel.
    #[default]
    Any,
    /// This exact vowel.
    Exactly(String),
    /// Any single vowel from this set.
    OneOf(String),
}

impl VowelChoice {
    /// Canonical vowels this choice accepts, or `None` for any vowel.
    fn accepted(&self) -> ConstraintResult<Option<BTreeSet<char>>> {
        match self {
            Self::Any => Ok(None),
            Self::Exactly(vowel) => {
                let letters = normalize::to_letters(vowel);
                let mut chars = letters.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if is_vowel(c) => Ok(Some(BTreeSet::from([c]))),
                    (Some(_), None) => Err(ConstraintError::NotAVowel(vowel.clone())),
                    _ => Err(ConstraintError::NotASingleLetter(vowel.clone())),
                }
            }
            Self::OneOf(vowels) => {
                let set: BTreeSet<char> = normalize::to_letters(vowels).chars().collect();
                if set.is_empty() {
                    return Err(ConstraintError::EmptyReference(vowels.clone()));
                }
                match set.iter().find(|&&c| !is_vowel(c)) {
                    Some(c) => Err(ConstraintError::NotAVowel(c.to_string())),
                    None => Ok(Some(set)),
                }
            }
        }
    }
}

/// Whether `text` uses at most one distinct vowel, chosen by `choice`.
///
/// Returns an error when `choice` names something other than vowels.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_monovocalism(text: &str, choice: &VowelChoice) -> ConstraintResult<bool> {
    let accepted = choice.accepted()?;
    let used: BTreeSet<char> = normalize::to_vowels(text).chars().collect();

    let satisfied = match (used.len(), accepted) {
        (0, _) => true,
        (1, None) => true,
        (1, Some(accepted)) => used.is_subset(&accepted),
        _ => false,
    };
    Ok(satisfied)
}

/// Whether vowels and consonants strictly alternate.
///
/// A letter that is neither a vowel nor a consonant after normalization means
/// the normalizer let something through, and is reported as an error.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_okapi(text: &str) -> ConstraintResult<bool> {
    let classes = normalize::to_letters(text)
        .chars()
        .map(|c| {
            if is_vowel(c) {
                Ok(true)
            } else if is_consonant(c) {
                Ok(false)
            } else {
                Err(ConstraintError::UnclassifiedLetter(c))
            }
        })
        .collect::<ConstraintResult<Vec<bool>>>()?;

    Ok(classes.windows(2).all(|pair| pair[0] != pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CERBERE: &str = "Être et n'être, tel est le Cerbère.";

    #[test]
    fn monovocalism_any_vowel() {
        assert!(check_monovocalism("", &VowelChoice::Any).unwrap());
        assert!(check_monovocalism(CERBERE, &VowelChoice::Any).unwrap());
        assert!(!check_monovocalism("fenouil", &VowelChoice::Any).unwrap());
        assert!(!check_monovocalism("kayak", &VowelChoice::Any).unwrap());
    }

    #[test]
    fn monovocalism_required_vowel() {
        let e = VowelChoice::Exactly("e".into());
        let a = VowelChoice::Exactly("a".into());
        assert!(check_monovocalism(CERBERE, &e).unwrap());
        assert!(!check_monovocalism(CERBERE, &a).unwrap());
        assert!(check_monovocalism("", &a).unwrap());
        assert!(check_monovocalism(CERBERE, &VowelChoice::Exactly("É".into())).unwrap());
    }

    #[test]
    fn monovocalism_vowel_set() {
        let set = VowelChoice::OneOf("aei".into());
        assert!(check_monovocalism(CERBERE, &set).unwrap());
        assert!(!check_monovocalism("Du sucre", &VowelChoice::OneOf("ou".into())).unwrap());
        assert!(check_monovocalism("Tu fus", &VowelChoice::OneOf("ou".into())).unwrap());
    }

    #[test]
    fn monovocalism_rejects_non_vowels() {
        assert_eq!(
            check_monovocalism(CERBERE, &VowelChoice::Exactly("b".into())),
            Err(ConstraintError::NotAVowel("b".into()))
        );
        assert_eq!(
            check_monovocalism(CERBERE, &VowelChoice::Exactly("ae".into())),
            Err(ConstraintError::NotASingleLetter("ae".into()))
        );
        assert_eq!(
            check_monovocalism(CERBERE, &VowelChoice::OneOf("aeb".into())),
            Err(ConstraintError::NotAVowel("B".into()))
        );
        assert!(check_monovocalism(CERBERE, &VowelChoice::OneOf("!".into())).is_err());
    }

    #[test]
    fn okapi() {
        assert!(check_okapi("").unwrap());
        assert!(check_okapi("E").unwrap());
        assert!(check_okapi("okapi").unwrap());
        assert!(check_okapi("Je me dis à mi-mot...").unwrap());
        assert!(!check_okapi("fenouil").unwrap());
        assert!(!check_okapi("Patatra !").unwrap());
    }

    #[test]
    fn okapi_fails_loudly_on_unknown_letters() {
        assert_eq!(check_okapi("aλa"), Err(ConstraintError::UnclassifiedLetter('Λ')));
    }
}

//! Letter exclusion: lipograms and their relatives.

use std::collections::HashSet;

use crate::error::{ConstraintError, ConstraintResult};
use crate::normalize;
use crate::tables::letters::LABIAL_LETTERS;

/// Whether `text` avoids every letter of `forbidden`.
///
/// Both sides are normalized, so `"e"` also forbids `É`, `ê` and `E`.
///
/// # Errors
///
/// Returns [`ConstraintError::EmptyReference`] when `forbidden` has no letters.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_lipogram(text: &str, forbidden: &str) -> ConstraintResult<bool> {
    Ok(avoids(text, &letter_set(forbidden)?))
}

/// Lip-reading lipogram: no B, F, M, P or V.
///
/// This is a letter-level approximation; silent letters still count.
pub fn check_turkish(text: &str) -> bool {
    avoids(text, &LABIAL_LETTERS.chars().collect())
}

/// Whether `text` only uses letters found in `reference` (usually a name).
///
/// # Errors
///
/// Returns [`ConstraintError::EmptyReference`] when `reference` has no letters.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_beau_present(text: &str, reference: &str) -> ConstraintResult<bool> {
    let allowed = letter_set(reference)?;
    Ok(normalize::to_letters(text)
        .chars()
        .all(|c| allowed.contains(&c)))
}

fn avoids(text: &str, forbidden: &HashSet<char>) -> bool {
    normalize::to_letters(text)
        .chars()
        .all(|c| !forbidden.contains(&c))
}

fn letter_set(reference: &str) -> ConstraintResult<HashSet<char>> {
    let letters: HashSet<char> = normalize::to_letters(reference).chars().collect();
    if letters.is_empty() {
        return Err(ConstraintError::EmptyReference(reference.to_string()));
    }
    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lipograms() {
        assert_eq!(check_lipogram("", "e"), Ok(true));
        assert_eq!(check_lipogram("kayak", "e"), Ok(true));
        assert_eq!(check_lipogram("Parfois, j'ai froid.", "e"), Ok(true));
        assert_eq!(check_lipogram("fenouil", "e"), Ok(false));
        assert_eq!(check_lipogram("E", "e"), Ok(false));
        assert_eq!(check_lipogram("ê", "e"), Ok(false));
    }

    #[test]
    fn lipogram_with_several_letters() {
        assert_eq!(check_lipogram("Un chat", "eio"), Ok(true));
        assert_eq!(check_lipogram("Un chien", "eio"), Ok(false));
    }

    #[test]
    fn reference_without_letters_is_an_error() {
        for reference in ["", " ", "!?", "42"] {
            let expected = Err(ConstraintError::EmptyReference(reference.to_string()));
            assert_eq!(check_lipogram("anything", reference), expected);
            assert_eq!(check_beau_present("", reference), expected);
        }
    }

    #[test]
    fn turkish() {
        assert!(check_turkish(""));
        assert!(check_turkish("kayak"));
        assert!(check_turkish("Il était une noix..."));
        assert!(!check_turkish("fenouil"));
        assert!(!check_turkish("Il était une fois..."));
        assert!(!check_turkish("Il était un pois..."));
        assert!(!check_turkish("Il était un mois..."));
        assert!(!check_turkish("Il était un bois..."));
        assert!(!check_turkish("Il était une voix..."));
    }

    #[test]
    fn beau_present() {
        let name = "Gilles Esposito-Farèse";
        assert_eq!(check_beau_present("", name), Ok(true));
        assert_eq!(check_beau_present("Le positif était effaré.", name), Ok(true));
        assert_eq!(check_beau_present("fenouil", name), Ok(false));
    }
}

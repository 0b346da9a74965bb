//! Belle absente: each line leaves out one letter, and the missing letters
//! spell a hidden word.

use std::collections::BTreeSet;

use crate::normalize;
use crate::tables::letters::{ALPHABET, RARE_LETTERS};

/// Whether each line misses exactly one letter of the alphabet.
///
/// Rare letters (K, W, X, Y, Z) are never counted as missing. With a
/// `reference`, line `i` must miss letter `i` of the reference and there must
/// be as many lines as reference letters.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_belle_absente(text: &str, reference: Option<&str>) -> bool {
    let lines = normalize::tokenize_lines(text, true);
    let missing: Vec<Option<char>> = lines.iter().map(|line| missing_letter(line)).collect();

    if missing.iter().any(Option::is_none) {
        return false;
    }

    match reference {
        None => true,
        Some(reference) => {
            let expected: Vec<char> = normalize::to_letters(reference).chars().collect();
            expected.len() == missing.len()
                && missing
                    .iter()
                    .zip(&expected)
                    .all(|(got, want)| *got == Some(*want))
        }
    }
}

/// The single meaningful letter absent from `line`, if exactly one is.
fn missing_letter(line: &str) -> Option<char> {
    let used: BTreeSet<char> = line.chars().collect();
    let mut absent = ALPHABET
        .chars()
        .filter(|c| !RARE_LETTERS.contains(*c) && !used.contains(c));

    match (absent.next(), absent.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}

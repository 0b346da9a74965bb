//! Mirror symmetry: palindromes and anti-palindromes.

use crate::normalize;

/// Whether the letters of `text` read the same in both directions.
///
/// Case, accents, punctuation and spacing are ignored.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn is_palindrome(text: &str) -> bool {
    mirrored_pairs(text).all(|(front, back)| front == back)
}

/// Whether every mirrored pair of letters differs.
///
/// The middle letter of an odd-length text has no partner and is not checked.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn is_antipalindrome(text: &str) -> bool {
    mirrored_pairs(text).all(|(front, back)| front != back)
}

/// Pairs `(letters[i], letters[len - 1 - i])` over the first half of the letters.
fn mirrored_pairs(text: &str) -> impl Iterator<Item = (char, char)> {
    let letters: Vec<char> = normalize::to_letters(text).chars().collect();
    let half = letters.len() / 2;
    let pairs: Vec<(char, char)> = (0..half)
        .map(|i| (letters[i], letters[letters.len() - 1 - i]))
        .collect();
    pairs.into_iter()
}

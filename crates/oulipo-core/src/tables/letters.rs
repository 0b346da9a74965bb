//! Letter classes and reference letter sets.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The 26-letter Latin alphabet in canonical form.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Vowels. `Y` counts as a vowel, as in French.
pub const VOWELS: &str = "AEIOUY";

/// Consonants: every letter of [`ALPHABET`] that is not in [`VOWELS`].
pub const CONSONANTS: &str = "BCDFGHJKLMNPQRSTVWXZ";

/// Letters whose absence a belle absente does not count.
pub const RARE_LETTERS: &str = "KWXYZ";

/// Bilabial and labiodental letters a lip reader would spot.
pub const LABIAL_LETTERS: &str = "BFMPV";

/// The eleven most frequent letters of French.
pub const ULCERATIONS: &str = "ULCERATIONS";

/// Whether `c` is a canonical vowel.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Whether `c` is a canonical consonant.
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

/// Lowercase letters that fit within the x-height.
pub const PRISONER_SAFE: &str = "acemnorsuvwxz";

/// Marks that sit close enough to the x-height to pass when accents are allowed.
pub const PRISONER_SMALL_MARKS: &str = "i,'àâäéèêëîïôöùûü";

/// Non-letter characters that never leave the x-height.
pub const PRISONER_NEUTRAL: &str = ".:-";

/// Lowercase consonants drawn with an ascender or a descender.
pub const TALL_OR_LOW_CONSONANTS: &str = "bdfhkltgjpqç";

/// Supported languages for language-dependent letter bags.
pub const LANGUAGES: &[&str] = &["fr", "en"];

/// Tile counts of the French Scrabble set, blanks excluded (100 tiles).
#[rustfmt::skip]
pub static SCRABBLE_BAG_FR: LazyLock<HashMap<char, usize>> = LazyLock::new(|| {
    HashMap::from([
        ('A', 9), ('B', 2), ('C', 2), ('D', 3), ('E', 15), ('F', 2), ('G', 2),
        ('H', 2), ('I', 8), ('J', 1), ('K', 1), ('L', 5), ('M', 3), ('N', 6),
        ('O', 6), ('P', 2), ('Q', 1), ('R', 6), ('S', 6), ('T', 6), ('U', 6),
        ('V', 2), ('W', 1), ('X', 1), ('Y', 1), ('Z', 1),
    ])
});

/// Tile counts of the English Scrabble set, blanks excluded (98 tiles).
#[rustfmt::skip]
pub static SCRABBLE_BAG_EN: LazyLock<HashMap<char, usize>> = LazyLock::new(|| {
    HashMap::from([
        ('A', 9), ('B', 2), ('C', 2), ('D', 4), ('E', 12), ('F', 2), ('G', 3),
        ('H', 2), ('I', 9), ('J', 1), ('K', 1), ('L', 4), ('M', 2), ('N', 6),
        ('O', 8), ('P', 2), ('Q', 1), ('R', 6), ('S', 4), ('T', 6), ('U', 4),
        ('V', 2), ('W', 2), ('X', 1), ('Y', 2), ('Z', 1),
    ])
});

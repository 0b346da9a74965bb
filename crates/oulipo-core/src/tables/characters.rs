//! Accent, ligature and punctuation tables for the normalizer.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Accented letters and the Latin letter they fold to.
///
/// Covers grave, acute, circumflex, diaeresis, tilde and cedilla on
/// a/e/i/o/u/y/c/n, in both cases.
#[rustfmt::skip]
const ACCENT_PAIRS: &[(char, char)] = &[
    ('à', 'a'), ('á', 'a'), ('â', 'a'), ('ã', 'a'), ('ä', 'a'),
    ('À', 'A'), ('Á', 'A'), ('Â', 'A'), ('Ã', 'A'), ('Ä', 'A'),
    ('è', 'e'), ('é', 'e'), ('ê', 'e'), ('ë', 'e'),
    ('È', 'E'), ('É', 'E'), ('Ê', 'E'), ('Ë', 'E'),
    ('ì', 'i'), ('í', 'i'), ('î', 'i'), ('ï', 'i'),
    ('Ì', 'I'), ('Í', 'I'), ('Î', 'I'), ('Ï', 'I'),
    ('ò', 'o'), ('ó', 'o'), ('ô', 'o'), ('õ', 'o'), ('ö', 'o'),
    ('Ò', 'O'), ('Ó', 'O'), ('Ô', 'O'), ('Õ', 'O'), ('Ö', 'O'),
    ('ù', 'u'), ('ú', 'u'), ('û', 'u'), ('ü', 'u'),
    ('Ù', 'U'), ('Ú', 'U'), ('Û', 'U'), ('Ü', 'U'),
    ('ý', 'y'), ('ÿ', 'y'),
    ('Ý', 'Y'), ('Ÿ', 'Y'),
    ('ç', 'c'), ('Ç', 'C'),
    ('ñ', 'n'), ('Ñ', 'N'),
];

/// Accent folding map built from [`ACCENT_PAIRS`].
pub static ACCENTS: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| ACCENT_PAIRS.iter().copied().collect());

/// Ligatures and their two-letter expansion.
pub const LIGATURES: &[(char, &str)] = &[('æ', "ae"), ('œ', "oe"), ('Æ', "AE"), ('Œ', "OE")];

/// Punctuation characters, ASCII and French typographic.
pub static PUNCTUATION: LazyLock<HashSet<char>> = LazyLock::new(|| {
    let mut set: HashSet<char> = ('\u{21}'..='\u{7e}')
        .filter(char::is_ascii_punctuation)
        .collect();

    // Quotes and apostrophes
    set.extend(['«', '»', '‹', '›', '“', '”', '„', '‘', '’', '‚', '`', '´']);

    // Dashes, ellipsis and other marks
    set.extend([
        '‐', '‑', '‒', '–', '—', '―', '…', '·', '•', '¡', '¿', '§', '¶', '°',
    ]);

    set
});

/// Whether `c` belongs to the punctuation table.
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Whether `c` is a known ligature.
pub fn is_ligature(c: char) -> bool {
    LIGATURES.iter().any(|(lig, _)| *lig == c)
}

/// Whether `c` falls in any class the normalizer knows how to handle.
///
/// Anything else is reported as an unknown character and passed through.
pub fn is_known(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || is_punctuation(c)
        || is_ligature(c)
        || ACCENTS.contains_key(&c)
}

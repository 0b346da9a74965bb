//! Letter value tables for gematria.
//!
//! Rank-based tables are generated from an alphabet and a scoring rule; the
//! others are spelled out letter by letter.

use std::collections::HashMap;

use super::letters::ALPHABET;

/// The classical 23-letter Latin alphabet (no J, U or W).
pub const LATIN_ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTVXYZ";

/// Modern letters scored as their classical counterpart in Latin tables.
///
/// W has no classical counterpart and stays outside the Latin tables.
pub const LATIN_ALIASES: &[(char, char)] = &[('J', 'I'), ('U', 'V')];

/// Score each letter of `alphabet` from its 1-based rank.
pub fn ranked(alphabet: &str, score: impl Fn(i64) -> i64) -> HashMap<char, i64> {
    alphabet
        .chars()
        .zip(1..)
        .map(|(letter, rank)| (letter, score(rank)))
        .collect()
}

/// Units, then tens, then hundreds: 1..9, 10..90, 100...
pub const fn classic_value(rank: i64) -> i64 {
    match rank {
        1..=9 => rank,
        10..=18 => (rank - 9) * 10,
        _ => (rank - 18) * 100,
    }
}

/// Latin-rank style table: ranks over the 23 classical letters, J and U aliased.
pub fn latin(score: impl Fn(i64) -> i64) -> HashMap<char, i64> {
    let mut table = ranked(LATIN_ALPHABET, score);
    for (modern, classical) in LATIN_ALIASES {
        if let Some(&value) = table.get(classical) {
            table.insert(*modern, value);
        }
    }
    table
}

/// French-rank style table over the full 26-letter alphabet.
pub fn french(score: impl Fn(i64) -> i64) -> HashMap<char, i64> {
    ranked(ALPHABET, score)
}

/// Cheiro's (Chaldean) numerology values.
#[rustfmt::skip]
pub const CHEIRO: &[(char, i64)] = &[
    ('A', 1), ('B', 2), ('C', 3), ('D', 4), ('E', 5), ('F', 8), ('G', 3),
    ('H', 5), ('I', 1), ('J', 1), ('K', 2), ('L', 3), ('M', 4), ('N', 5),
    ('O', 7), ('P', 8), ('Q', 1), ('R', 2), ('S', 3), ('T', 4), ('U', 6),
    ('V', 6), ('W', 6), ('X', 5), ('Y', 1), ('Z', 7),
];

/// Roman numeral letters; J and U read as I and V, every other letter is 0.
#[rustfmt::skip]
pub const ROMAN_NUMERALS: &[(char, i64)] = &[
    ('I', 1), ('J', 1), ('V', 5), ('U', 5), ('X', 10),
    ('L', 50), ('C', 100), ('D', 500), ('M', 1000),
];

/// French Scrabble tile values.
#[rustfmt::skip]
pub const SCRABBLE_FR: &[(char, i64)] = &[
    ('A', 1), ('B', 3), ('C', 3), ('D', 2), ('E', 1), ('F', 4), ('G', 2),
    ('H', 4), ('I', 1), ('J', 8), ('K', 10), ('L', 1), ('M', 2), ('N', 1),
    ('O', 1), ('P', 3), ('Q', 8), ('R', 1), ('S', 1), ('T', 1), ('U', 1),
    ('V', 4), ('W', 10), ('X', 10), ('Y', 10), ('Z', 10),
];

/// English Scrabble tile values.
#[rustfmt::skip]
pub const SCRABBLE_EN: &[(char, i64)] = &[
    ('A', 1), ('B', 3), ('C', 3), ('D', 2), ('E', 1), ('F', 4), ('G', 2),
    ('H', 4), ('I', 1), ('J', 8), ('K', 5), ('L', 1), ('M', 3), ('N', 1),
    ('O', 1), ('P', 3), ('Q', 10), ('R', 1), ('S', 1), ('T', 1), ('U', 1),
    ('V', 4), ('W', 4), ('X', 8), ('Y', 4), ('Z', 10),
];

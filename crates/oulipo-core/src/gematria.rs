//! Gematria: scoring text by summing per-letter values.
//!
//! Tables are looked up by [`TableName`] from a process-wide registry built on
//! first use, or supplied by the caller with [`GematriaTable::custom`] and
//! [`GematriaTable::from_json`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{ConstraintError, ConstraintResult};
use crate::normalize;
use crate::tables::gematria::{
    CHEIRO, ROMAN_NUMERALS, SCRABBLE_EN, SCRABBLE_FR, classic_value, french, latin,
};
use crate::tables::letters::ALPHABET;

/// Names of the built-in gematria tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableName {
    /// Rank in the classical Latin alphabet.
    LatinRank,
    /// Units, tens and hundreds over the Latin alphabet.
    LatinClassic,
    /// Squared Latin rank.
    LatinSquare,
    /// Rank in the 26-letter alphabet.
    FrenchRank,
    /// Units, tens and hundreds over the 26-letter alphabet.
    FrenchClassic,
    /// Rank reduced to 1..=9.
    JacobAbrahamSoubira,
    /// Cheiro's numerology.
    CheiroCode,
    /// Roman numeral value, 0 for other letters.
    RomanNumeral,
    /// French Scrabble tiles.
    ScrabbleFr,
    /// English Scrabble tiles.
    ScrabbleEn,
    /// One per letter.
    NLetters,
}

impl TableName {
    /// All built-in tables.
    pub const ALL: &'static [Self] = &[
        Self::LatinRank,
        Self::LatinClassic,
        Self::LatinSquare,
        Self::FrenchRank,
        Self::FrenchClassic,
        Self::JacobAbrahamSoubira,
        Self::CheiroCode,
        Self::RomanNumeral,
        Self::ScrabbleFr,
        Self::ScrabbleEn,
        Self::NLetters,
    ];

    /// Returns the table name in snake_case.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LatinRank => "latin_rank",
            Self::LatinClassic => "latin_classic",
            Self::LatinSquare => "latin_square",
            Self::FrenchRank => "french_rank",
            Self::FrenchClassic => "french_classic",
            Self::JacobAbrahamSoubira => "jacob_abraham_soubira",
            Self::CheiroCode => "cheiro_code",
            Self::RomanNumeral => "roman_numeral",
            Self::ScrabbleFr => "scrabble_fr",
            Self::ScrabbleEn => "scrabble_en",
            Self::NLetters => "n_letters",
        }
    }

    fn build(self) -> HashMap<char, i64> {
        match self {
            Self::LatinRank => latin(|rank| rank),
            Self::LatinClassic => latin(classic_value),
            Self::LatinSquare => latin(|rank| rank * rank),
            Self::FrenchRank => french(|rank| rank),
            Self::FrenchClassic => french(classic_value),
            Self::JacobAbrahamSoubira => french(|rank| (rank - 1) % 9 + 1),
            Self::CheiroCode => CHEIRO.iter().copied().collect(),
            Self::RomanNumeral => {
                let mut table: HashMap<char, i64> = ALPHABET.chars().map(|c| (c, 0)).collect();
                table.extend(ROMAN_NUMERALS.iter().copied());
                table
            }
            Self::ScrabbleFr => SCRABBLE_FR.iter().copied().collect(),
            Self::ScrabbleEn => SCRABBLE_EN.iter().copied().collect(),
            Self::NLetters => ALPHABET.chars().map(|c| (c, 1)).collect(),
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableName {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ConstraintError::UnknownTable {
                name: s.to_string(),
                available: Self::ALL
                    .iter()
                    .map(Self::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

static REGISTRY: LazyLock<HashMap<TableName, GematriaTable>> = LazyLock::new(|| {
    TableName::ALL
        .iter()
        .map(|&name| {
            let table = GematriaTable {
                name: name.as_str().to_string(),
                values: name.build(),
            };
            (name, table)
        })
        .collect()
});

/// An immutable mapping from uppercase letters to integer weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GematriaTable {
    name: String,
    values: HashMap<char, i64>,
}

impl GematriaTable {
    /// One of the built-in tables.
    pub fn named(name: TableName) -> &'static Self {
        &REGISTRY[&name]
    }

    /// A caller-supplied table. Letters are folded to their canonical form.
    pub fn custom(name: impl Into<String>, mapping: impl IntoIterator<Item = (char, i64)>) -> Self {
        let values = mapping
            .into_iter()
            .flat_map(|(letter, value)| {
                normalize::to_letters(&letter.to_string())
                    .chars()
                    .map(move |c| (c, value))
                    .collect::<Vec<_>>()
            })
            .collect();
        Self {
            name: name.into(),
            values,
        }
    }

    /// Parse a table from a JSON object of single letters to integers,
    /// e.g. `{"a": 1, "b": 2}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidTable`] when the JSON is malformed or
    /// a key is not exactly one letter.
    pub fn from_json(name: impl Into<String>, json: &str) -> ConstraintResult<Self> {
        let raw: BTreeMap<String, i64> =
            serde_json::from_str(json).map_err(|e| ConstraintError::InvalidTable(e.to_string()))?;

        let mut mapping = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let letters = normalize::to_letters(&key);
            let mut chars = letters.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => mapping.push((letter, value)),
                _ => {
                    return Err(ConstraintError::InvalidTable(format!(
                        "key {key:?} is not a single letter"
                    )));
                }
            }
        }
        Ok(Self::custom(name, mapping))
    }

    /// The table's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of letters with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no letter has a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of `letter`, after folding it to its canonical form.
    ///
    /// A ligature scores as the sum of its letters.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::LetterOutsideTable`] when the letter, or
    /// one of the letters it folds to, has no value, and
    /// [`ConstraintError::ScoreOverflow`] when a ligature's sum overflows.
    pub fn letter_value(&self, letter: char) -> ConstraintResult<i64> {
        let folded = normalize::to_letters(&letter.to_string());
        if folded.is_empty() {
            return Err(self.outside(letter));
        }
        self.checked_sum(
            folded
                .chars()
                .map(|c| self.values.get(&c).copied().ok_or_else(|| self.outside(c))),
        )
    }

    fn checked_sum(
        &self,
        values: impl IntoIterator<Item = ConstraintResult<i64>>,
    ) -> ConstraintResult<i64> {
        values.into_iter().try_fold(0_i64, |acc, value| {
            acc.checked_add(value?)
                .ok_or_else(|| ConstraintError::ScoreOverflow {
                    table: self.name.clone(),
                })
        })
    }

    fn outside(&self, letter: char) -> ConstraintError {
        ConstraintError::LetterOutsideTable {
            letter,
            table: self.name.clone(),
        }
    }
}

/// Sum of the letter values of `word`, ignoring non-letters.
///
/// # Errors
///
/// Returns [`ConstraintError::LetterOutsideTable`] for a letter the table
/// does not score and [`ConstraintError::ScoreOverflow`] when the sum does
/// not fit in an `i64`.
pub fn gematria_of_word(word: &str, table: &GematriaTable) -> ConstraintResult<i64> {
    table.checked_sum(normalize::to_letters(word).chars().map(|c| table.letter_value(c)))
}

/// Score of each word of `text`, in order.
///
/// # Errors
///
/// See [`gematria_of_word`].
#[tracing::instrument(skip(text, table), fields(text_len = text.len(), table = table.name()))]
pub fn gematria_per_word(text: &str, table: &GematriaTable) -> ConstraintResult<Vec<i64>> {
    normalize::tokenize_words(text, true)
        .iter()
        .map(|word| gematria_of_word(word, table))
        .collect()
}

/// Score of each non-blank line of `text`, in order.
///
/// # Errors
///
/// See [`gematria_of_word`].
#[tracing::instrument(skip(text, table), fields(text_len = text.len(), table = table.name()))]
pub fn gematria_per_line(text: &str, table: &GematriaTable) -> ConstraintResult<Vec<i64>> {
    normalize::tokenize_lines(text, true)
        .iter()
        .map(|line| gematria_total(line, table))
        .collect()
}

/// Sum of the word scores of `text`.
///
/// # Errors
///
/// See [`gematria_of_word`].
pub fn gematria_total(text: &str, table: &GematriaTable) -> ConstraintResult<i64> {
    let scores = gematria_per_word(text, table)?;
    table.checked_sum(scores.into_iter().map(Ok))
}

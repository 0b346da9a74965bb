//! Order-independent letter and word counts.
//!
//! A [`Multiset`] maps each element to its number of occurrences. Zero counts
//! are never stored, so the derived `PartialEq` is multiset equality.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::{ConstraintError, ConstraintResult};
use crate::normalize;

/// A counted collection of elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Multiset<T: Ord>(BTreeMap<T, usize>);

/// Letter frequencies of a text.
pub type LetterMultiset = Multiset<char>;

/// Word frequencies of a text.
pub type WordMultiset = Multiset<String>;

impl<T: Ord> Multiset<T> {
    /// An empty multiset.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build a multiset from `(item, count)` pairs; zero counts are skipped.
    pub fn from_counts<I: IntoIterator<Item = (T, usize)>>(counts: I) -> Self {
        let mut set = Self::new();
        for (item, count) in counts {
            if count > 0 {
                *set.0.entry(item).or_insert(0) += count;
            }
        }
        set
    }

    /// Add one occurrence of `item`.
    pub fn insert(&mut self, item: T) {
        *self.0.entry(item).or_insert(0) += 1;
    }

    /// Number of occurrences of `item` (0 when absent).
    pub fn count(&self, item: &T) -> usize {
        self.0.get(item).copied().unwrap_or(0)
    }

    /// Total number of occurrences.
    pub fn len(&self) -> usize {
        self.0.values().sum()
    }

    /// Whether the multiset holds no element.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct elements.
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// Whether every element of `self` occurs at least as often in `reference`.
    pub fn is_submultiset_of(&self, reference: &Self) -> bool {
        self.0
            .iter()
            .all(|(item, &count)| count <= reference.count(item))
    }

    /// Elements and their counts, in ascending element order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.0.iter().map(|(item, &count)| (item, count))
    }
}

impl<T: Ord> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

/// Letter frequencies of `to_letters(s)`.
pub fn letter_counts(s: &str) -> LetterMultiset {
    normalize::to_letters(s).chars().collect()
}

/// Word frequencies of `s`, optionally on canonical letter forms.
pub fn word_counts(s: &str, letters_only: bool) -> WordMultiset {
    normalize::tokenize_words(s, letters_only).into_iter().collect()
}

/// Slice `to_letters(s)` into consecutive chunks of `n` letters.
///
/// The last chunk is shorter when the letter count is not a multiple of `n`.
pub fn chunk(s: &str, n: usize) -> ConstraintResult<Vec<String>> {
    if n == 0 {
        return Err(ConstraintError::ZeroChunkSize);
    }
    let letters: Vec<char> = normalize::to_letters(s).chars().collect();
    Ok(letters
        .chunks(n)
        .map(|piece| piece.iter().collect())
        .collect())
}

/// Number of distinct letters of `a` that also occur somewhere in `b`.
pub fn count_common_letters(a: &str, b: &str) -> usize {
    let ours: BTreeSet<char> = normalize::to_letters(a).chars().collect();
    let theirs: BTreeSet<char> = normalize::to_letters(b).chars().collect();
    ours.intersection(&theirs).count()
}

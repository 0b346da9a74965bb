//! Text normalization.
//!
//! Turns raw text into the canonical forms the constraint checks work on:
//! a bare run of uppercase letters, a list of words, or a list of lines.
//!
//! The canonical pipeline is: uppercase, expand ligatures, fold accents, then
//! strip everything that is not a letter. Characters the tables do not know
//! about are reported with a `warn` diagnostic and passed through unchanged.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use crate::tables::characters::{self, ACCENTS, LIGATURES};
use crate::tables::letters::{is_consonant, is_vowel};

/// Regex for runs of whitespace (Unicode-aware, so no-break spaces count).
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Replace every punctuation character with `replacement`.
pub fn remove_punctuation(s: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if characters::is_punctuation(c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}

/// Remove punctuation, digits and whitespace.
///
/// Punctuation and digits first become spaces so word boundaries survive,
/// then every whitespace run is replaced with `replacement`.
pub fn remove_non_word(s: &str, replacement: &str) -> String {
    let spaced: String = s
        .chars()
        .map(|c| if is_separator(c) { ' ' } else { c })
        .collect();
    WHITESPACE_RUN
        .replace_all(&spaced, NoExpand(replacement))
        .into_owned()
}

/// Fold accented letters to their base letter, keeping case.
///
/// Unknown characters are reported once per call and left as they are.
pub fn remove_accents(s: &str) -> String {
    let mut unknown = BTreeSet::new();
    let folded = s
        .chars()
        .map(|c| match ACCENTS.get(&c) {
            Some(&base) => base,
            None => {
                if !characters::is_known(c) {
                    unknown.insert(c);
                }
                c
            }
        })
        .collect();

    for c in unknown {
        tracing::warn!(
            character = %c,
            codepoint = %format!("U+{:04X}", u32::from(c)),
            "unknown character"
        );
    }
    folded
}

/// Expand `æ`, `œ`, `Æ` and `Œ` into two letters.
pub fn expand_ligatures(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match LIGATURES.iter().find(|(lig, _)| *lig == c) {
            Some((_, expansion)) => out.push_str(expansion),
            None => out.push(c),
        }
    }
    out
}

/// Canonical letters of `s`: uppercase, no ligature, no accent, nothing but letters.
///
/// ```
/// use oulipo_core::normalize::to_letters;
///
/// assert_eq!(to_letters("Cœur d'Ève !"), "COEURDEVE");
/// ```
pub fn to_letters(s: &str) -> String {
    remove_non_word(&fold(s), "")
}

/// Vowels of `to_letters(s)`, in order.
pub fn to_vowels(s: &str) -> String {
    to_letters(s).chars().filter(|&c| is_vowel(c)).collect()
}

/// Consonants of `to_letters(s)`, in order.
pub fn to_consonants(s: &str) -> String {
    to_letters(s).chars().filter(|&c| is_consonant(c)).collect()
}

/// Split `s` into words.
///
/// Punctuation separates words, so `"peut-être"` gives two words. With
/// `letters_only`, each word is in canonical letter form.
#[tracing::instrument(level = "trace", skip(s), fields(text_len = s.len()))]
pub fn tokenize_words(s: &str, letters_only: bool) -> Vec<String> {
    let source = if letters_only { fold(s) } else { s.to_string() };
    remove_non_word(&source, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Split `s` into its non-blank lines.
///
/// With `letters_only`, each line is in canonical letter form and lines
/// holding no letter at all are dropped.
#[tracing::instrument(level = "trace", skip(s), fields(text_len = s.len()))]
pub fn tokenize_lines(s: &str, letters_only: bool) -> Vec<String> {
    if letters_only {
        fold(s)
            .lines()
            .map(|line| remove_non_word(line, ""))
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        s.lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Uppercase, expand ligatures and fold accents, leaving separators in place.
fn fold(s: &str) -> String {
    remove_accents(&expand_ligatures(&s.to_uppercase()))
}

fn is_separator(c: char) -> bool {
    characters::is_punctuation(c) || c.is_ascii_digit()
}

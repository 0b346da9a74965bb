//! Typographic constraints on the raw characters.
//!
//! Unlike the other families, these look at the text before normalization:
//! case, accents and punctuation all matter.

use crate::tables::characters::ACCENTS;
use crate::tables::letters::{
    PRISONER_NEUTRAL, PRISONER_SAFE, PRISONER_SMALL_MARKS, TALL_OR_LOW_CONSONANTS, is_consonant,
};

/// Prisoner's constraint: no character may rise above or drop below the x-height.
///
/// With `allow_accent`, small marks (accents on safe vowels, the dot of `i`,
/// commas and apostrophes) are tolerated.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_prisoner(text: &str, allow_accent: bool) -> bool {
    text.chars().all(|c| {
        c.is_whitespace()
            || PRISONER_SAFE.contains(c)
            || PRISONER_NEUTRAL.contains(c)
            || (allow_accent && PRISONER_SMALL_MARKS.contains(c))
    })
}

/// Released prisoner: every consonant must have an ascender or a descender.
///
/// Capitals are tall by nature; vowels and non-letters are unconstrained.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_released_prisoner(text: &str) -> bool {
    text.chars().all(|c| {
        if !c.is_lowercase() || TALL_OR_LOW_CONSONANTS.contains(c) {
            return true;
        }
        let base = ACCENTS.get(&c).copied().unwrap_or(c);
        !base
            .to_uppercase()
            .next()
            .is_some_and(is_consonant)
    })
}

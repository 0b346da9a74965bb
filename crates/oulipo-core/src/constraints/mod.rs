//! Constraint checks.
//!
//! Each family lives in its own module as a set of pure functions taking the
//! raw text. Callers can invoke them directly, or go through [`evaluate`]
//! with a [`Constraint`] name and a [`ConstraintParams`] bag of arguments.

pub mod anagrams;
pub mod belle_absente;
pub mod chains;
pub mod counts;
pub mod exclusion;
pub mod initials;
pub mod lengths;
pub mod long_form;
pub mod mirror;
pub mod typography;
pub mod vowels;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use anagrams::Language;
pub use initials::{AcrosticOptions, Unit};
pub use lengths::LengthSpec;
pub use vowels::VowelChoice;

use crate::error::{ConstraintError, ConstraintResult};
use crate::normalize;

/// Every constraint the library can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Constraint {
    /// Letters read the same both ways.
    Palindrome,
    /// Every mirrored pair of letters differs.
    AntiPalindrome,
    /// No letter from the reference.
    Lipogram,
    /// No B, F, M, P or V.
    Turkish,
    /// Only letters from the reference.
    BeauPresent,
    /// A single vowel throughout.
    Monovocalism,
    /// Vowels and consonants alternate.
    Okapi,
    /// No ascender or descender.
    Prisoner,
    /// Every consonant has an ascender or descender.
    ReleasedPrisoner,
    /// Every word starts with the same letter.
    Tautogram,
    /// Initials spell the reference.
    Acrostic,
    /// 26 words from A to Z.
    Abecedaire,
    /// 26 lines from A to Z.
    UniversalAcrostic,
    /// Word initials cycle through the reference.
    ProgressiveTautogram,
    /// Each word starts with the last letter of the previous one.
    Kyrielle,
    /// Consecutive words share letters.
    Sympathetic,
    /// Consecutive words share no letter.
    Snob,
    /// Word lengths follow a length specifier.
    Ngram,
    /// Words have a minimum length.
    Mingram,
    /// Words have a maximum length.
    Maxgram,
    /// Lines have the same length.
    Isosceles,
    /// Same letters as the reference.
    Anagram,
    /// Letters can all be taken from the reference.
    Subanagram,
    /// Every letter of the alphabet.
    Pangram,
    /// Exactly the tiles of a Scrabble set.
    Panscrabblogram,
    /// Every run of letters is an anagram of the reference.
    Heterogram,
    /// Heterogram on ULCERATIONS.
    Ulcerations,
    /// Every consonant exactly once.
    Heteroconsonantism,
    /// Same words as the reference.
    Ananym,
    /// Same word count on every line, or as the reference.
    Arithmonym,
    /// Each line misses one letter.
    BelleAbsente,
    /// A single sentence of a thousand characters.
    ASupposer,
}

impl Constraint {
    /// All constraints, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Palindrome,
        Self::AntiPalindrome,
        Self::Lipogram,
        Self::Turkish,
        Self::BeauPresent,
        Self::Monovocalism,
        Self::Okapi,
        Self::Prisoner,
        Self::ReleasedPrisoner,
        Self::Tautogram,
        Self::Acrostic,
        Self::Abecedaire,
        Self::UniversalAcrostic,
        Self::ProgressiveTautogram,
        Self::Kyrielle,
        Self::Sympathetic,
        Self::Snob,
        Self::Ngram,
        Self::Mingram,
        Self::Maxgram,
        Self::Isosceles,
        Self::Anagram,
        Self::Subanagram,
        Self::Pangram,
        Self::Panscrabblogram,
        Self::Heterogram,
        Self::Ulcerations,
        Self::Heteroconsonantism,
        Self::Ananym,
        Self::Arithmonym,
        Self::BelleAbsente,
        Self::ASupposer,
    ];

    /// Returns the constraint name in kebab-case.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Palindrome => "palindrome",
            Self::AntiPalindrome => "anti-palindrome",
            Self::Lipogram => "lipogram",
            Self::Turkish => "turkish",
            Self::BeauPresent => "beau-present",
            Self::Monovocalism => "monovocalism",
            Self::Okapi => "okapi",
            Self::Prisoner => "prisoner",
            Self::ReleasedPrisoner => "released-prisoner",
            Self::Tautogram => "tautogram",
            Self::Acrostic => "acrostic",
            Self::Abecedaire => "abecedaire",
            Self::UniversalAcrostic => "universal-acrostic",
            Self::ProgressiveTautogram => "progressive-tautogram",
            Self::Kyrielle => "kyrielle",
            Self::Sympathetic => "sympathetic",
            Self::Snob => "snob",
            Self::Ngram => "ngram",
            Self::Mingram => "mingram",
            Self::Maxgram => "maxgram",
            Self::Isosceles => "isosceles",
            Self::Anagram => "anagram",
            Self::Subanagram => "subanagram",
            Self::Pangram => "pangram",
            Self::Panscrabblogram => "panscrabblogram",
            Self::Heterogram => "heterogram",
            Self::Ulcerations => "ulcerations",
            Self::Heteroconsonantism => "heteroconsonantism",
            Self::Ananym => "ananym",
            Self::Arithmonym => "arithmonym",
            Self::BelleAbsente => "belle-absente",
            Self::ASupposer => "a-supposer",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ConstraintError::UnknownConstraint {
                name: s.to_string(),
                available: Self::ALL
                    .iter()
                    .map(Self::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Optional arguments for [`evaluate`].
///
/// `reference` doubles as the second text for two-text constraints
/// (anagram, ananym, ...) and as the reference string for the others
/// (lipogram letters, acrostic word, heterogram, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintParams {
    /// Second text or reference string.
    pub reference: Option<String>,
    /// Single letter: tautogram start, ulcerations extra letter.
    pub letter: Option<String>,
    /// Vowel requirement for monovocalism.
    pub vowel: VowelChoice,
    /// Letters consecutive words must share for sympathetic (default 1).
    pub shared: Option<usize>,
    /// Minimum word length for mingram.
    pub min: Option<usize>,
    /// Upper bound: maxgram word length.
    pub max: Option<usize>,
    /// Word lengths for ngram.
    pub lengths: LengthSpec,
    /// Letter bag language for panscrabblogram.
    pub language: Language,
    /// Tolerate small marks for the prisoner's constraint.
    pub allow_accent: bool,
    /// Acrostic matching rules.
    pub acrostic: AcrosticOptions,
}

impl Default for ConstraintParams {
    fn default() -> Self {
        Self {
            reference: None,
            letter: None,
            vowel: VowelChoice::Any,
            shared: None,
            min: None,
            max: None,
            lengths: LengthSpec::Uniform,
            language: Language::Fr,
            allow_accent: true,
            acrostic: AcrosticOptions::default(),
        }
    }
}

impl ConstraintParams {
    fn reference(&self, constraint: Constraint) -> ConstraintResult<&str> {
        self.reference
            .as_deref()
            .ok_or(ConstraintError::MissingArgument {
                constraint: constraint.as_str(),
                argument: "a reference text",
            })
    }

    fn bound(
        value: Option<usize>,
        constraint: Constraint,
        argument: &'static str,
    ) -> ConstraintResult<usize> {
        value.ok_or(ConstraintError::MissingArgument {
            constraint: constraint.as_str(),
            argument,
        })
    }
}

/// Outcome of one constraint check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintReport {
    /// The constraint that was checked.
    pub constraint: Constraint,
    /// Whether the text satisfies it.
    pub satisfied: bool,
}

/// Check `text` against one constraint.
///
/// # Errors
///
/// Returns [`ConstraintError::MissingArgument`] when the constraint needs an
/// argument `params` does not carry, and the constraint's own error when an
/// argument is out of its domain.
#[tracing::instrument(skip(text, params), fields(text_len = text.len()))]
pub fn evaluate(
    constraint: Constraint,
    text: &str,
    params: &ConstraintParams,
) -> ConstraintResult<ConstraintReport> {
    use Constraint as C;

    let satisfied = match constraint {
        C::Palindrome => mirror::is_palindrome(text),
        C::AntiPalindrome => mirror::is_antipalindrome(text),
        C::Lipogram => exclusion::check_lipogram(text, params.reference(constraint)?)?,
        C::Turkish => exclusion::check_turkish(text),
        C::BeauPresent => {
            exclusion::check_beau_present(text, params.reference(constraint)?)?
        }
        C::Monovocalism => vowels::check_monovocalism(text, &params.vowel)?,
        C::Okapi => vowels::check_okapi(text)?,
        C::Prisoner => typography::check_prisoner(text, params.allow_accent),
        C::ReleasedPrisoner => typography::check_released_prisoner(text),
        C::Tautogram => initials::check_tautogram(text, params.letter.as_deref())?,
        C::Acrostic => {
            initials::check_acrostic(text, params.reference(constraint)?, &params.acrostic)
        }
        C::Abecedaire => initials::check_abecedaire(text),
        C::UniversalAcrostic => initials::check_universal_acrostic(text),
        C::ProgressiveTautogram => {
            initials::check_progressive_tautogram(text, params.reference(constraint)?)?
        }
        C::Kyrielle => chains::check_kyrielle(text),
        C::Sympathetic => chains::check_sympathetic(text, params.shared.unwrap_or(1)),
        C::Snob => chains::check_snob(text),
        C::Ngram => lengths::check_ngram(text, &params.lengths),
        C::Mingram => lengths::check_mingram(
            text,
            ConstraintParams::bound(params.min, constraint, "a minimum word length")?,
        ),
        C::Maxgram => lengths::check_maxgram(
            text,
            ConstraintParams::bound(params.max, constraint, "a maximum word length")?,
        ),
        C::Isosceles => lengths::check_isosceles(text),
        C::Anagram => anagrams::check_anagram(text, params.reference(constraint)?),
        C::Subanagram => anagrams::check_subanagram(text, params.reference(constraint)?),
        C::Pangram => anagrams::check_pangram(text),
        C::Panscrabblogram => anagrams::check_panscrabblogram(text, params.language),
        C::Heterogram => anagrams::check_heterogram(text, params.reference(constraint)?)?,
        C::Ulcerations => anagrams::check_ulcerations(text, params.letter.as_deref())?,
        C::Heteroconsonantism => anagrams::check_heteroconsonantism(text),
        C::Ananym => counts::check_ananym(text, params.reference(constraint)?),
        C::Arithmonym => match params.reference.as_deref() {
            Some(other) => counts::check_arithmonym_pair(text, other),
            None => counts::check_arithmonym(text),
        },
        C::BelleAbsente => {
            belle_absente::check_belle_absente(text, params.reference.as_deref())
        }
        C::ASupposer => long_form::check_a_supposer(text),
    };

    tracing::debug!(constraint = %constraint, satisfied, "constraint evaluated");
    Ok(ConstraintReport {
        constraint,
        satisfied,
    })
}

/// Check `text` against every constraint that can run with `params`.
///
/// Constraints whose required argument is missing are skipped; any other
/// argument error is returned.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn evaluate_all(
    text: &str,
    params: &ConstraintParams,
) -> ConstraintResult<Vec<ConstraintReport>> {
    let mut reports = Vec::with_capacity(Constraint::ALL.len());
    for &constraint in Constraint::ALL {
        match evaluate(constraint, text, params) {
            Ok(report) => reports.push(report),
            Err(ConstraintError::MissingArgument { .. }) => {
                tracing::debug!(constraint = %constraint, "skipped: missing argument");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(reports)
}

/// The one canonical letter `s` stands for.
pub(crate) fn single_letter(s: &str) -> ConstraintResult<char> {
    let letters = normalize::to_letters(s);
    let mut chars = letters.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConstraintError::NotASingleLetter(s.to_string())),
    }
}

//! Word-initial constraints: tautograms, acrostics and abecedaries.

use serde::{Deserialize, Serialize};

use super::single_letter;
use crate::error::{ConstraintError, ConstraintResult};
use crate::normalize;
use crate::tables::letters::ALPHABET;

/// The unit whose initials an acrostic reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Unit {
    /// First letter of each non-blank line.
    #[default]
    Lines,
    /// First letter of each word.
    Words,
}

/// How an acrostic is matched against its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcrosticOptions {
    /// Read initials of lines or of words.
    pub unit: Unit,
    /// Repeat the reference as many times as needed.
    pub cyclic: bool,
    /// Fail when the number of units does not fit the reference length.
    ///
    /// Non-cyclic: units and reference letters must be equally many.
    /// Cyclic: units must cover a whole number of repetitions.
    pub check_length: bool,
}

impl Default for AcrosticOptions {
    fn default() -> Self {
        Self {
            unit: Unit::Lines,
            cyclic: false,
            check_length: true,
        }
    }
}

/// Whether every word starts with the same letter.
///
/// Without `start_with`, the first word sets the letter. `start_with` must
/// normalize to exactly one letter.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_tautogram(text: &str, start_with: Option<&str>) -> ConstraintResult<bool> {
    let expected = start_with.map(single_letter).transpose()?;
    let initials = initials(text, Unit::Words);

    let Some(&letter) = expected.as_ref().or_else(|| initials.first()) else {
        return Ok(true);
    };
    Ok(initials.iter().all(|&c| c == letter))
}

/// Whether the initials of `text` spell `reference`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_acrostic(text: &str, reference: &str, options: &AcrosticOptions) -> bool {
    let initials = initials(text, options.unit);
    let expected: Vec<char> = normalize::to_letters(reference).chars().collect();

    if options.cyclic {
        if expected.is_empty() {
            return initials.is_empty();
        }
        if options.check_length && initials.len() % expected.len() != 0 {
            return false;
        }
        initials
            .iter()
            .zip(expected.iter().cycle())
            .all(|(got, want)| got == want)
    } else {
        if options.check_length && initials.len() != expected.len() {
            return false;
        }
        initials
            .iter()
            .zip(&expected)
            .all(|(got, want)| got == want)
    }
}

/// Abecedary: exactly 26 words whose initials run from A to Z.
pub fn check_abecedaire(text: &str) -> bool {
    let options = AcrosticOptions {
        unit: Unit::Words,
        ..AcrosticOptions::default()
    };
    check_acrostic(text, ALPHABET, &options)
}

/// Universal acrostic: exactly 26 lines whose initials run from A to Z.
pub fn check_universal_acrostic(text: &str) -> bool {
    check_acrostic(text, ALPHABET, &AcrosticOptions::default())
}

/// Progressive tautogram: word initials cycle through `reference`.
///
/// The text may stop anywhere in the cycle.
pub fn check_progressive_tautogram(text: &str, reference: &str) -> ConstraintResult<bool> {
    if normalize::to_letters(reference).is_empty() {
        return Err(ConstraintError::EmptyReference(reference.to_string()));
    }
    let options = AcrosticOptions {
        unit: Unit::Words,
        cyclic: true,
        check_length: false,
    };
    Ok(check_acrostic(text, reference, &options))
}

/// First canonical letter of each word or line.
fn initials(text: &str, unit: Unit) -> Vec<char> {
    let units = match unit {
        Unit::Lines => normalize::tokenize_lines(text, true),
        Unit::Words => normalize::tokenize_words(text, true),
    };
    units.iter().filter_map(|u| u.chars().next()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FENOUIL: &str = "Fenouil furibond faisant finement fi !";

    const ABECEDAIRE: &str = "Axxx. Bxxx, cxéxxx dxx exxxx, fxxx gxxxxxx. \
        Hxxxèx, ixxx jxxxx Kxx, lx Mx nxxxxxxxx... \
        Oxxxx pxxxxx ! Qxxx Rxxx sx txxxxxxx : \
        uxxx vxxxx wxxxxx xxxxxx y zxxxxxxxx.";

    fn by_words() -> AcrosticOptions {
        AcrosticOptions {
            unit: Unit::Words,
            ..AcrosticOptions::default()
        }
    }

    #[test]
    fn tautograms() {
        assert!(check_tautogram("", None).unwrap());
        assert!(check_tautogram("fenouil", None).unwrap());
        assert!(check_tautogram(FENOUIL, None).unwrap());
        assert!(check_tautogram(FENOUIL, Some("f")).unwrap());
        assert!(!check_tautogram(FENOUIL, Some("a")).unwrap());
        assert!(!check_tautogram("Fenouil furibond faisant gras !", None).unwrap());
    }

    #[test]
    fn tautogram_start_must_be_one_letter() {
        assert_eq!(
            check_tautogram(FENOUIL, Some("fe")),
            Err(ConstraintError::NotASingleLetter("fe".into()))
        );
        assert!(check_tautogram(FENOUIL, Some("?")).is_err());
        assert!(check_tautogram("Éric et Émile", Some("É")).unwrap());
    }

    #[test]
    fn acrostics() {
        assert!(check_acrostic("", "", &AcrosticOptions::default()));
        assert!(check_acrostic("fenouil", "f", &AcrosticOptions::default()));
        assert!(check_acrostic("fenouil", "f", &by_words()));
        assert!(check_acrostic("Il était une fois...", "ieuf", &by_words()));
        assert!(check_acrostic("Il \nétait \nune \nfois...", "ieuf", &AcrosticOptions::default()));
        assert!(!check_acrostic("Il était une fois...", "ieu", &by_words()));
        assert!(!check_acrostic("Il était une xxxx...", "ieuf", &by_words()));
        assert!(!check_acrostic("Il était une...", "ieuf", &by_words()));
    }

    #[test]
    fn acrostic_without_length_check() {
        let options = AcrosticOptions {
            check_length: false,
            ..by_words()
        };
        assert!(check_acrostic("Il était une...", "ieuf", &options));
        assert!(check_acrostic("Il était une fois...", "ieu", &options));
    }

    #[test]
    fn cyclic_acrostic() {
        let options = AcrosticOptions {
            cyclic: true,
            ..by_words()
        };
        assert!(check_acrostic("Au bal, avec Bob", "ab", &options));
        assert!(!check_acrostic("Au bal, avec", "ab", &options));
        assert!(!check_acrostic("Au bal, bec Bob", "ab", &options));
    }

    #[test]
    fn abecedaire() {
        assert!(check_abecedaire(ABECEDAIRE));
        assert!(!check_abecedaire(""));
        assert!(!check_abecedaire("fenouil"));
        let swapped = ABECEDAIRE.replace("pxxxxx", "qxxxxx");
        assert!(!check_abecedaire(&swapped));
    }

    #[test]
    fn universal_acrostic() {
        let lines: Vec<String> = ALPHABET.chars().map(|c| format!("{c}xx")).collect();
        let text = lines.join("\n");
        assert!(check_universal_acrostic(&text));
        assert!(!check_universal_acrostic(""));
        assert!(!check_universal_acrostic("fenouil"));
        assert!(!check_universal_acrostic(&text.replace("Uxx", "Xxx")));
    }

    #[test]
    fn universal_acrostic_of_single_letters() {
        let text = "A\nb\nc\nd\ne\nf\ng\nh\ni\nj\n\
                    k\nl\nm\nn\no\np\nq\nr\ns\nt\n\
                    u\nv\nw\nx\ny\nz";
        assert!(check_universal_acrostic(text));
        assert!(!check_universal_acrostic(&text.replace("\nu\n", "\nX\n")));
    }

    #[test]
    fn progressive_tautogram() {
        assert!(check_progressive_tautogram("", "abc").unwrap());
        assert!(check_progressive_tautogram("Au bord, ces amis bavardent", "abc").unwrap());
        assert!(!check_progressive_tautogram("Au bord, des amis", "abc").unwrap());
        assert_eq!(
            check_progressive_tautogram("Au bord", "..."),
            Err(ConstraintError::EmptyReference("...".into()))
        );
    }
}

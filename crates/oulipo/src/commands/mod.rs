//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

use oulipo_core::Config;
use oulipo_core::constraints::{
    AcrosticOptions, ConstraintParams, Language, LengthSpec, Unit, VowelChoice,
};

pub mod check;
pub mod check_all;
pub mod gematria;
pub mod info;
pub mod list;
pub mod normalize;

/// Where the text comes from: a file, `--text`, or stdin.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// File to read (`-` or omitted reads stdin)
    pub file: Option<Utf8PathBuf>,

    /// Text given inline instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,
}

impl InputArgs {
    /// Short label for messages.
    pub fn label(&self) -> String {
        match (&self.text, &self.file) {
            (Some(_), _) => "text".to_string(),
            (None, Some(path)) if path != "-" => path.to_string(),
            _ => "stdin".to_string(),
        }
    }

    /// Read the input, enforcing `max_bytes`.
    pub fn read(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => {
                check_size("text", text.len(), max_bytes)?;
                Ok(text.clone())
            }
            (None, Some(path)) if path != "-" => read_input_file(path, max_bytes),
            _ => read_stdin(max_bytes),
        }
    }
}

/// Constraint arguments shared by `check` and `check-all`.
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// Reference text or letters (second text for anagram, ananym, ...)
    #[arg(short, long, conflicts_with = "reference_file")]
    pub reference: Option<String>,

    /// Read the reference from a file
    #[arg(long, value_name = "FILE")]
    pub reference_file: Option<Utf8PathBuf>,

    /// Single letter: tautogram start, ulcerations extra letter
    #[arg(short, long)]
    pub letter: Option<String>,

    /// Monovocalism: the one vowel allowed
    #[arg(long, conflicts_with = "vowels")]
    pub vowel: Option<String>,

    /// Monovocalism: the single vowel used must be one of these
    #[arg(long)]
    pub vowels: Option<String>,

    /// Word lengths for ngram: a number or a comma-separated list
    #[arg(long, value_name = "LENGTHS")]
    pub lengths: Option<LengthSpec>,

    /// Sympathetic: letters consecutive words must share
    #[arg(long)]
    pub shared: Option<usize>,

    /// Mingram: minimum word length
    #[arg(long)]
    pub min: Option<usize>,

    /// Maxgram: maximum word length
    #[arg(long)]
    pub max: Option<usize>,

    /// Scrabble language for the panscrabblogram
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Prisoner's constraint: reject accents and small marks
    #[arg(long)]
    pub no_accent: bool,

    /// Acrostic: read initials of lines or of words
    #[arg(long, value_enum)]
    pub unit: Option<Unit>,

    /// Acrostic: repeat the reference cyclically
    #[arg(long)]
    pub cyclic: bool,

    /// Acrostic: do not require the unit count to match the reference
    #[arg(long)]
    pub no_length_check: bool,
}

impl ParamArgs {
    /// Merge flags with configured defaults into library parameters.
    pub fn to_params(
        &self,
        config: &Config,
        max_bytes: Option<usize>,
    ) -> anyhow::Result<ConstraintParams> {
        let reference = match (&self.reference, &self.reference_file) {
            (Some(text), _) => Some(text.clone()),
            (None, Some(path)) => Some(read_input_file(path, max_bytes)?),
            (None, None) => None,
        };

        let vowel = match (&self.vowel, &self.vowels) {
            (Some(v), _) => VowelChoice::Exactly(v.clone()),
            (None, Some(set)) => VowelChoice::OneOf(set.clone()),
            (None, None) => VowelChoice::Any,
        };

        let defaults = AcrosticOptions::default();
        Ok(ConstraintParams {
            reference,
            letter: self.letter.clone(),
            vowel,
            shared: self.shared.or(config.sympathetic_min),
            min: self.min,
            max: self.max,
            lengths: self.lengths.clone().unwrap_or_default(),
            language: self.language.or(config.language).unwrap_or_default(),
            allow_accent: !self.no_accent && config.allow_accent.unwrap_or(true),
            acrostic: AcrosticOptions {
                unit: self.unit.unwrap_or(defaults.unit),
                cyclic: self.cyclic,
                check_length: !self.no_length_check,
            },
        })
    }
}

fn check_size(label: &str, size: usize, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        anyhow::bail!("input too large: {label} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    check_size(path.as_str(), usize::try_from(metadata.len()).unwrap_or(usize::MAX), max_bytes)?;

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    let stdin = std::io::stdin().lock();
    match max_bytes {
        Some(max) => {
            let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            stdin
                .take(limit)
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            check_size("stdin", content.len(), max_bytes)?;
        }
        None => {
            let mut stdin = stdin;
            stdin
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
        }
    }
    Ok(content)
}

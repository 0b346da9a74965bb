//! Gematria command: score a text with a letter value table.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use oulipo_core::gematria::{self, GematriaTable, TableName};
use oulipo_core::normalize;

use super::{InputArgs, read_input_file};

/// What each reported score covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Per {
    /// One score per word.
    Word,
    /// One score per non-blank line.
    Line,
    /// A single score for the whole text.
    #[default]
    Total,
}

/// Arguments for the `gematria` subcommand.
#[derive(Args, Debug)]
pub struct GematriaArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Built-in table (see `oulipo list`)
    #[arg(long, value_name = "NAME", conflicts_with = "table_file")]
    pub table: Option<TableName>,

    /// JSON file mapping letters to values, e.g. {"a": 1, "b": 2}
    #[arg(long, value_name = "FILE")]
    pub table_file: Option<Utf8PathBuf>,

    /// Score granularity
    #[arg(long, value_enum, default_value_t)]
    pub per: Per,
}

#[derive(Serialize)]
struct Score {
    unit: String,
    value: i64,
}

#[derive(Serialize)]
struct GematriaOutput<'a> {
    table: &'a str,
    per: Per,
    total: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scores: Vec<Score>,
}

/// Score a text with a gematria table.
#[instrument(name = "cmd_gematria", skip_all, fields(per = ?args.per))]
pub fn cmd_gematria(
    args: GematriaArgs,
    global_json: bool,
    config_table: Option<TableName>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(input = %args.input.label(), table = ?args.table, "executing gematria command");

    let text = args.input.read(max_input_bytes)?;

    let custom;
    let table: &GematriaTable = match &args.table_file {
        Some(path) => {
            let json = read_input_file(path, max_input_bytes)?;
            custom = GematriaTable::from_json(path.as_str(), &json)
                .with_context(|| format!("failed to load gematria table from {path}"))?;
            &custom
        }
        None => GematriaTable::named(args.table.or(config_table).unwrap_or(TableName::FrenchRank)),
    };

    let scores = match args.per {
        Per::Word => zip_units(
            normalize::tokenize_words(&text, true),
            gematria::gematria_per_word(&text, table)?,
        ),
        Per::Line => zip_units(
            normalize::tokenize_lines(&text, false)
                .into_iter()
                .filter(|line| !normalize::to_letters(line).is_empty())
                .collect(),
            gematria::gematria_per_line(&text, table)?,
        ),
        Per::Total => Vec::new(),
    };
    let total = gematria::gematria_total(&text, table)?;

    if global_json {
        let output = GematriaOutput {
            table: table.name(),
            per: args.per,
            total,
            scores,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for score in &scores {
        println!("{:>8}  {}", score.value.cyan(), score.unit);
    }
    if scores.is_empty() {
        println!("{total}");
    } else {
        println!("{:>8}  {}", total.bold(), "total".dimmed());
    }

    Ok(())
}

fn zip_units(units: Vec<String>, values: Vec<i64>) -> Vec<Score> {
    units
        .into_iter()
        .zip(values)
        .map(|(unit, value)| Score { unit, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str, per: Per) -> GematriaArgs {
        GematriaArgs {
            input: InputArgs {
                file: None,
                text: Some(text.to_string()),
            },
            table: None,
            table_file: None,
            per,
        }
    }

    #[test]
    fn scores_with_default_table() {
        assert!(cmd_gematria(args("fenouil", Per::Total), true, None, None).is_ok());
        assert!(cmd_gematria(args("un deux\ntrois", Per::Line), false, None, None).is_ok());
    }

    #[test]
    fn letter_outside_table_is_an_error() {
        let result = cmd_gematria(
            args("wagon", Per::Word),
            false,
            Some(TableName::LatinRank),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn units_pair_with_values() {
        let scores = zip_units(vec!["A".into(), "B".into()], vec![1, 2]);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[1].unit, "B");
        assert_eq!(scores[1].value, 2);
    }
}

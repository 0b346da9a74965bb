//! Normalize command: show what the constraint checks actually see.

use clap::{Args, ValueEnum};
use serde_json::json;
use tracing::{debug, instrument};

use oulipo_core::multiset::{letter_counts, word_counts};
use oulipo_core::normalize;

use super::InputArgs;

/// Which view of the text to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Canonical letters only.
    #[default]
    Letters,
    /// Vowels of the canonical letters.
    Vowels,
    /// Consonants of the canonical letters.
    Consonants,
    /// One canonical word per line.
    Words,
    /// Canonical lines, blank lines dropped.
    Lines,
    /// Count of each letter.
    LetterCounts,
    /// Count of each canonical word.
    WordCounts,
}

/// Arguments for the `normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// View to print
    #[arg(long = "as", value_enum, default_value_t)]
    pub view: View,
}

/// Print a normalized view of a text.
#[instrument(name = "cmd_normalize", skip_all, fields(view = ?args.view))]
pub fn cmd_normalize(
    args: NormalizeArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(input = %args.input.label(), "executing normalize command");

    let text = args.input.read(max_input_bytes)?;
    let rendered = render(&text, args.view);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        match rendered {
            serde_json::Value::String(s) => println!("{s}"),
            serde_json::Value::Array(items) => {
                for item in items {
                    println!("{}", item.as_str().unwrap_or_default());
                }
            }
            serde_json::Value::Object(counts) => {
                for (key, count) in counts {
                    println!("{key}\t{count}");
                }
            }
            other => println!("{other}"),
        }
    }

    Ok(())
}

fn render(text: &str, view: View) -> serde_json::Value {
    match view {
        View::Letters => json!(normalize::to_letters(text)),
        View::Vowels => json!(normalize::to_vowels(text)),
        View::Consonants => json!(normalize::to_consonants(text)),
        View::Words => json!(normalize::tokenize_words(text, true)),
        View::Lines => json!(normalize::tokenize_lines(text, true)),
        View::LetterCounts => json!(letter_counts(text)),
        View::WordCounts => json!(word_counts(text, true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_view() {
        assert_eq!(render("Cœur d'Ève", View::Letters), json!("COEURDEVE"));
        assert_eq!(render("Cœur d'Ève", View::Vowels), json!("OEUEE"));
        assert_eq!(render("Cœur d'Ève", View::Consonants), json!("CRDV"));
        assert_eq!(render("le chat, le chien", View::Words), json!(["LE", "CHAT", "LE", "CHIEN"]));
        assert_eq!(render("a b\n\n!\nc", View::Lines), json!(["AB", "C"]));
        assert_eq!(render("abba", View::LetterCounts), json!({"A": 2, "B": 2}));
        assert_eq!(render("le le chat", View::WordCounts), json!({"CHAT": 1, "LE": 2}));
    }
}

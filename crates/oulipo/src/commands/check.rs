//! Check command: one constraint against one text.

use anyhow::{Context, bail};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use oulipo_core::{Config, Constraint, evaluate};

use super::{InputArgs, ParamArgs};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Constraint to check
    #[arg(value_enum)]
    pub constraint: Constraint,

    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub params: ParamArgs,
}

/// Check a text against one constraint. Fails when the text does not satisfy it.
#[instrument(name = "cmd_check", skip_all, fields(constraint = %args.constraint))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(input = %args.input.label(), "executing check command");

    let text = args.input.read(max_input_bytes)?;
    let params = args.params.to_params(config, max_input_bytes)?;
    let label = args.input.label();

    let report = evaluate(args.constraint, &text, &params)
        .with_context(|| format!("failed to check {label} for {}", args.constraint))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.satisfied {
            bail!("{label} does not satisfy {}", report.constraint);
        }
    } else if report.satisfied {
        println!("{} {label} satisfies {}", "PASS:".green(), report.constraint);
    } else {
        bail!("{label} does not satisfy {}", report.constraint);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(constraint: Constraint, text: &str) -> CheckArgs {
        CheckArgs {
            constraint,
            input: InputArgs {
                file: None,
                text: Some(text.to_string()),
            },
            params: ParamArgs::default(),
        }
    }

    #[test]
    fn passing_check_succeeds() {
        let config = Config::default();
        let result = cmd_check(args(Constraint::Palindrome, "kayak"), false, &config, None);
        assert!(result.is_ok());
    }

    #[test]
    fn failing_check_is_an_error() {
        let config = Config::default();
        let err = cmd_check(args(Constraint::Palindrome, "fenouil"), false, &config, None)
            .unwrap_err();
        assert!(err.to_string().contains("does not satisfy palindrome"));
    }

    #[test]
    fn missing_argument_is_reported() {
        let err = cmd_check(args(Constraint::Anagram, "abc"), true, &Config::default(), None)
            .unwrap_err();
        assert!(format!("{err:#}").contains("requires a reference text"));
    }
}

//! Check-all command: every constraint that can run with the given arguments.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use oulipo_core::{Config, ConstraintReport, evaluate_all};

use super::{InputArgs, ParamArgs};

/// Arguments for the `check-all` subcommand.
#[derive(Args, Debug)]
pub struct CheckAllArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub params: ParamArgs,

    /// Only list the constraints the text satisfies
    #[arg(long)]
    pub satisfied_only: bool,
}

#[derive(Serialize)]
struct CheckAllOutput<'a> {
    input: String,
    satisfied: usize,
    checked: usize,
    results: &'a [ConstraintReport],
}

/// Report which constraints a text satisfies. Always succeeds when the
/// arguments are valid.
#[instrument(name = "cmd_check_all", skip_all)]
pub fn cmd_check_all(
    args: CheckAllArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(input = %args.input.label(), "executing check-all command");

    let text = args.input.read(max_input_bytes)?;
    let params = args.params.to_params(config, max_input_bytes)?;
    let label = args.input.label();

    let mut reports = evaluate_all(&text, &params)
        .with_context(|| format!("failed to check {label}"))?;
    let checked = reports.len();
    let satisfied = reports.iter().filter(|r| r.satisfied).count();
    if args.satisfied_only {
        reports.retain(|r| r.satisfied);
    }

    if global_json {
        let output = CheckAllOutput {
            input: label,
            satisfied,
            checked,
            results: &reports,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for report in &reports {
        if report.satisfied {
            println!("{} {}", "✓".green(), report.constraint);
        } else {
            println!("{} {}", "✗".red(), report.constraint.dimmed());
        }
    }
    println!();
    println!("{label}: {satisfied}/{checked} constraints satisfied");

    Ok(())
}

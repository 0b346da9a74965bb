//! List command: available constraints and gematria tables.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use oulipo_core::{Constraint, TableName};

/// Arguments for the `list` subcommand.
#[derive(Args, Debug, Default)]
pub struct ListArgs {}

#[derive(Serialize)]
struct Listing {
    constraints: Vec<&'static str>,
    gematria_tables: Vec<&'static str>,
}

impl Listing {
    fn new() -> Self {
        Self {
            constraints: Constraint::ALL.iter().map(Constraint::as_str).collect(),
            gematria_tables: TableName::ALL.iter().map(TableName::as_str).collect(),
        }
    }
}

/// Print the names accepted by `check` and `gematria --table`.
#[instrument(name = "cmd_list", skip_all)]
pub fn cmd_list(_args: ListArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing list command");
    let listing = Listing::new();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", "Constraints".bold().underline());
    for name in &listing.constraints {
        println!("  {name}");
    }
    println!();
    println!("{}", "Gematria tables".bold().underline());
    for name in &listing.gematria_tables {
        println!("  {name}");
    }

    Ok(())
}

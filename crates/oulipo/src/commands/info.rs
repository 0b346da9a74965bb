//! Info command: package metadata and the configuration the other commands will use.

use clap::Args;
use oulipo_core::config::{Config, ConfigSources, user_config_dir};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct About {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

const ABOUT: About = About {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    repository: env!("CARGO_PKG_REPOSITORY"),
    license: env!("CARGO_PKG_LICENSE"),
};

/// Effective settings, with unset defaults left out of the JSON.
#[derive(Serialize)]
struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gematria_table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_accent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sympathetic_min: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl Settings {
    fn resolve(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            user_config_dir: user_config_dir().map(|dir| dir.to_string()),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            gematria_table: config.gematria_table.map(|t| t.to_string()),
            language: config.language.map(|l| l.to_string()),
            allow_accent: config.allow_accent,
            sympathetic_min: config.sympathetic_min,
            max_input_bytes: config.input_limit(),
        }
    }

    /// Label/value rows for the text view; `None` prints as "(not set)".
    fn rows(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("Gematria table", self.gematria_table.clone()),
            ("Language", self.language.clone()),
            ("Allow accent", self.allow_accent.map(|b| b.to_string())),
            ("Sympathetic min", self.sympathetic_min.map(|n| n.to_string())),
            (
                "Input limit",
                Some(self.max_input_bytes.map_or_else(
                    || "disabled".to_string(),
                    |max| format!("{max} bytes"),
                )),
            ),
        ]
    }
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    about: About,
    config: Settings,
}

/// Print package metadata and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");
    let report = Report {
        about: ABOUT,
        config: Settings::resolve(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn print_text(report: &Report) {
    let about = &report.about;
    println!("{} {}", about.name.bold(), about.version.green());
    for (label, value) in [
        ("", about.description),
        ("License", about.license),
        ("Repository", about.repository),
    ] {
        match (label, value) {
            (_, "") => {}
            ("", text) => println!("{text}"),
            (label, text) => println!("{}: {}", label.dimmed(), text.cyan()),
        }
    }

    let settings = &report.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match settings.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    if let Some(ref dir) = settings.user_config_dir {
        println!("{}: {dir}", "User config dir".dimmed());
    }
    println!("{}: {}", "Log level".dimmed(), settings.log_level);
    if let Some(ref dir) = settings.log_dir {
        println!("{}: {dir}", "Log directory".dimmed());
    }

    println!();
    println!("{}", "Defaults".bold().underline());
    for (label, value) in settings.rows() {
        match value {
            Some(v) => println!("{}: {v}", label.dimmed()),
            None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
        }
    }
}

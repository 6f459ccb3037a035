//! i18n-at command-line tool
//!
//! Inspect an `i18n.toml`, check a message catalog against it, and preview
//! translations without running the app.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use i18n_at::InterpolationFormat;
use tracing_subscriber::EnvFilter;

mod commands;
mod project;

#[derive(Parser)]
#[command(name = "i18n-at")]
#[command(version, about = "Locale config and message catalog tooling", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the declared locales in declaration order
    Locales {
        /// Config file or directory containing i18n.toml
        #[arg(short, long, default_value = "i18n.toml")]
        config: PathBuf,
    },

    /// Translate one key
    Translate {
        /// Dotted message key (e.g. dashboard.title)
        key: String,

        /// Config file or directory containing i18n.toml
        #[arg(short, long, default_value = "i18n.toml")]
        config: PathBuf,

        /// Message catalog (.yaml, .yml or .json)
        #[arg(short, long, default_value = "messages.yaml")]
        messages: PathBuf,

        /// Locale to translate into (defaults to the config's defaultLocale)
        #[arg(short, long)]
        locale: Option<String>,

        /// Override the configured interpolation format
        #[arg(short, long)]
        format: Option<InterpolationFormat>,

        /// Parameters as name=value
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Validate the config and report key-structure drift between locales
    Check {
        /// Config file or directory containing i18n.toml
        #[arg(short, long, default_value = "i18n.toml")]
        config: PathBuf,

        /// Message catalog (.yaml, .yml or .json)
        #[arg(short, long, default_value = "messages.yaml")]
        messages: PathBuf,
    },

    /// Scaffold an i18n.toml and messages.yaml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty parameter name in `{s}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Locales { config } => {
            let config = commands::load_config(&config)?;
            print!("{}", commands::locales(&config));
        }
        Commands::Translate {
            key,
            config,
            messages,
            locale,
            format,
            params,
        } => {
            let config = commands::load_config(&config)?;
            let table = commands::load_messages(&messages)?;
            let out = commands::translate(
                &config,
                &table,
                &commands::TranslateArgs {
                    key: &key,
                    locale: locale.as_deref(),
                    format,
                    params: &params,
                },
            );
            println!("{out}");
        }
        Commands::Check { config, messages } => {
            let config = commands::load_config(&config)?;
            let table = commands::load_messages(&messages)?;
            let report = commands::check(&config, &table);
            print!("{}", report.render());
            if !report.is_ok() {
                anyhow::bail!("{} problem(s) found", report.problems.len());
            }
        }
        Commands::Init { path, force } => {
            project::init(&path, force)?;
            println!("Created i18n.toml and messages.yaml in {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn param_parsing() {
        assert_eq!(
            parse_param("name=Bob"),
            Ok(("name".to_string(), "Bob".to_string()))
        );
        assert_eq!(
            parse_param("expr=a=b"),
            Ok(("expr".to_string(), "a=b".to_string()))
        );
        assert!(parse_param("name").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn cli_parses_translate() {
        let cli = Cli::try_parse_from([
            "i18n-at",
            "translate",
            "dashboard.welcome",
            "--locale",
            "ja-JP",
            "--format",
            "double",
            "-p",
            "name=Bob",
        ])
        .unwrap();
        match cli.command {
            Commands::Translate {
                key,
                locale,
                format,
                params,
                ..
            } => {
                assert_eq!(key, "dashboard.welcome");
                assert_eq!(locale.as_deref(), Some("ja-JP"));
                assert_eq!(format, Some(InterpolationFormat::Double));
                assert_eq!(params, vec![("name".to_string(), "Bob".to_string())]);
            }
            _ => panic!("expected translate"),
        }
    }

    #[test]
    fn cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["i18n-at", "translate", "k", "--format", "icu"]).is_err());
    }
}

//! ti — TaxIntegrity demo configuration and simulation CLI.
//!
//! Wraps the ti-config override store and the ti-sim math behind
//! subcommands mirroring the demo page's edit-mode actions: get/set paths,
//! import/export override documents, reset, simulate, and report.

mod cli;
mod exit_codes;
mod report;

use clap::Parser;
use cli::{Cli, Commands};
use exit_codes::ExitCode;
use serde_json::Value;
use std::fs;
use ti_common::{Error, Result};
use ti_config::{default_config, ConfigStore, FileStorage};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(()) => ExitCode::Ok,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from_error(&err)
        }
    };
    std::process::exit(code.as_i32());
}

fn run(cli: Cli) -> Result<()> {
    let storage = match cli.overrides_file {
        Some(path) => FileStorage::new(path),
        None => FileStorage::in_user_config_dir().map_err(|err| Error::Storage(err.to_string()))?,
    };
    let mut store = ConfigStore::load(default_config(), storage);

    match cli.command {
        Commands::Get { path } => {
            // A miss is a valid outcome: print nothing, exit clean.
            if let Some(value) = store.current_value(&path) {
                println!("{}", serde_json::to_string_pretty(value)?);
            }
        }
        Commands::Set { path, value, raw } => {
            store.edit_field(&path, parse_cli_value(value, raw));
        }
        Commands::Show => {
            println!("{}", serde_json::to_string_pretty(store.active())?);
        }
        Commands::Export => {
            println!("{}", store.export_snapshot());
        }
        Commands::Import { file } => {
            let raw = fs::read_to_string(&file)?;
            store.import_document(&raw)?;
        }
        Commands::Reset => {
            store.reset_to_default();
        }
        Commands::Simulate { adoption } => {
            println!("{}", serde_json::to_string_pretty(&ti_sim::simulate(adoption))?);
        }
        Commands::Report { adoption } => {
            let report = report::build_report(&store, adoption);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Interpret a CLI value argument.
///
/// Values that parse as JSON are stored typed (`42`, `true`, `["a"]`);
/// everything else is stored as a plain string, matching how the in-page
/// editor stores prompt text. `--raw` forces the string interpretation.
fn parse_cli_value(value: String, raw: bool) -> Value {
    if raw {
        return Value::String(value);
    }
    serde_json::from_str(&value).unwrap_or(Value::String(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_values_are_stored_typed() {
        assert_eq!(parse_cli_value("42".into(), false), json!(42));
        assert_eq!(parse_cli_value("true".into(), false), json!(true));
        assert_eq!(parse_cli_value("[1,2]".into(), false), json!([1, 2]));
    }

    #[test]
    fn plain_text_is_stored_as_string() {
        assert_eq!(
            parse_cli_value("New tagline".into(), false),
            json!("New tagline")
        );
    }

    #[test]
    fn raw_flag_forces_string() {
        assert_eq!(parse_cli_value("42".into(), true), json!("42"));
    }
}

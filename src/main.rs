mod config;
mod consts;
mod logging;
mod pretty;
mod recurrence;

use crate::config::{Config, get_config_path};
use crate::pretty::{print_cmd_error, print_cmd_info};
use crate::recurrence::{InputParser, KnownValues};
use clap::{Parser, Subcommand};
use log::{debug, warn};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Computes terms of the G(n) recurrence
struct Args {
    /// Path to the config file. Defaults to ~/.g-iter/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute. Without one, G is evaluated at the default n.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print G(N)
    Eval {
        /// Index to evaluate. Falls back to the configured default.
        #[arg(value_name = "N", allow_negative_numbers = true)]
        n: Option<i64>,
    },
    /// Print G(1) through G(N), one per line
    Sequence {
        #[arg(value_name = "N", allow_negative_numbers = true)]
        n: i64,
    },
    /// Read one N per line from stdin and print G(N) for each
    Batch,
    /// Verify the evaluator against the reference values G(1..=5)
    Check,
    /// Print the largest N whose G(N) fits in 64 bits
    Limits,
    /// Store the default N in the config file
    SetDefault {
        #[arg(value_name = "N", allow_negative_numbers = true)]
        n: i64,
    },
    /// Delete the config file
    Reset,
}

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_cmd_error!("g-iter failed", "{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config_path = match args.config {
        Some(path) => path,
        None => get_config_path()?,
    };
    debug!("Using config file {}", config_path.display());

    match args.command.unwrap_or(Command::Eval { n: None }) {
        Command::Eval { n } => {
            let n = match n {
                Some(n) => n,
                None => configured_default_n(&config_path),
            };
            println!("{}", recurrence::evaluate(n)?);
        }
        Command::Sequence { n } => {
            for term in recurrence::sequence(n)? {
                println!("{}", term);
            }
        }
        Command::Batch => {
            let mut evaluated = 0;
            for n in InputParser::parse_lines(std::io::stdin().lock()) {
                println!("{}", recurrence::evaluate(n?)?);
                evaluated += 1;
            }
            debug!("Evaluated {} inputs from stdin", evaluated);
        }
        Command::Check => {
            KnownValues::check()?;
            println!("ok");
        }
        Command::Limits => {
            println!("{}", recurrence::max_supported_n());
        }
        Command::SetDefault { n } => {
            // Refuse to store an n the evaluator would reject.
            let value = recurrence::evaluate(n)?;
            Config::new(n)
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_info!(
                "Default updated",
                "Default n is now {} (G({}) = {}), saved to {}",
                n,
                n,
                value,
                config_path.display()
            );
        }
        Command::Reset => {
            Config::clear(&config_path)?;
            print_cmd_info!(
                "Configuration cleared",
                "Removed {}",
                config_path.display()
            );
        }
    }
    Ok(())
}

/// Default n from the config file. An unreadable file is reported and ignored.
fn configured_default_n(config_path: &Path) -> i64 {
    match Config::load_or_default(config_path) {
        Ok(config) => config.default_n,
        Err(e) => {
            warn!(
                "Ignoring unreadable config file {}: {}",
                config_path.display(),
                e
            );
            Config::default().default_n
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::types::RecurrenceError;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    // Negative indices reach the evaluator instead of being parsed as flags.
    fn test_negative_index_is_parsed() {
        let args = Args::try_parse_from(["g-iter", "eval", "-3"]).unwrap();
        match args.command {
            Some(Command::Eval { n }) => assert_eq!(n, Some(-3)),
            _ => panic!("Expected eval command"),
        }
    }

    #[test]
    fn test_no_arguments_means_default_eval() {
        let args = Args::try_parse_from(["g-iter"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    // A corrupt config file falls back to the built-in default.
    fn test_configured_default_n_ignores_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(configured_default_n(&path), 5);

        Config::new(7).save(&path).unwrap();
        assert_eq!(configured_default_n(&path), 7);
    }

    #[test]
    // Non-positive input surfaces as a typed error from the command runner.
    fn test_run_rejects_zero() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::try_parse_from([
            "g-iter",
            "--config",
            dir.path().join("config.json").to_str().unwrap(),
            "eval",
            "0",
        ])
        .unwrap();
        let err = run(args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RecurrenceError>(),
            Some(RecurrenceError::InvalidArgument { n: 0 })
        ));
    }
}

//! sheetgate CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use sheetgate_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use sheetgate_cli::commands::{run_schema, run_validate};
use sheetgate_cli::logging::{LogConfig, LogFormat, init_logging};
use sheetgate_cli::summary::render_report;

/// Validated, no diagnostics.
const EXIT_VALID: i32 = 0;
/// Validated, diagnostics found.
const EXIT_INVALID: i32 = 1;
/// The document (or schema) could not be validated at all.
const EXIT_FAILED: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FAILED);
    }
    let exit_code = match &cli.command {
        Command::Validate(args) => match run_validate(args) {
            Ok(outcome) => match render_report(&outcome, args.format) {
                Ok(report) => {
                    println!("{report}");
                    if outcome.result.has_errors() {
                        EXIT_INVALID
                    } else {
                        EXIT_VALID
                    }
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    EXIT_FAILED
                }
            },
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_FAILED
            }
        },
        Command::Schema(args) => match run_schema(args) {
            Ok(rendered) => {
                print!("{rendered}");
                EXIT_VALID
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_FAILED
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default().with_level(cli.verbosity.tracing_level_filter());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_format(format)
        .with_ansi(with_ansi)
        .with_timestamps(cli.log_file.is_some())
        .with_log_file(cli.log_file.clone())
}

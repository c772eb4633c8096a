//! Run settings for the command line tool.
//!
//! Every option can also come from a `CIDR_AGG_*` environment variable,
//! including ones loaded from `.env`. Command line values win.

use crate::input::InputFormat;
use crate::output::OutputFormat;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::ffi::OsString;

/// Reduce a list of CIDR prefixes to the minimal equivalent set
#[derive(Parser, Debug)]
#[command(name = "cidr-aggregate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file, stdin when omitted or `-`
    #[arg(env = "CIDR_AGG_INPUT")]
    pub input: Option<String>,

    /// Input layout, guessed from the file name when omitted
    #[arg(long, value_enum, ignore_case = true, env = "CIDR_AGG_INPUT_FORMAT")]
    pub input_format: Option<InputFormat>,

    /// Output layout
    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Csv,
        env = "CIDR_AGG_OUTPUT_FORMAT"
    )]
    pub output_format: OutputFormat,

    /// Reject prefixes with host bits set instead of masking them
    #[arg(
        long,
        env = "CIDR_AGG_STRICT",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        default_value = "true",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub strict: bool,

    /// Log level for the built-in logger (off, error, warn, info, debug, trace)
    #[arg(long, env = "CIDR_AGG_LOG_LEVEL", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Print a summary line to stderr after the results
    #[arg(
        long,
        env = "CIDR_AGG_SUMMARY",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new(),
        default_value = "true",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub summary: bool,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value.parse::<LevelFilter>().map_err(|e| e.to_string())
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Input file, `None` or `-` for stdin.
    pub input: Option<String>,
    /// Input layout, guessed from the file name when `None`.
    pub input_format: Option<InputFormat>,
    pub output_format: OutputFormat,
    /// Reject prefixes with host bits set instead of masking them.
    pub strict: bool,
    /// Level for the built-in logger, ignored when `log4rs.yml` is present.
    pub log_level: LevelFilter,
    /// Print a summary line to stderr after the results.
    pub summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: None,
            input_format: None,
            output_format: OutputFormat::Csv,
            strict: true,
            log_level: LevelFilter::Info,
            summary: true,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            input_format: cli.input_format,
            output_format: cli.output_format,
            strict: cli.strict,
            log_level: cli.log_level,
            summary: cli.summary,
        }
    }
}

impl Config {
    /// Load `.env`, then parse the process arguments and environment.
    ///
    /// Prints usage and exits on `--help`, `--version` or bad arguments.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Cli::parse().into()
    }

    /// Parse an argument list, including the program name.
    pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into())
    }
}

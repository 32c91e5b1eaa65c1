//! CLI argument definitions for tabstat.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabstat",
    version,
    about = "Summarize and normalize columns of delimited data files",
    long_about = "Summarize and normalize columns of delimited data files.\n\n\
                  Reads a JSON configuration describing which files and columns to \
                  process, writes <name>_summary.csv with mean and standard deviation \
                  per column, and <name>_transformed.csv with min-max normalized \
                  values when requested."
)]
pub struct Cli {
    /// Directory holding the input files. Outputs are written here too.
    #[arg(value_name = "DATA_DIRECTORY")]
    pub data_directory: PathBuf,

    /// JSON configuration listing the datasets to process.
    #[arg(value_name = "JSON_FILE")]
    pub json_file: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

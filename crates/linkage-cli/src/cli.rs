//! CLI argument definitions for the comparison level composer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "linkage",
    version,
    about = "Compose record-linkage comparison levels with AND, OR and NOT",
    long_about = "Compose record-linkage comparison levels with AND, OR and NOT.\n\n\
                  Reads a JSON composition document and prints the resulting\n\
                  comparison levels with their SQL condition and chart label."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path of each event in log output.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compose the levels described by a JSON document.
    Compose(ComposeArgs),

    /// List SQL dialects with known identifier quoting.
    Dialects,
}

#[derive(Parser)]
pub struct ComposeArgs {
    /// Composition document (a node or an array of nodes); `-` reads stdin.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Dialect bound to every raw level in the document.
    #[arg(long = "dialect", value_name = "DIALECT")]
    pub dialect: Option<String>,

    /// Output format for the composed levels.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Table,
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

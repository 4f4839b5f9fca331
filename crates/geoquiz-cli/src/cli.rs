//! CLI argument definitions for the geography quiz.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "geoquiz",
    version,
    about = "Geography quiz - name every country on the map",
    long_about = "Select a country, type a guess with fuzzy autocomplete, then \
                  verify your guesses.\n\n\
                  Country and style schemas are read from GEOQUIZ_RESOURCES_DIR \
                  unless --schema/--style are given."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Play the quiz, reading one command per line from stdin.
    Play(ResourceArgs),

    /// List the countries in the country schema.
    Countries(ResourceArgs),

    /// Build a country schema from a region attribute CSV.
    BuildSchema(BuildSchemaArgs),
}

#[derive(Args)]
pub struct ResourceArgs {
    /// Country schema CSV (default: <resources>/country_schema.csv).
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Style schema JSON (default: <resources>/style_schema.json).
    #[arg(long = "style", value_name = "PATH")]
    pub style: Option<PathBuf>,
}

#[derive(Args)]
pub struct BuildSchemaArgs {
    /// Region attribute CSV with SOVEREIGNT, NAME, NAME_LONG, AREA, MAPCOLOR7.
    #[arg(value_name = "REGIONS")]
    pub regions: PathBuf,

    /// Where to write the country schema.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,
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

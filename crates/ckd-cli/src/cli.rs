//! CLI argument definitions for the CKD screening service.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ckd",
    version,
    about = "Chronic kidney disease risk screening",
    long_about = "Chronic kidney disease risk screening.\n\n\
                  Serves the evaluation web application, scores CSV files offline\n\
                  and summarizes the reference dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Allow patient values in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web application.
    Serve(ServeArgs),

    /// Score a CSV file with the configured model.
    Score(ScoreArgs),

    /// Print summary statistics of a dataset.
    Dataset(DatasetArgs),
}

/// Overrides shared by commands that load the model.
#[derive(Args)]
pub struct ModelArgs {
    /// Model artifact (JSON).
    #[arg(long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Expected SHA-256 of the model artifact.
    #[arg(long = "model-sha256", value_name = "HEX")]
    pub model_sha256: Option<String>,

    /// Reject batches containing values outside the clinical ranges.
    #[arg(long = "enforce-ranges")]
    pub enforce_ranges: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long = "bind", value_name = "ADDR")]
    pub bind: Option<String>,

    /// Reference dataset CSV.
    #[arg(long = "dataset", value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Maximum upload size in bytes.
    #[arg(long = "max-upload-bytes", value_name = "BYTES")]
    pub max_upload_bytes: Option<usize>,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// CSV file with the seventeen clinical columns.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Write per-row results to this CSV file.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub model: ModelArgs,
}

#[derive(Args)]
pub struct DatasetArgs {
    /// Dataset CSV (default: the configured reference dataset).
    #[arg(value_name = "CSV")]
    pub csv: Option<PathBuf>,
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

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assessor",
    version,
    about = "Score self-assessment questionnaires and Digital Twin readiness checks"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding assessor.toml and .assessor/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub settings_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a response set against an assessment document
    Score(ScoreCommand),
    /// Score a Digital Twin readiness response set
    Twin(TwinCommand),
    /// Score every response file in a directory
    Batch(BatchCommand),
    /// Check an assessment document for structural problems
    Validate(ValidateCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub document: PathBuf,
    pub responses: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Require exact (case-insensitive) category to dimension name matches
    #[arg(long)]
    pub strict: bool,
    /// Number of recommendations in the summary
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub top: Option<u16>,
    /// Also write the report with input digests into this directory
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(Args)]
pub struct TwinCommand {
    pub responses: PathBuf,
    /// TOML catalog replacing the built-in questions and insights
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(Args)]
pub struct BatchCommand {
    pub document: PathBuf,
    pub dir: PathBuf,
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub document: PathBuf,
    #[arg(long)]
    pub strict: bool,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

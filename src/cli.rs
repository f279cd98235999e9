use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "riskcheck",
    version,
    about = "Counterparty credit scoring and risk report CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a counterparty profile (JSON file)
    Score(ScoreCommand),
    /// Assess a raw registry-lookup record (JSON file)
    Check(CheckCommand),
    /// Validate an INN or OGRN value
    Validate(ValidateCommand),
    /// Parse a comma-separated intake line (individual or contract)
    Parse(ParseCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Path to the profile JSON file
    pub profile: PathBuf,
    /// Output format; falls back to riskcheck.toml, then to text
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the registry record JSON file
    pub record: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Render the text report without emoji
    #[arg(long)]
    pub no_emoji: bool,
}

#[derive(Args)]
pub struct ValidateCommand {
    /// The INN or OGRN value to validate
    pub value: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ParseKind {
    /// "full name, DD.MM.YYYY, INN"
    Individual,
    /// "contract number, DD.MM.YYYY, amount"
    Contract,
}

#[derive(Args)]
pub struct ParseCommand {
    #[arg(value_enum)]
    pub kind: ParseKind,
    /// The raw intake line to parse
    pub text: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

impl ReportFormat {
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(ReportFormat::Text),
            "md" => Some(ReportFormat::Md),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

mod cli;
mod config;
mod engine;
mod error;
mod input;
mod report;
mod types;

use crate::error::RiskcheckError;
use crate::types::scoring::{RiskLevel, RiskTier};
use chrono::Utc;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, RiskcheckError> {
    if !path.exists() {
        return Err(RiskcheckError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| RiskcheckError::ProfileParse(format!("{}: {}", path.display(), e)))
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    config: Option<&types::config::RiskcheckConfig>,
) -> cli::ReportFormat {
    flag.or_else(|| {
        config
            .and_then(|cfg| cfg.default_format())
            .and_then(cli::ReportFormat::from_config_name)
    })
    .unwrap_or(cli::ReportFormat::Text)
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Text => report::OutputFormat::Text,
    }
}

fn run() -> Result<i32, RiskcheckError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let profile: types::profile::CompanyProfile = read_json(&cmd.profile)?;
            let result = engine::score_company(&profile, Utc::now());

            let format = output_format(resolve_format(cmd.format, loaded.as_ref()));
            let rendered = report::render_scoring(&result, format)?;
            println!("{rendered}");

            if matches!(result.tier, RiskTier::HighRisk | RiskTier::ExtremeRisk) {
                Ok(exit_code::BLOCKING)
            } else if !result.negatives.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Check(cmd) => {
            let record: types::registry::RegistryRecord = read_json(&cmd.record)?;
            let assessment = engine::assess_registry(&record, Utc::now());

            let emoji = !cmd.no_emoji
                && loaded
                    .as_ref()
                    .map(|cfg| cfg.emoji_enabled())
                    .unwrap_or(true);
            let format = output_format(resolve_format(cmd.format, loaded.as_ref()));
            let rendered = report::render_assessment(&assessment, format, emoji)?;
            println!("{rendered}");

            let flagged = assessment
                .recommendations
                .iter()
                .any(|rec| rec != "✅ Check passed successfully");

            if assessment.risk_level == RiskLevel::Critical {
                Ok(exit_code::BLOCKING)
            } else if flagged {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Validate(cmd) => {
            if input::validate_inn_or_ogrn(&cmd.value) {
                println!("valid: {}", cmd.value.trim());
                Ok(exit_code::SUCCESS)
            } else {
                println!("invalid: expected a 10/12-digit INN or a 13/15-digit OGRN");
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Parse(cmd) => match cmd.kind {
            cli::ParseKind::Individual => match input::parse_individual(&cmd.text) {
                Some(individual) => {
                    println!("{}", serde_json::to_string_pretty(&individual)?);
                    Ok(exit_code::SUCCESS)
                }
                None => {
                    println!("no result: expected \"full name, DD.MM.YYYY, INN\"");
                    Ok(exit_code::WARNINGS)
                }
            },
            cli::ParseKind::Contract => match input::parse_contract(&cmd.text) {
                Some(contract) => {
                    println!("{}", serde_json::to_string_pretty(&contract)?);
                    Ok(exit_code::SUCCESS)
                }
                None => {
                    println!("no result: expected \"contract number, DD.MM.YYYY, amount\"");
                    Ok(exit_code::WARNINGS)
                }
            },
        },
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

pub mod json;
pub mod md;
pub mod text;

use crate::error::RiskcheckError;
use crate::types::scoring::{RegistryAssessment, ScoringResult};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
}

pub fn render_scoring(
    result: &ScoringResult,
    format: OutputFormat,
) -> Result<String, RiskcheckError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(RiskcheckError::Json),
        OutputFormat::Md => Ok(md::scoring_to_markdown(result)),
        OutputFormat::Text => Ok(text::scoring_to_text(result)),
    }
}

pub fn render_assessment(
    assessment: &RegistryAssessment,
    format: OutputFormat,
    emoji: bool,
) -> Result<String, RiskcheckError> {
    match format {
        OutputFormat::Json => json::to_json(assessment).map_err(RiskcheckError::Json),
        OutputFormat::Md => Ok(md::assessment_to_markdown(assessment)),
        OutputFormat::Text => Ok(text::assessment_to_text(assessment, emoji)),
    }
}

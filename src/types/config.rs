use crate::error::RiskcheckError;
use serde::Deserialize;

/// Optional CLI configuration. Scoring weights are deliberately not
/// configurable: the rule table is an auditable constant and must not vary
/// between installations. Only presentation concerns live here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskcheckConfig {
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Default output format when --format is not given: "text", "md", "json".
    pub format: Option<String>,
    #[serde(default = "default_emoji")]
    pub emoji: bool,
}

fn default_emoji() -> bool {
    true
}

const ALLOWED_FORMATS: [&str; 3] = ["text", "md", "json"];

impl RiskcheckConfig {
    pub fn default_format(&self) -> Option<&str> {
        self.report.as_ref().and_then(|report| report.format.as_deref())
    }

    pub fn emoji_enabled(&self) -> bool {
        self.report.as_ref().map(|report| report.emoji).unwrap_or(true)
    }

    pub fn validate(&self) -> Result<(), RiskcheckError> {
        if let Some(format) = self.default_format() {
            if !ALLOWED_FORMATS.contains(&format) {
                return Err(RiskcheckError::ConfigParse(format!(
                    "unsupported report.format: {format} (expected one of: text, md, json)"
                )));
            }
        }
        Ok(())
    }
}

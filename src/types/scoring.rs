use serde::Serialize;

/// Seven-tier risk vocabulary of the primary engine, ordered from the most
/// reliable to the riskiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    HighestReliability,
    HighReliability,
    LowRisk,
    ModerateRisk,
    MediumRisk,
    HighRisk,
    ExtremeRisk,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::HighestReliability => "Highest reliability",
            RiskTier::HighReliability => "High reliability",
            RiskTier::LowRisk => "Low risk",
            RiskTier::ModerateRisk => "Moderate risk",
            RiskTier::MediumRisk => "Medium risk",
            RiskTier::HighRisk => "High risk",
            RiskTier::ExtremeRisk => "Extreme risk",
        }
    }
}

/// Output of the primary engine. The positive/negative lists preserve rule
/// evaluation order; callers rely on that ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub base_score: i32,
    pub final_score: i32,
    pub tier: RiskTier,
    pub recommendation: String,
    pub payment_terms: String,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
}

/// Four-level classification used by the secondary (registry) engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Low => "🟢",
            RiskLevel::Medium => "🟡",
            RiskLevel::High => "🟠",
            RiskLevel::Critical => "🔴",
        }
    }
}

/// Output of the secondary engine over a raw registry record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryAssessment {
    pub score: i32,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub details: Vec<String>,
    pub company_name: String,
    pub inn: String,
    pub ogrn: String,
}

use crate::types::scoring::{RiskLevel, RiskTier};

pub struct RiskBand {
    pub min: i32,
    pub max: i32,
    pub tier: RiskTier,
    pub recommendation: &'static str,
    pub payment_terms: &'static str,
}

/// Ordered, disjoint inclusive bands tiling [0, 100].
pub static RISK_BANDS: [RiskBand; 7] = [
    RiskBand {
        min: 95,
        max: 100,
        tier: RiskTier::HighestReliability,
        recommendation: "Counterparty deserves the highest level of trust.",
        payment_terms: "Credit terms up to 60 days",
    },
    RiskBand {
        min: 85,
        max: 94,
        tier: RiskTier::HighReliability,
        recommendation: "Risk is minimal; preferential terms are acceptable.",
        payment_terms: "Credit terms up to 45 days",
    },
    RiskBand {
        min: 75,
        max: 84,
        tier: RiskTier::LowRisk,
        recommendation: "Standard commercial terms are recommended.",
        payment_terms: "Credit terms up to 30 days",
    },
    RiskBand {
        min: 65,
        max: 74,
        tier: RiskTier::ModerateRisk,
        recommendation: "Work is possible with settlement monitoring.",
        payment_terms: "Credit terms up to 14 days",
    },
    RiskBand {
        min: 50,
        max: 64,
        tier: RiskTier::MediumRisk,
        recommendation: "A short deferral is acceptable under close monitoring.",
        payment_terms: "Credit terms up to 7 days",
    },
    RiskBand {
        min: 30,
        max: 49,
        tier: RiskTier::HighRisk,
        recommendation: "Restricted terms of cooperation.",
        payment_terms: "Prepayment of at least 40%, balance before shipment",
    },
    RiskBand {
        min: 0,
        max: 29,
        tier: RiskTier::ExtremeRisk,
        recommendation: "Work only on full prepayment.",
        payment_terms: "100% prepayment",
    },
];

/// Linear scan over the ordered band table; out-of-range scores fall back
/// to the riskiest band.
pub fn resolve_band(score: i32) -> &'static RiskBand {
    RISK_BANDS
        .iter()
        .find(|band| score >= band.min && score <= band.max)
        .unwrap_or(&RISK_BANDS[RISK_BANDS.len() - 1])
}

/// Threshold classification used by the registry engine. Always overrides
/// whatever provisional level was assigned during rule evaluation.
pub fn classify_risk_level(score: i32) -> RiskLevel {
    if score >= 80 {
        RiskLevel::Low
    } else if score >= 60 {
        RiskLevel::Medium
    } else if score >= 40 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

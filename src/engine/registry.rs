use chrono::{DateTime, Utc};
use tracing::debug;

use super::{bands, clamp_score, parse_date};
use crate::types::registry::RegistryRecord;
use crate::types::scoring::{RegistryAssessment, RiskLevel};

const BASE_SCORE: i32 = 100;
const DAYS_PER_MONTH: f64 = 30.0;

/// Assesses a raw registry-lookup record with the subtractive model:
/// start from 100, deduct per flagged concern, then reclassify the risk
/// level purely from the clamped score.
///
/// Provisional risk-level writes made while rules run are intentionally
/// discarded by that final reclassification; the interim value only exists
/// so a rule can refuse to downgrade an already-elevated level.
pub fn assess_registry(record: &RegistryRecord, now: DateTime<Utc>) -> RegistryAssessment {
    let mut score = BASE_SCORE;
    let mut risk_level = RiskLevel::Low;
    let mut recommendations: Vec<String> = Vec::new();
    let mut details: Vec<String> = Vec::new();

    // Company status
    let status = record.state.as_ref().and_then(|state| state.status.as_deref());
    match status {
        Some("LIQUIDATING") => {
            score -= 50;
            risk_level = RiskLevel::Critical;
            recommendations.push("⛔ Company is in the process of liquidation".to_string());
            details.push("Status: Liquidating".to_string());
        }
        Some("LIQUIDATED") => {
            score -= 70;
            risk_level = RiskLevel::Critical;
            recommendations.push("⛔ Company has been liquidated".to_string());
            details.push("Status: Liquidated".to_string());
        }
        Some("REORGANIZING") => {
            score -= 30;
            risk_level = RiskLevel::High;
            recommendations.push("⚠️ Company is undergoing reorganization".to_string());
            details.push("Status: Reorganizing".to_string());
        }
        Some("ACTIVE") => {
            details.push("Status: ✅ Active".to_string());
        }
        _ => {
            score -= 20;
            risk_level = RiskLevel::Medium;
            details.push("Status: unknown".to_string());
        }
    }

    // Registration recency
    if let Some(registered_at) = record
        .state
        .as_ref()
        .and_then(|state| state.registration_date.as_deref())
        .and_then(parse_date)
    {
        let months_since_registration =
            now.signed_duration_since(registered_at).num_days() as f64 / DAYS_PER_MONTH;

        if months_since_registration < 6.0 {
            score -= 25;
            if risk_level == RiskLevel::Low {
                risk_level = RiskLevel::Medium;
            }
            recommendations.push("⚠️ Company was registered less than 6 months ago".to_string());
        } else if months_since_registration < 12.0 {
            score -= 15;
            if risk_level == RiskLevel::Low {
                risk_level = RiskLevel::Medium;
            }
            recommendations.push("⚠️ Company was registered less than a year ago".to_string());
        }

        details.push(format!("Registered: {}", registered_at.format("%d.%m.%Y")));
    }

    // Authorized capital
    if let Some(capital) = record
        .capital
        .as_ref()
        .and_then(|capital| capital.value.as_deref())
        .and_then(|value| value.trim().parse::<f64>().ok())
    {
        if capital < 10_000.0 {
            score -= 15;
            if risk_level == RiskLevel::Low {
                risk_level = RiskLevel::Medium;
            }
            recommendations.push("⚠️ Low authorized capital".to_string());
        }
        details.push(format!("Authorized capital: {capital} RUB"));
    }

    if let Some(okved) = record.okved.as_deref() {
        details.push(format!("Primary OKVED: {okved}"));
    }

    if let Some(name) = record
        .management
        .as_ref()
        .and_then(|management| management.name.as_deref())
    {
        details.push(format!("Manager: {name}"));
    }

    // Address and mass-registration check
    if let Some(address) = record.address.as_ref() {
        if let Some(value) = address.value.as_deref() {
            details.push(format!("Address: {value}"));

            let qc_geo = address.data.as_ref().and_then(|data| data.qc_geo.as_deref());
            if matches!(qc_geo, Some("4") | Some("5")) {
                score -= 20;
                if risk_level == RiskLevel::Low {
                    risk_level = RiskLevel::Medium;
                }
                recommendations.push("⚠️ Mass-registration address".to_string());
            }
        }
    }

    let score = clamp_score(score);

    // Final classification always derives from the score alone.
    let _ = risk_level;
    let risk_level = bands::classify_risk_level(score);

    if recommendations.is_empty() {
        recommendations.push("✅ Check passed successfully".to_string());
    }

    let company_name = record
        .name
        .as_ref()
        .and_then(|name| name.short_with_opf.clone().or_else(|| name.full.clone()))
        .unwrap_or_else(|| "Unknown company".to_string());

    debug!(
        score,
        risk = risk_level.label(),
        company = company_name.as_str(),
        "registry record assessed"
    );

    RegistryAssessment {
        score,
        risk_level,
        recommendations,
        details,
        company_name,
        inn: record.inn.clone().unwrap_or_default(),
        ogrn: record.ogrn.clone().unwrap_or_default(),
    }
}

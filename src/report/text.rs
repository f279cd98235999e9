use crate::types::scoring::{RegistryAssessment, ScoringResult};

const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━";

fn score_emoji(score: i32) -> &'static str {
    if score >= 80 {
        "🟢"
    } else if score >= 60 {
        "🟡"
    } else if score >= 40 {
        "🟠"
    } else {
        "🔴"
    }
}

/// Plain terminal rendering of a primary-engine result.
pub fn scoring_to_text(result: &ScoringResult) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "score: {}/100 (base {})\n",
        result.final_score, result.base_score
    ));
    output.push_str(&format!("tier: {}\n", result.tier.label()));
    output.push_str(&format!("recommendation: {}\n", result.recommendation));
    output.push_str(&format!("payment terms: {}\n", result.payment_terms));

    if !result.positives.is_empty() {
        output.push_str("positive factors:\n");
        for label in &result.positives {
            output.push_str(&format!("  + {label}\n"));
        }
    }
    if !result.negatives.is_empty() {
        output.push_str("negative factors:\n");
        for label in &result.negatives {
            output.push_str(&format!("  - {label}\n"));
        }
    }

    output
}

/// Chat-style report for a registry assessment. Block order and the
/// conditional identity fields are part of the consumed contract: INN and
/// OGRN lines are omitted when empty, empty sections are dropped whole.
pub fn assessment_to_text(assessment: &RegistryAssessment, emoji: bool) -> String {
    let mut message = String::new();

    if emoji {
        message.push_str("📊 **Counterparty check result**\n\n");
        message.push_str(&format!("🏢 **Company:** {}\n", assessment.company_name));
        if !assessment.inn.is_empty() {
            message.push_str(&format!("🔢 **INN:** {}\n", assessment.inn));
        }
        if !assessment.ogrn.is_empty() {
            message.push_str(&format!("🔢 **OGRN:** {}\n", assessment.ogrn));
        }
        message.push_str(&format!("\n{SEPARATOR}\n\n"));
        message.push_str(&format!(
            "{} **Score:** {}/100\n",
            score_emoji(assessment.score),
            assessment.score
        ));
        message.push_str(&format!(
            "{} **Risk level:** {}\n",
            assessment.risk_level.emoji(),
            assessment.risk_level.label()
        ));
        message.push_str(&format!("\n{SEPARATOR}\n\n"));
    } else {
        message.push_str("Counterparty check result\n\n");
        message.push_str(&format!("Company: {}\n", assessment.company_name));
        if !assessment.inn.is_empty() {
            message.push_str(&format!("INN: {}\n", assessment.inn));
        }
        if !assessment.ogrn.is_empty() {
            message.push_str(&format!("OGRN: {}\n", assessment.ogrn));
        }
        message.push_str(&format!("\nScore: {}/100\n", assessment.score));
        message.push_str(&format!(
            "Risk level: {}\n\n",
            assessment.risk_level.label()
        ));
    }

    if !assessment.details.is_empty() {
        message.push_str(if emoji {
            "📋 **Details:**\n"
        } else {
            "Details:\n"
        });
        for detail in &assessment.details {
            message.push_str(&format!("• {detail}\n"));
        }
        if emoji {
            message.push_str(&format!("\n{SEPARATOR}\n\n"));
        } else {
            message.push('\n');
        }
    }

    if !assessment.recommendations.is_empty() {
        message.push_str(if emoji {
            "💡 **Recommendations:**\n"
        } else {
            "Recommendations:\n"
        });
        for recommendation in &assessment.recommendations {
            message.push_str(&format!("{recommendation}\n"));
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::{RegistryAssessment, RiskLevel};

    fn sample_assessment() -> RegistryAssessment {
        RegistryAssessment {
            score: 85,
            risk_level: RiskLevel::Low,
            recommendations: vec!["✅ Check passed successfully".to_string()],
            details: vec![
                "Status: ✅ Active".to_string(),
                "Registered: 01.02.2020".to_string(),
            ],
            company_name: "Test LLC".to_string(),
            inn: "1234567890".to_string(),
            ogrn: "1234567890123".to_string(),
        }
    }

    #[test]
    fn text_report_includes_identity_score_and_recommendations() {
        let formatted = assessment_to_text(&sample_assessment(), true);

        assert!(formatted.contains("Test LLC"));
        assert!(formatted.contains("85/100"));
        assert!(formatted.contains("Low"));
        assert!(formatted.contains("✅ Check passed successfully"));
        assert!(formatted.contains("1234567890"));
    }

    #[test]
    fn text_report_omits_empty_identifiers() {
        let assessment = RegistryAssessment {
            inn: String::new(),
            ogrn: String::new(),
            ..sample_assessment()
        };

        let formatted = assessment_to_text(&assessment, true);
        assert!(!formatted.contains("INN"));
        assert!(!formatted.contains("OGRN"));
    }

    #[test]
    fn text_report_renders_every_risk_level() {
        for risk_level in [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ] {
            let assessment = RegistryAssessment {
                risk_level,
                recommendations: vec![],
                details: vec![],
                ..sample_assessment()
            };
            let formatted = assessment_to_text(&assessment, true);
            assert!(formatted.contains(risk_level.label()));
        }
    }

    #[test]
    fn plain_mode_strips_emoji() {
        let formatted = assessment_to_text(&sample_assessment(), false);
        assert!(formatted.contains("Company: Test LLC"));
        assert!(!formatted.contains("🏢"));
        assert!(!formatted.contains(SEPARATOR));
    }

    #[test]
    fn scoring_text_lists_factors() {
        use crate::engine::score_company;
        use crate::types::profile::CompanyProfile;
        use chrono::{TimeZone, Utc};

        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let profile = CompanyProfile {
            state_status: Some("ACTIVE".to_string()),
            capital: Some(2_000_000),
            tax_arrears: Some(true),
            ..CompanyProfile::default()
        };

        let rendered = scoring_to_text(&score_company(&profile, now));
        assert!(rendered.contains("score: "));
        assert!(rendered.contains("  + Large authorized capital"));
        assert!(rendered.contains("  - Tax arrears"));
    }
}

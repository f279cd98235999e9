use crate::types::scoring::{RegistryAssessment, ScoringResult};

pub fn scoring_to_markdown(result: &ScoringResult) -> String {
    let mut output = String::new();
    output.push_str("# Counterparty Scoring Report\n\n");
    output.push_str(&format!(
        "Final score: {}/100 (base {})\n\n",
        result.final_score, result.base_score
    ));
    output.push_str(&format!("Risk tier: {}\n\n", result.tier.label()));
    output.push_str(&format!("Recommendation: {}\n\n", result.recommendation));
    output.push_str(&format!("Payment terms: {}\n\n", result.payment_terms));

    output.push_str("## Positive factors\n\n");
    if result.positives.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for label in &result.positives {
            output.push_str(&format!("- {label}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Negative factors\n\n");
    if result.negatives.is_empty() {
        output.push_str("- none\n");
    } else {
        for label in &result.negatives {
            output.push_str(&format!("- {label}\n"));
        }
    }

    output
}

pub fn assessment_to_markdown(assessment: &RegistryAssessment) -> String {
    let mut output = String::new();
    output.push_str("# Counterparty Check\n\n");
    output.push_str(&format!("Company: {}\n", assessment.company_name));
    if !assessment.inn.is_empty() {
        output.push_str(&format!("INN: {}\n", assessment.inn));
    }
    if !assessment.ogrn.is_empty() {
        output.push_str(&format!("OGRN: {}\n", assessment.ogrn));
    }
    output.push_str(&format!("\nScore: {}/100\n", assessment.score));
    output.push_str(&format!(
        "Risk level: {}\n\n",
        assessment.risk_level.label()
    ));

    output.push_str("## Details\n\n");
    if assessment.details.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for detail in &assessment.details {
            output.push_str(&format!("- {detail}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    if assessment.recommendations.is_empty() {
        output.push_str("- none\n");
    } else {
        for recommendation in &assessment.recommendations {
            output.push_str(&format!("- {recommendation}\n"));
        }
    }

    output
}

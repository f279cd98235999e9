use chrono::{DateTime, Utc};
use tracing::debug;

use super::{bands, changed_within_year, clamp_score, years_in_operation};
use crate::types::profile::CompanyProfile;
use crate::types::scoring::ScoringResult;

pub const BASE_SCORE: i32 = 50;

const ENFORCEMENT_SERIOUS_COUNT: i64 = 5;
const ENFORCEMENT_SERIOUS_AMOUNT: i64 = 1_000_000;

/// Computes the score and commercial recommendation for a company profile.
///
/// Base score 50, then a fixed ordered table of weighted adjustments over
/// age, status, finances, litigation, and structural signals. Every field
/// is optional: an absent signal skips its rule and contributes neither a
/// delta nor a label. The final "no negative markers" bonus reads the
/// accumulated negatives list, so it must stay last.
pub fn score_company(profile: &CompanyProfile, now: DateTime<Utc>) -> ScoringResult {
    let mut score = BASE_SCORE;
    let mut positives: Vec<String> = Vec::new();
    let mut negatives: Vec<String> = Vec::new();

    let years = years_in_operation(profile.registration_date.as_deref(), now);

    // Legal status
    let status = profile
        .state_status
        .as_deref()
        .map(|status| status.to_uppercase());
    match status.as_deref() {
        Some("LIQUIDATED") | Some("LIQUIDATING") | Some("BANKRUPT") => {
            score -= 25;
            negatives.push("Company in liquidation or bankruptcy".to_string());
        }
        Some(other) if other != "ACTIVE" => {
            score -= 10;
            negatives.push(format!("Status: {other}"));
        }
        _ => {}
    }

    if profile.has_unreliable_info == Some(true) {
        score -= 20;
        negatives.push("Unreliable information on record".to_string());
    }

    // Company age; the [3, 10) band carries no adjustment and no label
    if let Some(years) = years {
        if years < 1.0 {
            score -= 15;
            negatives.push("Company younger than 1 year".to_string());
        } else if years < 3.0 {
            score -= 5;
            negatives.push("Company age 1-3 years".to_string());
        } else if (10.0..20.0).contains(&years) {
            score += 5;
            positives.push("Company age 10-20 years".to_string());
        } else if years >= 20.0 {
            score += 10;
            positives.push("Company older than 20 years".to_string());
        }
    }

    // Legal address and recent changes; first-year changes are not anomalous
    if profile.is_mass_address == Some(true) {
        score -= 10;
        negatives.push("Mass-registration legal address".to_string());
    }

    let older_than_year = years.map(|years| years > 1.0).unwrap_or(false);

    if older_than_year && changed_within_year(profile.management_change_date.as_deref(), now) {
        score -= 5;
        negatives.push("Director changed within the last year".to_string());
    }

    if older_than_year && changed_within_year(profile.address_change_date.as_deref(), now) {
        score -= 5;
        negatives.push("Legal address changed within the last year".to_string());
    }

    // Authorized capital
    if let Some(capital) = profile.capital {
        if capital <= 10_000 {
            score -= 5;
            negatives.push("Minimal authorized capital".to_string());
        } else if capital >= 1_000_000 {
            score += 5;
            positives.push("Large authorized capital".to_string());
        }
    }

    // Headcount
    if let Some(employees) = profile.employees {
        if employees <= 1 {
            score -= 10;
            negatives.push("0-1 employees".to_string());
        } else if employees > 50 {
            score += 5;
            positives.push("Staff of more than 50 employees".to_string());
        }
    }

    // Financials
    if let Some(finance) = &profile.finance {
        if let Some(profit) = finance.profit {
            if profit < 0 {
                score -= 5;
                negatives.push("Negative financial result".to_string());
            } else if profit > 0 {
                score += 5;
                positives.push("Positive financial result".to_string());
            }
        }

        if let Some(revenue) = finance.revenue {
            if revenue < 1_000_000 {
                score -= 5;
                negatives.push("Low revenue (under 1M)".to_string());
            } else if (10_000_000..100_000_000).contains(&revenue) {
                score += 3;
                positives.push("Stable revenue (10-100M)".to_string());
            } else if revenue >= 100_000_000 {
                score += 5;
                positives.push("Large revenue (100M or more)".to_string());
            }
        }

        if finance.net_assets.map(|net| net < 0).unwrap_or(false) {
            score -= 10;
            negatives.push("Negative net assets".to_string());
        }
    }

    // Tax debt and account standing
    if profile.tax_arrears == Some(true) {
        score -= 10;
        negatives.push("Tax arrears".to_string());
    }

    if profile.tax_penalties == Some(true) {
        score -= 5;
        negatives.push("Tax fines and penalties".to_string());
    }

    if profile.bank_account_blocked == Some(true) {
        score -= 20;
        negatives.push("Bank accounts blocked".to_string());
    }

    if let Some(enforcement) = &profile.enforcement {
        let count = enforcement.count.unwrap_or(0);
        let total_amount = enforcement.total_amount.unwrap_or(0);
        if count > 0 {
            score -= 5;
            negatives.push("Active enforcement proceedings".to_string());
            if count > ENFORCEMENT_SERIOUS_COUNT || total_amount > ENFORCEMENT_SERIOUS_AMOUNT {
                score -= 5;
                negatives.push("Multiple or large enforcement proceedings".to_string());
            }
        }
    }

    if profile.in_rnp == Some(true) {
        score -= 20;
        negatives.push("Listed in the registry of unreliable suppliers".to_string());
    }

    // Litigation
    if let Some(arbitration) = &profile.arbitration {
        let cases_as_defendant = arbitration.cases_as_defendant.unwrap_or(0);
        if cases_as_defendant > 5 {
            score -= 10;
            negatives.push("Many arbitration cases as defendant (more than 5)".to_string());
        } else if cases_as_defendant == 0 && years.map(|years| years >= 3.0).unwrap_or(false) {
            score += 5;
            positives.push("No arbitration cases (company older than 3 years)".to_string());
        }

        if arbitration
            .lost_case_amount
            .map(|amount| amount > ENFORCEMENT_SERIOUS_AMOUNT)
            .unwrap_or(false)
        {
            score -= 10;
            negatives.push("Large lost arbitration cases".to_string());
        }
    }

    // Management
    if profile.disqualified_director == Some(true) {
        score -= 25;
        negatives.push("Disqualified director".to_string());
    }

    if profile.disqualified_founder == Some(true) {
        score -= 25;
        negatives.push("Disqualified founder".to_string());
    }

    if profile.mass_manager_count.map(|n| n > 10).unwrap_or(false) {
        score -= 15;
        negatives.push("Mass manager (more than 10 companies)".to_string());
    }

    if profile.mass_founder_count.map(|n| n > 10).unwrap_or(false) {
        score -= 15;
        negatives.push("Mass founder (more than 10 companies)".to_string());
    }

    if profile
        .bankruptcy_history_count
        .map(|n| n >= 3)
        .unwrap_or(false)
    {
        score -= 10;
        negatives.push("Related parties involved in multiple liquidations".to_string());
    }

    // Structure and reputation
    if profile.branch_count.map(|n| n > 3).unwrap_or(false) {
        score += 5;
        positives.push("Developed branch network".to_string());
    }

    if profile.is_part_of_holding == Some(true) {
        score += 5;
        positives.push("Part of a large holding".to_string());
    }

    if profile.is_systemically_important == Some(true) {
        score += 5;
        positives.push("Systemically important company".to_string());
    }

    if profile.is_public_company == Some(true) {
        score += 5;
        positives.push("Public joint-stock company".to_string());
    }

    // Absence of negative markers. Requires status to equal ACTIVE, not
    // merely to be outside the penalty set. Must run after every other rule.
    if negatives.is_empty() && status.as_deref() == Some("ACTIVE") {
        score += 5;
        positives.push("No negative markers found".to_string());
    }

    let final_score = clamp_score(score);
    let band = bands::resolve_band(final_score);
    debug!(
        final_score,
        tier = band.tier.label(),
        positives = positives.len(),
        negatives = negatives.len(),
        "company profile scored"
    );

    ScoringResult {
        base_score: BASE_SCORE,
        final_score,
        tier: band.tier,
        recommendation: band.recommendation.to_string(),
        payment_terms: band.payment_terms.to_string(),
        positives,
        negatives,
    }
}

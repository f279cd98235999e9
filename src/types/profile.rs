use serde::{Deserialize, Serialize};

/// Normalized snapshot of a counterparty used by the primary engine.
///
/// Every field is independently optional. Absence means "signal not
/// evaluated", never "signal is false": an absent boolean must not trigger
/// any rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CompanyProfile {
    /// Registration date as reported by the registry. Parsed leniently by
    /// the engine; unparseable values degrade to "age unknown".
    pub registration_date: Option<String>,
    /// Legal state marker, e.g. ACTIVE, LIQUIDATING, LIQUIDATED, BANKRUPT.
    pub state_status: Option<String>,
    pub has_unreliable_info: Option<bool>,
    pub is_mass_address: Option<bool>,
    pub management_change_date: Option<String>,
    pub address_change_date: Option<String>,
    pub capital: Option<i64>,
    pub employees: Option<i64>,
    pub finance: Option<FinanceData>,
    pub tax_arrears: Option<bool>,
    pub tax_penalties: Option<bool>,
    pub bank_account_blocked: Option<bool>,
    pub enforcement: Option<EnforcementData>,
    /// Registry of unreliable suppliers membership.
    pub in_rnp: Option<bool>,
    pub arbitration: Option<ArbitrationData>,
    pub disqualified_director: Option<bool>,
    pub disqualified_founder: Option<bool>,
    pub mass_manager_count: Option<i64>,
    pub mass_founder_count: Option<i64>,
    pub bankruptcy_history_count: Option<i64>,
    pub branch_count: Option<i64>,
    pub is_part_of_holding: Option<bool>,
    pub is_systemically_important: Option<bool>,
    pub is_public_company: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FinanceData {
    pub profit: Option<i64>,
    pub revenue: Option<i64>,
    pub net_assets: Option<i64>,
}

/// Summary of legal collection actions against the counterparty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnforcementData {
    pub count: Option<i64>,
    pub total_amount: Option<i64>,
}

/// Summary of commercial litigation where the counterparty is defendant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ArbitrationData {
    pub cases_as_defendant: Option<i64>,
    pub lost_case_amount: Option<i64>,
}

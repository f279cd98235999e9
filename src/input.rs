use chrono::NaiveDate;
use serde::Serialize;

/// Individual counterparty details collected from one line of operator
/// input: "full name, DD.MM.YYYY, INN".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualData {
    pub full_name: String,
    pub birth_date: String,
    pub inn: String,
}

/// Contract details collected from one line of operator input:
/// "number, DD.MM.YYYY, amount".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractData {
    pub contract_number: String,
    pub contract_date: String,
    pub amount: String,
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// INN is 10 digits for legal entities or 12 for individuals.
pub fn validate_inn(inn: &str) -> bool {
    let trimmed = inn.trim();
    matches!(trimmed.len(), 10 | 12) && all_digits(trimmed)
}

/// OGRN is 13 digits for legal entities or 15 for individual entrepreneurs.
pub fn validate_ogrn(ogrn: &str) -> bool {
    let trimmed = ogrn.trim();
    matches!(trimmed.len(), 13 | 15) && all_digits(trimmed)
}

pub fn validate_inn_or_ogrn(value: &str) -> bool {
    validate_inn(value) || validate_ogrn(value)
}

/// DD.MM.YYYY with a real calendar check (rejects 31.02.* and friends).
pub fn validate_date(date: &str) -> bool {
    let parts: Vec<&str> = date.split('.').collect();
    if parts.len() != 3
        || parts[0].len() != 2
        || parts[1].len() != 2
        || parts[2].len() != 4
        || !parts.iter().all(|part| all_digits(part))
    {
        return false;
    }
    NaiveDate::parse_from_str(date, "%d.%m.%Y").is_ok()
}

/// A full name must contain at least two whitespace-separated words.
pub fn validate_full_name(name: &str) -> bool {
    name.split_whitespace().count() >= 2
}

/// Parses "full name, birth date, INN". Malformed input is "no result",
/// never an error.
pub fn parse_individual(text: &str) -> Option<IndividualData> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let (full_name, birth_date, inn) = (parts[0], parts[1], parts[2]);
    if !validate_full_name(full_name) || !validate_date(birth_date) || !validate_inn(inn) {
        return None;
    }

    Some(IndividualData {
        full_name: full_name.to_string(),
        birth_date: birth_date.to_string(),
        inn: inn.to_string(),
    })
}

/// Parses "contract number, contract date, amount".
pub fn parse_contract(text: &str) -> Option<ContractData> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let (contract_number, contract_date, amount) = (parts[0], parts[1], parts[2]);
    if contract_number.is_empty() || !validate_date(contract_date) || amount.is_empty() {
        return None;
    }

    Some(ContractData {
        contract_number: contract_number.to_string(),
        contract_date: contract_date.to_string(),
        amount: amount.to_string(),
    })
}

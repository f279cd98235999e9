use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::score_company;
    use crate::types::profile::CompanyProfile;
    use chrono::{TimeZone, Utc};

    #[test]
    fn json_report_contains_final_score_and_tier() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let result = score_company(&CompanyProfile::default(), now);

        let rendered = to_json(&result).expect("json should serialize");
        assert!(rendered.contains("\"final_score\": 50"));
        assert!(rendered.contains("\"tier\": \"medium_risk\""));
        assert!(rendered.contains("\"positives\""));
    }
}

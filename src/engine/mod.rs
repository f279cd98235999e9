pub mod bands;
pub mod company;
pub mod registry;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub use company::score_company;
pub use registry::assess_registry;

const DAYS_PER_YEAR: f64 = 365.0;

/// Lenient date parsing for registry payloads. Accepts RFC 3339 timestamps,
/// plain dates, and the DD.MM.YYYY form used in operator input. Anything
/// else is "signal absent" for the caller.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }
    for format in ["%Y-%m-%d", "%d.%m.%Y"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return parsed.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }
    None
}

/// Age in fractional years, or None when the date is absent, unparseable,
/// or in the future.
fn years_in_operation(registration_date: Option<&str>, now: DateTime<Utc>) -> Option<f64> {
    let registered_at = parse_date(registration_date?)?;
    let elapsed = now.signed_duration_since(registered_at);
    if elapsed < chrono::Duration::zero() {
        return None;
    }
    Some(elapsed.num_seconds() as f64 / (DAYS_PER_YEAR * 86_400.0))
}

/// Whether the given change happened within the last 365 days.
fn changed_within_year(change_date: Option<&str>, now: DateTime<Utc>) -> bool {
    let Some(changed_at) = change_date.and_then(parse_date) else {
        return false;
    };
    now.signed_duration_since(changed_at) <= chrono::Duration::days(365)
}

/// Clamp an accumulated score to [0, 100]. Weights are integers, so no
/// rounding is ever required; the clamp is the only adjustment.
fn clamp_score(score: i32) -> i32 {
    score.clamp(0, 100)
}

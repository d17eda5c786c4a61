use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Accepts `YYYY-MM-DD`, `YYYY-MM`, `YYYY` or an RFC 3339 timestamp.
/// Partial dates land on the first day of their period.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d").ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01-01", raw), "%Y-%m-%d").ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Ordering key. Unparseable dates count as older than every valid one.
pub fn sort_key(raw: &str) -> Option<NaiveDate> {
    parse_date(raw)
}

pub fn year_of(raw: &str) -> Option<i32> {
    use chrono::Datelike;

    if let Some(date) = parse_date(raw) {
        return Some(date.year());
    }

    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}

/// Year for display; falls back to the raw text.
pub fn year_label(raw: &str) -> String {
    year_of(raw)
        .map(|y| y.to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Number(i64),
}

pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawDate::deserialize(deserializer)? {
        RawDate::Text(s) => s,
        RawDate::Number(n) => n.to_string(),
    })
}

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::{Result, TrackerError};

/// Splits a comma-separated tag string, dropping empty entries.
pub fn parse_tags(tags: Option<String>) -> Vec<String> {
    tags.map(|t| {
        t.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// Parses a `YYYY-MM-DD` due date as midnight UTC.
pub fn parse_due_date(value: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::DateParse {
            value: value.to_string(),
            expected: "YYYY-MM-DD".to_string(),
        }
    })?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

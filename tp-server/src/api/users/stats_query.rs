use crate::ApiError;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

/// Reporting window for the registration stats endpoint.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub start_date: String,
    pub end_date: String,
}

impl StatsQuery {
    /// Parse both bounds and reject an inverted window.
    pub fn parse_window(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), ApiError> {
        let start = parse_date(&self.start_date, "start_date")?;
        let end = parse_date(&self.end_date, "end_date")?;

        if end < start {
            return Err(ApiError::validation(
                "end_date must not precede start_date",
                Some("end_date".into()),
            ));
        }

        Ok((start, end))
    }
}

/// Accepts an RFC 3339 timestamp or a plain date, read as UTC midnight.
fn parse_date(value: &str, field: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ApiError::validation(
        format!("{} must be a date or an RFC 3339 timestamp", field),
        Some(field.to_string()),
    ))
}

//! Time helpers — business timezone conversion
//!
//! All millis → calendar-date conversion goes through the configured
//! business timezone so every view groups on the same day boundaries.

use chrono::{NaiveDate, TimeZone};
use chrono_tz::Tz;
use shared::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Unix millis → calendar date in the business timezone
pub fn business_date(millis: i64, tz: Tz) -> NaiveDate {
    tz.timestamp_millis_opt(millis)
        .single()
        .unwrap_or_else(|| tz.timestamp_millis_opt(0).unwrap())
        .date_naive()
}

/// Unix millis → YYYY-MM-DD in the business timezone
pub fn business_date_string(millis: i64, tz: Tz) -> String {
    business_date(millis, tz).format("%Y-%m-%d").to_string()
}

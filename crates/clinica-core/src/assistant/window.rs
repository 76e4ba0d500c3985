//! 7-day window resolution for the counting intent.

use chrono::{Datelike, Duration, NaiveDate};

use super::extract;
use super::AssistantError;

/// An inclusive 7-day date range, both bounds zero-padded `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: String,
    pub end: String,
}

/// Resolve the counting window for a normalized question.
///
/// An explicit `D[/-]M[/-]YYYY` token anchors the window at that day;
/// otherwise the window starts on the most recent Monday (today included
/// when today is Monday). The end is always start + 6 days.
///
/// An explicit token naming an impossible date (e.g. `31/02/2024`) is a
/// malformed-date error, not a silent fallback to the current week.
pub fn week_window(normalized: &str, today: NaiveDate) -> Result<WeekWindow, AssistantError> {
    let start = match extract::date_token(normalized) {
        Some(token) => NaiveDate::from_ymd_opt(token.year, token.month, token.day).ok_or_else(
            || {
                AssistantError::InvalidDate(format!(
                    "{:02}/{:02}/{} no es una fecha válida",
                    token.day, token.month, token.year
                ))
            },
        )?,
        None => today - Duration::days(i64::from(today.weekday().num_days_from_monday())),
    };
    let end = start + Duration::days(6);

    Ok(WeekWindow {
        start: start.format("%Y-%m-%d").to_string(),
        end: end.format("%Y-%m-%d").to_string(),
    })
}

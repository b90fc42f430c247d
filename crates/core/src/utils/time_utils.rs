use chrono::{Datelike, NaiveDate, Utc};

use crate::constants::{DATE_FORMAT, MONTH_FORMAT};
use crate::errors::{Result, ValidationError};

/// Parses a `YYYY-MM` month key into the first day of that month.
///
/// Rejects anything that does not round-trip to the same key, so `2024-3`
/// and `2024-03-01` are both refused.
pub fn parse_month(month: &str) -> Result<NaiveDate> {
    let first_day = NaiveDate::parse_from_str(&format!("{}-01", month), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidMonth(month.to_string()))?;
    if first_day.format(MONTH_FORMAT).to_string() != month {
        return Err(ValidationError::InvalidMonth(month.to_string()).into());
    }
    Ok(first_day)
}

/// Returns the inclusive `(first_day, last_day)` range of a `YYYY-MM` month.
pub fn month_bounds(month: &str) -> Result<(NaiveDate, NaiveDate)> {
    let first_day = parse_month(month)?;
    let next_month = if first_day.month() == 12 {
        NaiveDate::from_ymd_opt(first_day.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first_day.year(), first_day.month() + 1, 1)
    };
    let last_day = next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| ValidationError::InvalidMonth(month.to_string()))?;
    Ok((first_day, last_day))
}

/// Month key of a date, e.g. `2024-03` for 2024-03-05.
pub fn month_key(date: NaiveDate) -> String {
    date.format(MONTH_FORMAT).to_string()
}

/// Month key of today (UTC).
pub fn current_month() -> String {
    month_key(Utc::now().date_naive())
}

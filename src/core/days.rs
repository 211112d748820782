//! Signed day distance between an ISO date and today

use crate::error::{common, Result};
use chrono::NaiveDate;

/// Input format accepted by [`days_from_today`]
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of days from `today` to `date` (`YYYY-MM-DD`).
///
/// Positive for future dates, negative for past ones, zero for today.
pub fn days_from_today(date: &str, today: NaiveDate) -> Result<i64> {
    let target = NaiveDate::parse_from_str(date, ISO_DATE_FORMAT)
        .map_err(|e| common::invalid_date_format(date, e))?;
    Ok((target - today).num_days())
}

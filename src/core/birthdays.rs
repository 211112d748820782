//! Upcoming-birthday filtering
//!
//! Given a list of users, finds whose birthday falls within the next week and
//! returns the date to congratulate them on. Weekend birthdays are moved to
//! the following Monday.
//!
//! The functions here are pure: "today" is always passed in by the caller.

use crate::error::{common, ErrorCode, KitError, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Format of birthday strings on input and congratulation dates on output
pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

/// Number of days ahead (inclusive) a birthday may be to get reported
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A user as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    /// Birthday as `YYYY.MM.DD`; the year is parsed but otherwise ignored
    pub birthday: String,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, birthday: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birthday: birthday.into(),
        }
    }
}

/// A user to congratulate and the (possibly shifted) date to do it on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Congratulation {
    pub name: String,
    #[serde(rename = "birthday", with = "dotted_date")]
    pub congratulation_date: NaiveDate,
}

impl Congratulation {
    /// The congratulation date rendered as `YYYY.MM.DD`
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

mod dotted_date {
    use super::BIRTHDAY_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// How far ahead of today a birthday may be and still be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    days: u32,
}

impl BirthdayWindow {
    pub fn new(days: u32) -> Self {
        Self { days }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Whether a birthday `days_ahead` days from today is inside the window
    pub fn contains(&self, days_ahead: i64) -> bool {
        (0..=i64::from(self.days)).contains(&days_ahead)
    }
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

/// Check the shape of a dynamic user list and convert it to records.
///
/// A non-array is a shape error. Every element is checked before anything
/// else happens, so a malformed record anywhere in the list is reported even
/// when an earlier record carries an unparseable date.
pub fn parse_users(value: &Value) -> Result<Vec<UserRecord>> {
    let items = value.as_array().ok_or_else(|| {
        KitError::shape_with_code(
            ErrorCode::SHAPE_NOT_A_LIST,
            "users must be a list",
            Some("a JSON array of user records".to_string()),
        )
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| record_from_value(idx, item))
        .collect()
}

fn record_from_value(idx: usize, item: &Value) -> Result<UserRecord> {
    let object = item.as_object().ok_or_else(|| {
        KitError::validation_with_code(
            ErrorCode::VALIDATION_INVALID_TYPE,
            "invalid data",
            Some(format!("users[{}]", idx)),
        )
    })?;

    let string_field = |key: &str| -> Result<String> {
        match object.get(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(KitError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_TYPE,
                "invalid data",
                Some(format!("users[{}].{}", idx, key)),
            )),
            None => Err(KitError::validation_with_code(
                ErrorCode::VALIDATION_REQUIRED_FIELD,
                "invalid data",
                Some(format!("users[{}].{}", idx, key)),
            )),
        }
    };

    Ok(UserRecord {
        name: string_field("name")?,
        birthday: string_field("birthday")?,
    })
}

/// Parse a `YYYY.MM.DD` birthday string
pub fn parse_birthday(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|e| common::invalid_date_format(raw, e))
}

/// The birthday's month and day in `year`.
///
/// Feb 29 falls back to Feb 28 when `year` is not a leap year.
fn occurrence_in(year: i32, birthday: NaiveDate) -> Result<NaiveDate> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()) {
        return Ok(date);
    }

    warn!(
        "{} does not exist in {}, using Feb 28",
        birthday.format("%m.%d"),
        year
    );
    NaiveDate::from_ymd_opt(year, 2, 28).ok_or_else(|| {
        KitError::validation_with_code(
            ErrorCode::VALIDATION_INVALID_DATA,
            "birthday cannot be placed in year",
            Some(year.to_string()),
        )
    })
}

/// The first occurrence of `birthday` on or after `today`
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
    let this_year = occurrence_in(today.year(), birthday)?;
    if this_year < today {
        occurrence_in(today.year() + 1, birthday)
    } else {
        Ok(this_year)
    }
}

/// Move a Saturday or Sunday to the following Monday
pub fn shift_weekend(date: NaiveDate) -> Result<NaiveDate> {
    let offset = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return Ok(date),
    };
    date.checked_add_days(Days::new(offset)).ok_or_else(|| {
        KitError::validation_with_code(
            ErrorCode::VALIDATION_INVALID_DATA,
            "congratulation date is out of range",
            Some(date.to_string()),
        )
    })
}

/// Users whose birthday falls within the default seven day window
pub fn filter_upcoming(users: &[UserRecord], today: NaiveDate) -> Result<Vec<Congratulation>> {
    filter_upcoming_within(users, today, BirthdayWindow::default())
}

/// Users whose birthday falls within `window` days of `today`, in input order.
///
/// The window test uses the real birthday; the weekend shift is applied after
/// and may land one or two days past the window.
pub fn filter_upcoming_within(
    users: &[UserRecord],
    today: NaiveDate,
    window: BirthdayWindow,
) -> Result<Vec<Congratulation>> {
    let mut upcoming = Vec::new();

    for user in users {
        let birthday = parse_birthday(&user.birthday)?;
        let next = next_occurrence(birthday, today)?;
        let days_ahead = (next - today).num_days();

        if !window.contains(days_ahead) {
            trace!("{}: next birthday {} is {} days away", user.name, next, days_ahead);
            continue;
        }

        let congratulation_date = shift_weekend(next)?;
        if congratulation_date != next {
            debug!(
                "{}: birthday {} falls on {}, congratulating on {}",
                user.name,
                next,
                next.weekday(),
                congratulation_date
            );
        }

        upcoming.push(Congratulation {
            name: user.name.clone(),
            congratulation_date,
        });
    }

    debug!(
        "{} of {} users have a birthday within {} days of {}",
        upcoming.len(),
        users.len(),
        window.days(),
        today
    );
    Ok(upcoming)
}

/// Validate a dynamic user list and filter it in one call
pub fn filter_upcoming_json(
    users: &Value,
    today: NaiveDate,
    window: BirthdayWindow,
) -> Result<Vec<Congratulation>> {
    let records = parse_users(users)?;
    filter_upcoming_within(&records, today, window)
}

/// Demo list used by `bdkit birthdays --sample`
pub fn sample_users() -> Vec<UserRecord> {
    [
        ("Jisoo", "1985.10.10"),
        ("Lisa", "1990.01.27"),
        ("Rose", "1990.05.14"),
        ("Jennie", "1990.02.27"),
        ("Yeji", "1990.09.27"),
        ("Ryujin", "1991.10.07"),
        ("Lia", "1990.10.08"),
        ("Yuna", "1990.10.11"),
    ]
    .into_iter()
    .map(|(name, birthday)| UserRecord::new(name, birthday))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(result: &[Congratulation]) -> Vec<&str> {
        result.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_today_counts_as_upcoming() {
        let users = vec![UserRecord::new("Lia", "1990.10.08")];
        let result = filter_upcoming(&users, date(2025, 10, 8)).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].congratulation_date, date(2025, 10, 8));
    }

    #[test]
    fn test_saturday_moves_to_monday() {
        let users = vec![UserRecord::new("Yuna", "1990.10.11")];
        let result = filter_upcoming(&users, date(2025, 10, 8)).unwrap();
        assert_eq!(result[0].formatted_date(), "2025.10.13");
    }

    #[test]
    fn test_sunday_moves_to_monday() {
        let users = vec![UserRecord::new("Sam", "2001.10.12")];
        let result = filter_upcoming(&users, date(2025, 10, 8)).unwrap();
        assert_eq!(result[0].congratulation_date, date(2025, 10, 13));
    }

    #[test]
    fn test_exactly_seven_days_is_included() {
        let users = vec![UserRecord::new("Wed", "1999.10.15")];
        let result = filter_upcoming(&users, date(2025, 10, 8)).unwrap();
        assert_eq!(result[0].congratulation_date, date(2025, 10, 15));
    }

    #[test]
    fn test_eight_days_is_excluded() {
        let users = vec![UserRecord::new("Thu", "1999.10.16")];
        assert!(filter_upcoming(&users, date(2025, 10, 8)).unwrap().is_empty());
    }

    #[test]
    fn test_shift_can_leave_window() {
        // 2025-10-12 is a Sunday seven days after 2025-10-05
        let users = vec![UserRecord::new("Late", "1990.10.12")];
        let result = filter_upcoming(&users, date(2025, 10, 5)).unwrap();
        assert_eq!(result[0].congratulation_date, date(2025, 10, 13));
        assert_eq!((result[0].congratulation_date - date(2025, 10, 5)).num_days(), 8);
    }

    #[test]
    fn test_passed_birthday_rolls_to_next_year() {
        let users = vec![UserRecord::new("Ryujin", "1991.10.07")];
        assert!(filter_upcoming(&users, date(2025, 10, 8)).unwrap().is_empty());
        assert_eq!(
            next_occurrence(date(1991, 10, 7), date(2025, 10, 8)).unwrap(),
            date(2026, 10, 7)
        );
    }

    #[test]
    fn test_year_end_wraps_and_shifts() {
        // 2026-01-03 is a Saturday
        let users = vec![UserRecord::new("NewYear", "1980.01.03")];
        let result = filter_upcoming(&users, date(2025, 12, 31)).unwrap();
        assert_eq!(result[0].congratulation_date, date(2026, 1, 5));
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        // 2026-02-28 is a Saturday
        let users = vec![UserRecord::new("Leap", "2000.02.29")];
        let result = filter_upcoming(&users, date(2026, 2, 25)).unwrap();
        assert_eq!(result[0].congratulation_date, date(2026, 3, 2));
    }

    #[test]
    fn test_leap_day_kept_in_leap_year() {
        assert_eq!(
            next_occurrence(date(2000, 2, 29), date(2028, 2, 20)).unwrap(),
            date(2028, 2, 29)
        );
    }

    #[test]
    fn test_leap_day_after_clamped_date_uses_next_year() {
        assert_eq!(
            next_occurrence(date(2000, 2, 29), date(2026, 3, 1)).unwrap(),
            date(2027, 2, 28)
        );
    }

    #[test]
    fn test_sample_list_against_fixed_day() {
        let result = filter_upcoming(&sample_users(), date(2025, 10, 8)).unwrap();
        assert_eq!(names(&result), vec!["Jisoo", "Lia", "Yuna"]);
        let dates: Vec<String> = result.iter().map(|c| c.formatted_date()).collect();
        assert_eq!(dates, vec!["2025.10.10", "2025.10.08", "2025.10.13"]);
    }

    #[test]
    fn test_invalid_date_aborts_whole_call() {
        let users = vec![
            UserRecord::new("Ok", "1990.10.09"),
            UserRecord::new("Bad", "2025.13.45"),
        ];
        let err = filter_upcoming(&users, date(2025, 10, 8)).unwrap_err();
        assert!(matches!(err, KitError::Validation { .. }));
        assert_eq!(err.code(), ErrorCode::VALIDATION_INVALID_FORMAT);
        assert_eq!(err.user_message(), "invalid date format at '2025.13.45'");
    }

    #[test]
    fn test_wrong_separator_is_rejected() {
        assert!(parse_birthday("1990-10-08").is_err());
        assert!(parse_birthday("cc").is_err());
    }

    #[test]
    fn test_custom_window() {
        let users = vec![
            UserRecord::new("Tomorrow", "1990.10.09"),
            UserRecord::new("Friday", "1990.10.10"),
        ];
        let result = filter_upcoming_within(&users, date(2025, 10, 8), BirthdayWindow::new(1)).unwrap();
        assert_eq!(names(&result), vec!["Tomorrow"]);
    }

    #[test]
    fn test_parse_users_rejects_non_list() {
        let err = parse_users(&json!(2)).unwrap_err();
        assert!(matches!(err, KitError::Shape { .. }));
        assert_eq!(
            err.user_message(),
            "users must be a list (expected a JSON array of user records)"
        );
    }

    #[test]
    fn test_parse_users_missing_birthday() {
        let err = parse_users(&json!([{"name": "Jisoo"}])).unwrap_err();
        assert!(matches!(err, KitError::Validation { .. }));
        assert_eq!(err.code(), ErrorCode::VALIDATION_REQUIRED_FIELD);
        assert_eq!(err.user_message(), "invalid data at users[0].birthday");
    }

    #[test]
    fn test_parse_users_non_string_name() {
        let err = parse_users(&json!([{"name": 3, "birthday": "1990.10.11"}])).unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_INVALID_TYPE);
    }

    #[test]
    fn test_record_shape_checked_before_dates() {
        let users = json!([
            {"name": "Bad date", "birthday": "not a date"},
            {"name": "No birthday"}
        ]);
        let err = filter_upcoming_json(&users, date(2025, 10, 8), BirthdayWindow::default())
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::VALIDATION_REQUIRED_FIELD);
    }

    #[test]
    fn test_congratulation_serializes_with_dotted_date() {
        let c = Congratulation {
            name: "Lia".to_string(),
            congratulation_date: date(2025, 10, 8),
        };
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value, json!({"name": "Lia", "birthday": "2025.10.08"}));
    }

    #[test]
    fn test_shift_weekend_keeps_weekdays() {
        assert_eq!(shift_weekend(date(2025, 10, 10)).unwrap(), date(2025, 10, 10));
        assert_eq!(shift_weekend(date(2025, 10, 11)).unwrap(), date(2025, 10, 13));
        assert_eq!(shift_weekend(date(2025, 10, 12)).unwrap(), date(2025, 10, 13));
    }

    #[test]
    fn test_shift_weekend_at_end_of_calendar() {
        let last_weekend_day = (0..7)
            .filter_map(|back| NaiveDate::MAX.checked_sub_days(Days::new(back)))
            .find(|d| matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .unwrap();
        match last_weekend_day.checked_add_days(Days::new(
            if last_weekend_day.weekday() == Weekday::Sat { 2 } else { 1 },
        )) {
            Some(monday) => assert_eq!(shift_weekend(last_weekend_day).unwrap(), monday),
            None => assert!(shift_weekend(last_weekend_day).is_err()),
        }
    }

    #[test]
    fn test_window_contains() {
        let window = BirthdayWindow::default();
        assert!(window.contains(0));
        assert!(window.contains(7));
        assert!(!window.contains(8));
        assert!(!window.contains(-1));
    }
}

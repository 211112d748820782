//! Command implementation modules
//!
//! Each command writes its results to the given writer so it can be
//! exercised without a terminal.

pub mod birthdays;
pub mod days;
pub mod phone;
pub mod ticket;

pub use birthdays::{run_birthdays_command, BirthdaysParams};
pub use days::run_days_command;
pub use phone::run_phone_command;
pub use ticket::run_ticket_command;

use chrono::NaiveDate;

/// The given date, or the local calendar date when none was supplied
pub(crate) fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}

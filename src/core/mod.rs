//! Core logic with pure functions
//!
//! Nothing here reads the clock, the environment or the file system. The
//! caller passes in "today", the random number generator and any settings,
//! which keeps every function deterministic under test.

pub mod birthdays;
pub mod days;
pub mod phone;
pub mod tickets;

pub use birthdays::{
    filter_upcoming, filter_upcoming_json, filter_upcoming_within, parse_users, BirthdayWindow,
    Congratulation, UserRecord,
};
pub use days::days_from_today;
pub use phone::{normalize_phone, normalize_phone_with};
pub use tickets::{draw_ticket, get_numbers_ticket, TicketLimits};

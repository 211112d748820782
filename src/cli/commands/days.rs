//! `bdkit days` implementation

use anyhow::Result;
use chrono::NaiveDate;
use std::io::Write;

use super::today_or_local;
use crate::core::days::days_from_today;

/// Execute the days command
pub fn run_days_command(date: &str, today: Option<NaiveDate>, out: &mut dyn Write) -> Result<()> {
    let days = days_from_today(date, today_or_local(today))?;
    writeln!(out, "{}", days)?;
    Ok(())
}

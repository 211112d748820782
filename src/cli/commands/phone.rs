//! `bdkit phone` implementation

use anyhow::Result;
use std::io::Write;

use crate::config::KitConfig;
use crate::core::phone::normalize_phone_with;

/// Execute the phone command
pub fn run_phone_command(numbers: &[String], config: &KitConfig, out: &mut dyn Write) -> Result<()> {
    for number in numbers {
        writeln!(out, "{}", normalize_phone_with(number, config.country_code()))?;
    }
    Ok(())
}

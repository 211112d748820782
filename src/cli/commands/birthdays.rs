//! `bdkit birthdays` implementation

use anyhow::Result;
use serde_json::Value;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::today_or_local;
use crate::config::KitConfig;
use crate::core::birthdays::{self, Congratulation};
use crate::error::{common, ErrorCode, KitError};

/// Arguments for the birthdays command
#[derive(Debug, Clone, Default)]
pub struct BirthdaysParams {
    pub file: Option<PathBuf>,
    pub today: Option<chrono::NaiveDate>,
    pub json: bool,
    pub sample: bool,
}

/// Execute the birthdays command
pub fn run_birthdays_command(
    params: BirthdaysParams,
    config: &KitConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let today = today_or_local(params.today);
    debug!("Checking birthdays relative to {}", today);

    let upcoming = if params.sample {
        info!("Using the built-in sample user list");
        birthdays::filter_upcoming_within(&birthdays::sample_users(), today, config.window())?
    } else {
        let input = read_input(params.file.as_deref())?;
        let users = parse_json(&input)?;
        birthdays::filter_upcoming_json(&users, today, config.window())?
    };

    write_results(&upcoming, params.json, out)
}

fn read_input(file: Option<&Path>) -> Result<String, KitError> {
    match file {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|e| common::input_read_failed(path, e))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| common::input_read_failed("<stdin>", e))?;
            Ok(buf)
        }
    }
}

fn parse_json(input: &str) -> Result<Value, KitError> {
    serde_json::from_str(input).map_err(|e| {
        KitError::shape_with_code(
            ErrorCode::SHAPE_INVALID_JSON,
            format!("users must be a list: {}", e),
            Some("a JSON array of user records".to_string()),
        )
    })
}

fn write_results(upcoming: &[Congratulation], json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(upcoming)?)?;
    } else if upcoming.is_empty() {
        writeln!(out, "No upcoming birthdays")?;
    } else {
        for entry in upcoming {
            writeln!(out, "{}: {}", entry.name, entry.formatted_date())?;
        }
    }
    Ok(())
}

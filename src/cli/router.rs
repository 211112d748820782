//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::cli::args::Commands;
use crate::cli::commands::*;
use crate::cli::help::generate_help;
use crate::config::KitConfig;
use anyhow::Result;
use std::io::Write;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(
    command: Option<Commands>,
    config: &KitConfig,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Some(Commands::Birthdays {
            file,
            today,
            json,
            sample,
        }) => run_birthdays_command(
            BirthdaysParams {
                file,
                today,
                json,
                sample,
            },
            config,
            out,
        ),
        Some(Commands::Days { date, today }) => run_days_command(&date, today, out),
        Some(Commands::Ticket {
            min,
            max,
            quantity,
            seed,
        }) => run_ticket_command(min, max, quantity, seed, config, out),
        Some(Commands::Phone { numbers }) => run_phone_command(&numbers, config, out),
        None => {
            write!(out, "{}", generate_help())?;
            Ok(())
        }
    }
}

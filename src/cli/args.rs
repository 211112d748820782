//! CLI argument structures
//!
//! This module defines the command-line interface of `bdkit`.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Birthday reminders and small everyday utilities
#[derive(Parser)]
#[command(name = "bdkit")]
#[command(about = "bdkit - Upcoming birthdays, day counts, ticket draws and phone numbers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users whose birthday is within the next week
    Birthdays {
        /// JSON file with a list of {"name", "birthday": "YYYY.MM.DD"} records ("-" for stdin)
        #[arg(value_name = "FILE", conflicts_with = "sample")]
        file: Option<PathBuf>,

        /// Date to treat as today (YYYY-MM-DD, defaults to the local date)
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,

        /// Use the built-in sample user list
        #[arg(long)]
        sample: bool,
    },

    /// Count days from today to a date
    Days {
        /// Target date (YYYY-MM-DD)
        date: String,

        /// Date to treat as today (YYYY-MM-DD, defaults to the local date)
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,
    },

    /// Draw sorted unique random numbers from a range
    #[command(allow_negative_numbers = true)]
    Ticket {
        /// Smallest number that may be drawn
        min: i64,

        /// Largest number that may be drawn
        max: i64,

        /// How many numbers to draw
        quantity: i64,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Normalize phone numbers to international format
    Phone {
        /// Phone numbers to normalize
        #[arg(required = true, value_name = "NUMBER")]
        numbers: Vec<String>,
    },
}

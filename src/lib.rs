//! # birthday-kit
//!
//! Upcoming-birthday filtering plus a few small date, number and phone
//! utilities, usable as a library or through the `bdkit` CLI.
//!
//! ## Usage
//!
//! ```bash
//! bdkit birthdays users.json [--today 2025-10-08] [--json]
//! bdkit days 2025-12-25
//! bdkit ticket 1 49 6
//! bdkit phone "+38(050)123-32-34"
//! ```
//!
//! ## Modules
//!
//! - `core` - Pure functions: birthdays, day differences, ticket draws, phone numbers
//! - `config` - TOML configuration with environment overrides
//! - `cli` - Argument parsing and command handlers for the `bdkit` binary
//! - `error` - Unified error type with numeric error codes
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use error::{KitError, Result};

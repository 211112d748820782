//! Configuration for bdkit
//!
//! Settings come from a TOML file (see [`loader`]) with environment variable
//! overrides applied on top. Every field has a default, so running without a
//! config file behaves exactly like the built-in constants.

use crate::core::birthdays::{BirthdayWindow, DEFAULT_WINDOW_DAYS};
use crate::core::phone::DEFAULT_COUNTRY_CODE;
use crate::core::tickets::TicketLimits;
use crate::error::{ErrorCode, KitError, Result};
use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::{default_config_path, load, load_from_path};

/// Environment variable overriding `birthdays.window_days`
pub const ENV_WINDOW_DAYS: &str = "BDKIT_WINDOW_DAYS";
/// Environment variable overriding `phone.country_code`
pub const ENV_COUNTRY_CODE: &str = "BDKIT_COUNTRY_CODE";

/// Longest birthday window accepted from configuration
const MAX_WINDOW_DAYS: u32 = 366;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KitConfig {
    pub birthdays: BirthdayConfig,
    pub tickets: TicketLimits,
    pub phone: PhoneConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthdayConfig {
    pub window_days: u32,
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    pub country_code: String,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
        }
    }
}

impl KitConfig {
    pub fn window(&self) -> BirthdayWindow {
        BirthdayWindow::new(self.birthdays.window_days)
    }

    pub fn country_code(&self) -> &str {
        &self.phone.country_code
    }

    /// Apply overrides from the process environment
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_WINDOW_DAYS) {
            self.birthdays.window_days = raw.trim().parse().map_err(|e| {
                KitError::config_with_code(
                    ErrorCode::CONFIG_ENV_OVERRIDE,
                    format!("{} must be a non-negative integer, got '{}'", ENV_WINDOW_DAYS, raw),
                )
                .with_source(e)
            })?;
        }

        if let Some(code) = lookup(ENV_COUNTRY_CODE) {
            self.phone.country_code = code.trim().to_string();
        }

        Ok(())
    }

    /// Check value ranges after all sources have been merged
    pub fn validate(&self) -> Result<()> {
        if self.birthdays.window_days > MAX_WINDOW_DAYS {
            return Err(KitError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!(
                    "birthdays.window_days must be at most {}, got {}",
                    MAX_WINDOW_DAYS, self.birthdays.window_days
                ),
            ));
        }

        let limits = &self.tickets;
        if limits.min_bound < 1 || limits.min_bound > limits.max_bound {
            return Err(KitError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!(
                    "tickets bounds must satisfy 1 <= min_bound <= max_bound, got {}..={}",
                    limits.min_bound, limits.max_bound
                ),
            ));
        }

        let code = &self.phone.country_code;
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(KitError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("phone.country_code must be digits only, got '{}'", code),
            ));
        }

        Ok(())
    }
}

use super::{ErrorCode, KitError};
use std::path::Path;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to a KitError configuration error, keeping the original as source
    fn to_config_error(self, message: impl Into<String>) -> Result<T, KitError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_config_error(self, message: impl Into<String>) -> Result<T, KitError> {
        self.map_err(|e| KitError::config(message).with_source(e))
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<Path>) -> KitError {
        KitError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
    }

    /// Create an error for an unreadable input file
    pub fn input_read_failed(path: impl AsRef<Path>, source: std::io::Error) -> KitError {
        let code = if source.kind() == std::io::ErrorKind::NotFound {
            ErrorCode::IO_NOT_FOUND
        } else {
            ErrorCode::IO_READ_FAILED
        };
        KitError::io_with_code(
            code,
            "Failed to read input",
            Some(path.as_ref().to_path_buf()),
        )
        .with_source(source)
    }

    /// Create the error raised when a date string does not parse
    pub fn invalid_date_format(value: &str, source: chrono::ParseError) -> KitError {
        KitError::validation_with_code(
            ErrorCode::VALIDATION_INVALID_FORMAT,
            "invalid date format",
            Some(format!("'{}'", value)),
        )
        .with_source(source)
    }
}

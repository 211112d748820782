use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

pub use codes::ErrorCode;
pub use helpers::{common, ErrorExt};

/// The unified error type for birthday-kit
#[derive(Error, Debug)]
pub enum KitError {
    /// The input had the wrong overall shape (for example, not a list)
    #[error("[E{code:04}] Shape error: {message}")]
    Shape {
        code: u16,
        message: String,
        expected: Option<String>,
    },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] IO error: {message}")]
    Io {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl KitError {
    /// Create a shape error with specific code and the expected shape
    pub fn shape_with_code(
        code: u16,
        message: impl Into<String>,
        expected: Option<String>,
    ) -> Self {
        Self::Shape {
            code,
            message: message.into(),
            expected,
        }
    }

    /// Create a validation error with specific code and field
    pub fn validation_with_code(
        code: u16,
        message: impl Into<String>,
        field: Option<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an IO error with specific code and path
    pub fn io_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Add a source error to this error
    ///
    /// Shape errors never wrap another error, so the source is dropped for them.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Validation { source: src, .. }
            | Self::Config { source: src, .. }
            | Self::Io { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::Shape { .. } => {}
        }
        self
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 4,
            Self::Shape { .. } | Self::Validation { .. } => 8,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Shape { code, .. }
            | Self::Validation { code, .. }
            | Self::Config { code, .. }
            | Self::Io { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Shape {
                message, expected, ..
            } => {
                if let Some(e) = expected {
                    format!("{} (expected {})", message, e)
                } else {
                    message.clone()
                }
            }
            Self::Validation { message, field, .. } => {
                if let Some(f) = field {
                    format!("{} at {}", message, f)
                } else {
                    message.clone()
                }
            }
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Io { message, path, .. } => {
                if let Some(p) = path {
                    format!("{}: {}", message, p.display())
                } else {
                    message.clone()
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KitError>;

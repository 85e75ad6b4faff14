//! Error types for extension loading

use crate::status::StatusCode;
use thiserror::Error;

/// Extension error types
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// The host refused to install a function.
    #[error("Failed to register {name}/{arity}: {message} ({status})")]
    Registration {
        /// Function name
        name: String,
        /// Declared argument count
        arity: i32,
        /// Host result code
        status: StatusCode,
        /// Host-provided detail
        message: String,
    },
    /// No function with this name and arity is installed.
    #[error("No such function: {name}/{arity}")]
    UnknownFunction {
        /// Function name
        name: String,
        /// Argument count used in the call
        arity: usize,
    },
    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtensionError {
    /// Result code reported to the loader for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ExtensionError::Registration { status, .. } => *status,
            ExtensionError::UnknownFunction { .. } => StatusCode::ERROR,
            ExtensionError::Config(_) => StatusCode::MISUSE,
            ExtensionError::Io(_) => StatusCode::ERROR,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ExtensionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_status() {
        let err = ExtensionError::Registration {
            name: "crc32".to_string(),
            arity: 1,
            status: StatusCode::BUSY,
            message: "database is locked".to_string(),
        };
        assert_eq!(err.status(), StatusCode::BUSY);
        assert_eq!(
            err.to_string(),
            "Failed to register crc32/1: database is locked (BUSY)"
        );
    }

    #[test]
    fn test_unknown_function_status() {
        let err = ExtensionError::UnknownFunction {
            name: "md5".to_string(),
            arity: 1,
        };
        assert_eq!(err.status(), StatusCode::ERROR);
    }
}

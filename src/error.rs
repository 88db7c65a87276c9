//! Error types for Belay operations.
//!
//! This module defines [`BelayError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BelayError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `BelayError::Other`) for unexpected errors
//! - An unusable native module is NOT an error: it is the condition the guard
//!   exists to remediate, and it flows through
//!   [`GuardOutcome`](crate::guard::GuardOutcome) instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Belay operations.
#[derive(Debug, Error)]
pub enum BelayError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Failed to read the expected version out of a project manifest.
    #[error("Failed to read version from manifest {path}: {message}")]
    ManifestError { path: PathBuf, message: String },

    /// The build command could not be spawned at all.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The build command ran but exited non-zero (strict mode only).
    #[error("Build command exited with code {code:?}: {command}")]
    BuildFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Belay operations.
pub type Result<T> = std::result::Result<T, BelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = BelayError::ConfigNotFound {
            path: PathBuf::from("/foo/belay.yml"),
        };
        assert!(err.to_string().contains("/foo/belay.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = BelayError::ConfigParseError {
            path: PathBuf::from("/belay.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/belay.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = BelayError::ConfigValidationError {
            message: "build.command must not be empty".into(),
        };
        assert!(err.to_string().contains("build.command must not be empty"));
    }

    #[test]
    fn manifest_error_displays_path_and_message() {
        let err = BelayError::ManifestError {
            path: PathBuf::from("package.json"),
            message: "key 'version' not found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("package.json"));
        assert!(msg.contains("key 'version' not found"));
    }

    #[test]
    fn command_failed_displays_command() {
        let err = BelayError::CommandFailed {
            command: "npm run build".into(),
            code: None,
        };
        assert!(err.to_string().contains("npm run build"));
    }

    #[test]
    fn build_failed_displays_command_and_code() {
        let err = BelayError::BuildFailed {
            command: "npm run build".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm run build"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BelayError = io_err.into();
        assert!(matches!(err, BelayError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(BelayError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}

//! Typed errors for guardian-tools operations.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for guardian-tools operations.
#[derive(Error, Debug)]
pub enum GuardianError {
    #[error("✗ Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Invalid version format: {0}")]
    InvalidVersion(String),

    #[error("Unknown increment type: {0}")]
    UnknownIncrement(String),

    #[error("Command `{program}` failed with exit code {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Expected output file was not created: {}", .0.display())]
    MissingArtifact(PathBuf),
}

impl GuardianError {
    /// Create an invalid version error.
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion(version.into())
    }

    /// Create a command failure error from a finished process.
    pub fn command_failed(
        program: impl Into<String>,
        code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            program: program.into(),
            code,
            stderr: stderr.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats() {
        let err = GuardianError::invalid_version("1.2");
        assert_eq!(err.to_string(), "Invalid version format: 1.2");

        let err = GuardianError::command_failed("vsce", 2, "boom");
        assert_eq!(
            err.to_string(),
            "Command `vsce` failed with exit code 2: boom"
        );
    }

    #[test]
    fn error_helpers() {
        let err = GuardianError::invalid_version("abc");
        assert!(matches!(err, GuardianError::InvalidVersion(_)));

        let err = GuardianError::command_failed("git", 128, "fatal");
        assert!(matches!(err, GuardianError::CommandFailed { .. }));
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit range validation.
//!
//! Everything in here is fatal: a value of [`QaError`] means the run stopped
//! before a report existed. Non-conforming commit messages are never errors,
//! they are recorded in the report instead.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for validation runs.
#[derive(Error, Debug)]
pub enum QaError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Range resolution errors
    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    // Rule engine errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Report output errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Failed to serialize configuration: {message}")]
    SerializeError { message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("No merge base between {left} and {right}: {message}")]
    NoMergeBase {
        left: String,
        right: String,
        message: String,
    },

    #[error("Commit {reference} has no parent")]
    NoParent { reference: String },

    #[error("No root commit reachable from {reference}")]
    NoRootCommit { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Range resolution errors.
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("Could not resolve the start of the commit range; tried: {}", attempts.join("; "))]
    Unresolved { attempts: Vec<String> },
}

/// Errors raised by a rule engine while evaluating a single message.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidIgnorePattern { pattern: String, message: String },

    #[error("Rule '{rule}' failed: {message}")]
    RuleFailed { rule: String, message: String },
}

/// Report output errors.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize report: {message}")]
    SerializeFailed { message: String },

    #[error("Failed to write report to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    #[error("Failed to append CI output to {path}: {message}")]
    OutputFailed { path: PathBuf, message: String },
}

/// Result type alias for validation runs.
pub type Result<T> = std::result::Result<T, QaError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| QaError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/commitlint.toml"),
        };
        assert!(err.to_string().contains("/path/to/commitlint.toml"));
    }

    #[test]
    fn test_range_error_lists_attempts() {
        let err = RangeError::Unresolved {
            attempts: vec![
                "merge-base with origin/main: not found".to_string(),
                "HEAD~1: no parent".to_string(),
            ],
        };
        let text = err.to_string();
        assert!(text.contains("merge-base with origin/main"));
        assert!(text.contains("HEAD~1: no parent"));
    }

    #[test]
    fn test_qa_error_from_git_error() {
        let err: QaError = GitError::NotARepository.into();
        assert_eq!(err.to_string(), "Git error: Not a git repository");
    }

    #[test]
    fn test_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.context("write report").unwrap_err();
        assert_eq!(err.to_string(), "write report: denied");
    }
}

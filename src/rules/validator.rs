// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use serde::{Deserialize, Serialize};

use crate::commit::CommitRecord;
use crate::config::Severity;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Name of the rule that produced the issue.
    pub rule: String,
    /// Human-readable message.
    pub message: String,
    /// Error or warning.
    pub severity: Severity,
}

impl ValidationIssue {
    /// Create a new issue.
    pub fn new(rule: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            severity,
        }
    }

    /// Whether this issue invalidates the message.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// What a rule engine says about one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Whether the message conforms.
    pub valid: bool,
    /// Error messages, in rule order.
    pub errors: Vec<String>,
    /// Warning messages, in rule order.
    pub warnings: Vec<String>,
}

impl ValidationOutcome {
    /// A conforming message with nothing to report.
    pub fn pass() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Split issues into errors and warnings. Disabled issues are dropped.
    pub fn from_issues(issues: impl IntoIterator<Item = ValidationIssue>) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for issue in issues {
            match issue.severity {
                Severity::Error => errors.push(issue.message),
                Severity::Warning => warnings.push(issue.message),
                Severity::Off => {}
            }
        }

        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// The verdict for one commit, carrying the commit's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Full commit id.
    pub sha: String,
    /// Abbreviated commit id.
    #[serde(rename = "shortSha")]
    pub short_sha: String,
    /// The message that was validated.
    pub message: String,
    /// Whether the message conforms.
    pub valid: bool,
    /// Validation errors.
    pub errors: Vec<String>,
    /// Validation warnings.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Attach an engine outcome to the commit it was computed for.
    pub fn new(commit: &CommitRecord, outcome: ValidationOutcome) -> Self {
        Self {
            sha: commit.sha().to_string(),
            short_sha: commit.short_sha().to_string(),
            message: commit.message().to_string(),
            valid: outcome.valid,
            errors: outcome.errors,
            warnings: outcome.warnings,
        }
    }

    /// First line of the message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

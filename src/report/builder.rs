// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Aggregate report construction.

use serde::{Deserialize, Serialize};

use crate::pipeline::Range;
use crate::rules::ValidationResult;

/// The outcome of a whole validation run.
///
/// Only [`Report::build`] creates one, so the counts always agree with
/// `results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    commits_valid: bool,
    total_count: usize,
    invalid_count: usize,
    range: Range,
    results: Vec<ValidationResult>,
}

impl Report {
    /// Build the report. Zero results is a valid, vacuous report.
    pub fn build(range: Range, results: Vec<ValidationResult>) -> Self {
        let invalid_count = results.iter().filter(|r| !r.valid).count();

        Self {
            commits_valid: invalid_count == 0,
            total_count: results.len(),
            invalid_count,
            range,
            results,
        }
    }

    pub fn commits_valid(&self) -> bool {
        self.commits_valid
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_count
    }

    pub fn range(&self) -> &Range {
        &self.range
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// One-line summary for the terminal.
    pub fn summary(&self) -> String {
        if self.total_count == 0 {
            "No commits to validate.".to_string()
        } else if self.commits_valid {
            format!("All {} commit(s) are valid.", self.total_count)
        } else {
            format!(
                "{} of {} commit(s) are invalid.",
                self.invalid_count, self.total_count
            )
        }
    }
}

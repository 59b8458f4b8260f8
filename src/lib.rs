// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! QA Commits - commit range validation for CI
//!
//! Resolves a range of commits, checks every message against the
//! conventional commit grammar and writes a machine-readable report.
//!
//! # Features
//!
//! - **Range Resolution**: Explicit bounds or a merge-base / parent / root fallback chain
//! - **Rule Engine**: Configurable commitlint-style rules behind a [`rules::RuleEngine`] trait
//! - **Reports**: Pretty-printed JSON report plus GitHub step outputs
//! - **Annotations**: Optional workflow annotations for invalid commits
//!
//! # Example
//!
//! ```no_run
//! use qa_commits::config::{LintConfig, Settings};
//! use qa_commits::git::Repository;
//! use qa_commits::pipeline;
//! use qa_commits::rules::ConventionalEngine;
//!
//! let repo = Repository::open_current().unwrap();
//! let report = pipeline::run(
//!     &Settings::default(),
//!     &repo,
//!     &ConventionalEngine::new(),
//!     &LintConfig::load().unwrap(),
//!     Vec::new(),
//! )
//! .unwrap();
//!
//! println!("{}", report.summary());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod observe;
pub mod pipeline;
pub mod report;
pub mod rules;

// Re-exports for convenience
pub use config::{LintConfig, Settings};
pub use error::{QaError, Result};
pub use report::Report;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of validate-commits.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Runtime settings for a validation run.
//!
//! Built once at the process boundary (see `cli`) and passed down by
//! reference. Nothing below the CLI layer reads the environment.

use std::path::PathBuf;

/// Default integration branch used for merge-base resolution.
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Default remote the base branch lives on.
pub const DEFAULT_REMOTE: &str = "origin";

/// File name of the persisted report.
pub const REPORT_FILE_NAME: &str = "qa-validate-commits-output.json";

/// Everything a run needs to know about its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Explicit start of the range (exclusive).
    pub from: Option<String>,
    /// Explicit end of the range (inclusive).
    pub to: Option<String>,
    /// Integration branch to compute the merge-base against.
    pub base_branch: String,
    /// Remote holding the integration branch.
    pub remote: String,
    /// Directory the JSON report is written to.
    pub output_dir: PathBuf,
    /// CI output file to append key/value blocks to.
    pub github_output: Option<PathBuf>,
    /// Emit CI annotations for invalid commits.
    pub annotations: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            output_dir: std::env::temp_dir(),
            github_output: None,
            annotations: false,
        }
    }
}

impl Settings {
    /// Where the JSON report ends up.
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.base_branch, "main");
        assert_eq!(settings.remote, "origin");
        assert!(settings.from.is_none());
        assert!(settings.github_output.is_none());
    }

    #[test]
    fn test_report_path() {
        let settings = Settings {
            output_dir: PathBuf::from("/tmp/qa"),
            ..Settings::default()
        };
        assert_eq!(
            settings.report_path(),
            PathBuf::from("/tmp/qa/qa-validate-commits-output.json")
        );
    }
}

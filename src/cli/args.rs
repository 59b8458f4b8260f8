// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{Settings, DEFAULT_BASE_BRANCH, DEFAULT_REMOTE};

/// Validate the commit messages of a range against the conventional commit grammar.
///
/// Always exits 0 once the report is written, whatever the verdict; the
/// caller decides what to enforce. Exits 1 only when no report could be
/// produced.
#[derive(Parser, Debug)]
#[command(name = "validate-commits")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate a range of commit messages", long_about = None)]
pub struct Cli {
    /// Start of the range, exclusive [default: merge-base with the base branch]
    #[arg(value_name = "FROM_SHA")]
    pub from: Option<String>,

    /// End of the range, inclusive [default: HEAD]
    #[arg(value_name = "TO_SHA")]
    pub to: Option<String>,

    /// Integration branch used to find the merge-base
    #[arg(long, env = "BASE_BRANCH", default_value = DEFAULT_BASE_BRANCH)]
    pub base_branch: String,

    /// Remote the base branch is fetched from
    #[arg(long, env = "BASE_REMOTE", default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Directory for the JSON report [default: system temp dir]
    #[arg(long, env = "QA_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// File to append GitHub step outputs to
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Emit GitHub workflow annotations for invalid commits
    #[arg(long, env = "GITHUB_ACTIONS", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub annotations: bool,

    /// Enable debug logging
    #[arg(short, long, env = "DEBUG", action = ArgAction::SetTrue, value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Path to a commitlint.toml rule configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the effective rule configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Freeze arguments and environment into run settings.
    ///
    /// Empty values count as unset. A relative output directory is resolved
    /// against the working directory.
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        let non_empty_path = |p: &Option<PathBuf>| {
            p.as_ref()
                .filter(|p| !p.as_os_str().is_empty())
                .cloned()
        };
        let non_empty = |s: &Option<String>| s.as_ref().filter(|s| !s.is_empty()).cloned();

        Settings {
            from: non_empty(&self.from),
            to: non_empty(&self.to),
            base_branch: if self.base_branch.is_empty() {
                defaults.base_branch
            } else {
                self.base_branch.clone()
            },
            remote: self.remote.clone(),
            output_dir: absolute(
                non_empty_path(&self.output_dir).unwrap_or(defaults.output_dir),
            ),
            github_output: non_empty_path(&self.github_output),
            annotations: self.annotations,
        }
    }
}

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(e) => {
            tracing::warn!("Could not read working directory: {}", e);
            path
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_range() {
        let cli = Cli::try_parse_from(["validate-commits", "abc123", "def456"]).unwrap();
        assert_eq!(cli.from.as_deref(), Some("abc123"));
        assert_eq!(cli.to.as_deref(), Some("def456"));

        let settings = cli.settings();
        assert_eq!(settings.from.as_deref(), Some("abc123"));
        assert_eq!(settings.to.as_deref(), Some("def456"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "validate-commits",
            "--base-branch",
            "develop",
            "--remote",
            "upstream",
            "--output-dir",
            "/tmp/qa",
            "--github-output",
            "/tmp/gh",
            "--annotations",
        ])
        .unwrap();

        let settings = cli.settings();
        assert!(settings.from.is_none());
        assert_eq!(settings.base_branch, "develop");
        assert_eq!(settings.remote, "upstream");
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/qa"));
        assert_eq!(settings.github_output, Some(PathBuf::from("/tmp/gh")));
        assert!(settings.annotations);
    }

    #[test]
    fn test_relative_output_dir_is_made_absolute() {
        let cli = Cli::try_parse_from(["validate-commits", "--output-dir", "reports"]).unwrap();

        let settings = cli.settings();
        assert!(settings.output_dir.is_absolute());
        assert_eq!(
            settings.output_dir,
            std::env::current_dir().unwrap().join("reports")
        );
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let cli = Cli::try_parse_from([
            "validate-commits",
            "--base-branch",
            "",
            "--output-dir",
            "",
            "--github-output",
            "",
        ])
        .unwrap();

        let settings = cli.settings();
        assert_eq!(settings.base_branch, "main");
        assert_eq!(settings.output_dir, std::env::temp_dir());
        assert!(settings.github_output.is_none());
    }
}

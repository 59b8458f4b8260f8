// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the rule configuration that can be loaded from commitlint.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::case::Case;

/// The rule configuration handed to the conventional rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Skip merge, revert, fixup and release commits.
    pub default_ignores: bool,

    /// Glob patterns; a message whose header matches any of them is skipped.
    pub ignores: Vec<String>,

    /// Rule configuration.
    pub rules: RulesConfig,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            default_ignores: true,
            ignores: Vec::new(),
            rules: RulesConfig::default(),
        }
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum length of the header line.
    pub header_max_length: usize,

    /// Maximum length of each body line.
    pub body_max_line_length: usize,

    /// Maximum length of each footer line.
    pub footer_max_line_length: usize,

    /// Allowed commit types.
    pub type_enum: Vec<String>,

    /// Cases the subject must not be written in.
    pub subject_case: Vec<Case>,

    /// Character the subject must not end with.
    pub subject_full_stop: String,

    /// Severity overrides keyed by rule name (e.g. "body-leading-blank").
    pub levels: BTreeMap<String, Severity>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            header_max_length: 100,
            body_max_line_length: 100,
            footer_max_line_length: 100,
            type_enum: [
                "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert",
                "style", "test",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
            subject_case: vec![
                Case::SentenceCase,
                Case::StartCase,
                Case::PascalCase,
                Case::UpperCase,
            ],
            subject_full_stop: ".".to_string(),
            levels: BTreeMap::new(),
        }
    }
}

impl RulesConfig {
    /// Effective severity for a rule, falling back to its built-in default.
    pub fn level(&self, rule: &str, default: Severity) -> Severity {
        self.levels.get(rule).copied().unwrap_or(default)
    }
}

/// How strongly a rule is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is not evaluated.
    Off,
    /// Reported, does not invalidate the message.
    Warning,
    /// Reported and invalidates the message.
    Error,
}

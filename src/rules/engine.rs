// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::LintConfig;
use crate::error::Result;

use super::builtin::{apply_builtin_rules, Rule};
use super::ignore::is_ignored;
use super::validator::ValidationOutcome;

/// Decides whether a single commit message conforms to a grammar.
///
/// Implementations must be pure: the same message and configuration always
/// give the same outcome. The configuration is opaque to callers, which only
/// pass it through.
pub trait RuleEngine {
    /// Rule configuration consumed by this engine.
    type Config;

    /// Evaluate one message.
    fn evaluate(&self, message: &str, config: &Self::Config) -> Result<ValidationOutcome>;
}

/// The conventional commit grammar.
#[derive(Debug, Default)]
pub struct ConventionalEngine {
    custom_rules: Vec<Box<dyn Rule>>,
}

impl ConventionalEngine {
    /// Create an engine with the built-in rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom rule, evaluated after the built-in ones.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.custom_rules.push(rule);
    }

    /// Register a custom rule, builder style.
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.add_rule(rule);
        self
    }
}

impl RuleEngine for ConventionalEngine {
    type Config = LintConfig;

    fn evaluate(&self, message: &str, config: &LintConfig) -> Result<ValidationOutcome> {
        if is_ignored(message, config.default_ignores, &config.ignores)? {
            tracing::debug!("Ignoring message: {:?}", message.lines().next().unwrap_or(""));
            return Ok(ValidationOutcome::pass());
        }

        let parsed = CommitMessage::parse(message);
        let mut issues = apply_builtin_rules(&parsed, &config.rules);

        for rule in &self.custom_rules {
            if let Some(issue) = rule.check(&parsed, &config.rules)? {
                issues.push(issue);
            }
        }

        Ok(ValidationOutcome::from_issues(issues))
    }
}

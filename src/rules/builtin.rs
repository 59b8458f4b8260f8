// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules for the conventional commit grammar.

use crate::commit::CommitMessage;
use crate::config::{RulesConfig, Severity};
use crate::error::Result;

use super::validator::ValidationIssue;

pub const HEADER_TRIM: &str = "header-trim";
pub const HEADER_MAX_LENGTH: &str = "header-max-length";
pub const SUBJECT_EMPTY: &str = "subject-empty";
pub const TYPE_EMPTY: &str = "type-empty";
pub const TYPE_CASE: &str = "type-case";
pub const TYPE_ENUM: &str = "type-enum";
pub const SUBJECT_CASE: &str = "subject-case";
pub const SUBJECT_FULL_STOP: &str = "subject-full-stop";
pub const BODY_LEADING_BLANK: &str = "body-leading-blank";
pub const BODY_MAX_LINE_LENGTH: &str = "body-max-line-length";
pub const FOOTER_LEADING_BLANK: &str = "footer-leading-blank";
pub const FOOTER_MAX_LINE_LENGTH: &str = "footer-max-line-length";

/// Trait for rules registered on top of the built-in set.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the commit message and return an issue if validation fails.
    fn check(&self, message: &CommitMessage, config: &RulesConfig)
        -> Result<Option<ValidationIssue>>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// Apply all built-in rules to a commit message, in reporting order.
pub fn apply_builtin_rules(message: &CommitMessage, config: &RulesConfig) -> Vec<ValidationIssue> {
    let checks: [fn(&CommitMessage, &RulesConfig) -> Option<ValidationIssue>; 12] = [
        check_header_trim,
        check_header_max_length,
        check_subject_empty,
        check_type_empty,
        check_type_case,
        check_type_enum,
        check_subject_case,
        check_subject_full_stop,
        check_body_leading_blank,
        check_body_max_line_length,
        check_footer_leading_blank,
        check_footer_max_line_length,
    ];

    checks
        .iter()
        .filter_map(|check| check(message, config))
        .collect()
}

/// Build an issue at the configured severity, or nothing if the rule is off.
fn report(
    config: &RulesConfig,
    rule: &str,
    default: Severity,
    message: impl Into<String>,
) -> Option<ValidationIssue> {
    match config.level(rule, default) {
        Severity::Off => None,
        severity => Some(ValidationIssue::new(rule, message, severity)),
    }
}

fn check_header_trim(message: &CommitMessage, config: &RulesConfig) -> Option<ValidationIssue> {
    if message.header.trim() != message.header {
        report(
            config,
            HEADER_TRIM,
            Severity::Error,
            "header must not be surrounded by whitespace",
        )
    } else {
        None
    }
}

fn check_header_max_length(
    message: &CommitMessage,
    config: &RulesConfig,
) -> Option<ValidationIssue> {
    let max = config.header_max_length;
    let len = message.header_len();

    if len > max {
        report(
            config,
            HEADER_MAX_LENGTH,
            Severity::Error,
            format!(
                "header must not be longer than {} characters, current length is {}",
                max, len
            ),
        )
    } else {
        None
    }
}

fn check_subject_empty(message: &CommitMessage, config: &RulesConfig) -> Option<ValidationIssue> {
    if message.subject.is_none() {
        report(config, SUBJECT_EMPTY, Severity::Error, "subject may not be empty")
    } else {
        None
    }
}

fn check_type_empty(message: &CommitMessage, config: &RulesConfig) -> Option<ValidationIssue> {
    if message.commit_type.is_none() {
        report(config, TYPE_EMPTY, Severity::Error, "type may not be empty")
    } else {
        None
    }
}

fn check_type_case(message: &CommitMessage, config: &RulesConfig) -> Option<ValidationIssue> {
    let commit_type = message.commit_type.as_deref()?;

    if commit_type != commit_type.to_lowercase() {
        report(config, TYPE_CASE, Severity::Error, "type must be lower-case")
    } else {
        None
    }
}

fn check_type_enum(message: &CommitMessage, config: &RulesConfig) -> Option<ValidationIssue> {
    let commit_type = message.commit_type.as_deref()?;

    if !config.type_enum.is_empty() && !config.type_enum.iter().any(|t| t == commit_type) {
        report(
            config,
            TYPE_ENUM,
            Severity::Error,
            format!("type must be one of [{}]", config.type_enum.join(", ")),
        )
    } else {
        None
    }
}

fn check_subject_case(message: &CommitMessage, config: &RulesConfig) -> Option<ValidationIssue> {
    let subject = message.subject.as_deref()?;

    // Subjects opening with a digit or symbol have no case to judge.
    if !subject.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }

    if config.subject_case.iter().any(|case| case.matches(subject)) {
        let cases: Vec<&str> = config.subject_case.iter().map(|c| c.as_str()).collect();
        report(
            config,
            SUBJECT_CASE,
            Severity::Error,
            format!("subject must not be {}", cases.join(", ")),
        )
    } else {
        None
    }
}

fn check_subject_full_stop(
    message: &CommitMessage,
    config: &RulesConfig,
) -> Option<ValidationIssue> {
    let subject = message.subject.as_deref()?;
    let stop = config.subject_full_stop.as_str();

    if !stop.is_empty() && subject.ends_with(stop) {
        report(
            config,
            SUBJECT_FULL_STOP,
            Severity::Error,
            "subject may not end with full stop",
        )
    } else {
        None
    }
}

fn check_body_leading_blank(
    message: &CommitMessage,
    config: &RulesConfig,
) -> Option<ValidationIssue> {
    if message.body.is_some() && !message.body_leading_blank {
        report(
            config,
            BODY_LEADING_BLANK,
            Severity::Warning,
            "body must have leading blank line",
        )
    } else {
        None
    }
}

fn check_body_max_line_length(
    message: &CommitMessage,
    config: &RulesConfig,
) -> Option<ValidationIssue> {
    let body = message.body.as_deref()?;
    let max = config.body_max_line_length;

    if longest_line(body) > max {
        report(
            config,
            BODY_MAX_LINE_LENGTH,
            Severity::Error,
            format!("body's lines must not be longer than {} characters", max),
        )
    } else {
        None
    }
}

fn check_footer_leading_blank(
    message: &CommitMessage,
    config: &RulesConfig,
) -> Option<ValidationIssue> {
    if message.footer.is_some() && !message.footer_leading_blank {
        report(
            config,
            FOOTER_LEADING_BLANK,
            Severity::Warning,
            "footer must have leading blank line",
        )
    } else {
        None
    }
}

fn check_footer_max_line_length(
    message: &CommitMessage,
    config: &RulesConfig,
) -> Option<ValidationIssue> {
    let footer = message.footer.as_deref()?;
    let max = config.footer_max_line_length;

    if longest_line(footer) > max {
        report(
            config,
            FOOTER_MAX_LINE_LENGTH,
            Severity::Error,
            format!("footer's lines must not be longer than {} characters", max),
        )
    } else {
        None
    }
}

fn longest_line(text: &str) -> usize {
    text.lines().map(|l| l.chars().count()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_for(raw: &str) -> Vec<String> {
        apply_builtin_rules(&CommitMessage::parse(raw), &RulesConfig::default())
            .into_iter()
            .map(|issue| issue.rule)
            .collect()
    }

    #[test]
    fn test_valid_header() {
        assert!(rules_for("feat: add login").is_empty());
        assert!(rules_for("fix(auth)!: drop legacy tokens").is_empty());
    }

    #[test]
    fn test_missing_type() {
        assert_eq!(rules_for("fixed bug"), vec![SUBJECT_EMPTY, TYPE_EMPTY]);
    }

    #[test]
    fn test_header_max_length() {
        let raw = format!("feat: {}", "a".repeat(120));
        let issues = apply_builtin_rules(&CommitMessage::parse(&raw), &RulesConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, HEADER_MAX_LENGTH);
        assert_eq!(
            issues[0].message,
            "header must not be longer than 100 characters, current length is 126"
        );
    }

    #[test]
    fn test_header_trim() {
        assert!(rules_for("feat: add login ").contains(&HEADER_TRIM.to_string()));
    }

    #[test]
    fn test_type_case_and_enum() {
        assert_eq!(rules_for("Feat: add login"), vec![TYPE_CASE, TYPE_ENUM]);
        assert_eq!(rules_for("feature: add login"), vec![TYPE_ENUM]);
    }

    #[test]
    fn test_subject_case() {
        let issues =
            apply_builtin_rules(&CommitMessage::parse("feat: Add login"), &RulesConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "subject must not be sentence-case, start-case, pascal-case, upper-case"
        );
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_subject_case_accepts_mixed_case_names() {
        assert!(rules_for("feat: Add iOS support").is_empty());
        assert!(rules_for("fix: Fix OAuth flow").is_empty());
        assert!(rules_for("feat: 2 Factor Auth").is_empty());
        assert_eq!(rules_for("feat: Add Login Page"), vec![SUBJECT_CASE]);
        assert_eq!(rules_for("feat: ADD LOGIN"), vec![SUBJECT_CASE]);
    }

    #[test]
    fn test_subject_full_stop() {
        assert_eq!(rules_for("fix: handle nulls."), vec![SUBJECT_FULL_STOP]);
    }

    #[test]
    fn test_body_leading_blank_is_warning() {
        let issues = apply_builtin_rules(
            &CommitMessage::parse("fix: handle nulls\nno blank line here"),
            &RulesConfig::default(),
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, BODY_LEADING_BLANK);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_body_max_line_length() {
        let raw = format!("fix: handle nulls\n\n{}", "b".repeat(101));
        assert_eq!(rules_for(&raw), vec![BODY_MAX_LINE_LENGTH]);
    }

    #[test]
    fn test_footer_rules() {
        assert_eq!(
            rules_for("fix: handle nulls\nRefs: #12"),
            vec![FOOTER_LEADING_BLANK]
        );

        let raw = format!("fix: handle nulls\n\nRefs: {}", "1".repeat(100));
        assert_eq!(rules_for(&raw), vec![FOOTER_MAX_LINE_LENGTH]);
    }

    #[test]
    fn test_rule_turned_off() {
        let mut config = RulesConfig::default();
        config.levels.insert(TYPE_EMPTY.to_string(), Severity::Off);
        config
            .levels
            .insert(SUBJECT_EMPTY.to_string(), Severity::Warning);

        let issues = apply_builtin_rules(&CommitMessage::parse("fixed bug"), &config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, SUBJECT_EMPTY);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_empty_type_enum_allows_anything() {
        let config = RulesConfig {
            type_enum: Vec::new(),
            ..RulesConfig::default()
        };
        let issues = apply_builtin_rules(&CommitMessage::parse("anything: goes"), &config);
        assert!(issues.is_empty());
    }
}

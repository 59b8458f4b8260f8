// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Messages the rule engine skips entirely.

use crate::error::{QaError, Result, ValidationError};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Messages generated by tooling rather than written by hand.
    static ref DEFAULT_IGNORES: Vec<Regex> = [
        r"^Merge pull request\b",
        r"^Merge branch (.*)",
        r"^Merge (.*?) into (.*)",
        r"^Merge tag (.*)",
        r"^Merge remote-tracking branch(\s*)(.*)",
        r"^(Merged (.*?)(in|into) (.*)|Merged PR (.*): (.*))",
        r"^(R|r)evert (.*)",
        r"^(amend|fixup|squash)!",
        r"^Automatic merge(.*)",
        r"^Auto-merged (.*?) into (.*)",
        r"^v?\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?\s*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// Check whether a message should be skipped.
///
/// Default ignores look at the header only. User patterns are globs matched
/// against the header.
pub fn is_ignored(message: &str, default_ignores: bool, patterns: &[String]) -> Result<bool> {
    let header = message.lines().next().unwrap_or("");

    if default_ignores && DEFAULT_IGNORES.iter().any(|re| re.is_match(header)) {
        return Ok(true);
    }

    for pattern in patterns {
        let glob = glob::Pattern::new(pattern).map_err(|e| {
            QaError::Validation(ValidationError::InvalidIgnorePattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })?;
        if glob.matches(header) {
            return Ok(true);
        }
    }

    Ok(false)
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.
//!
//! Parsing is total: any string produces a [`CommitMessage`]. Parts the
//! conventional grammar cannot find are left empty so that rules can report
//! them, rather than failing up front.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the conventional commit header.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>\w*)(?:\((?P<scope>.*)\))?!?: (?P<subject>.*)$")
            .unwrap();

    /// Regex for a footer trailer line (`Token: value`, `Token #value`).
    static ref TRAILER_REGEX: Regex =
        Regex::new(r"^(?:BREAKING[ -]CHANGE|[A-Za-z][\w-]*)(?:: | #)\S").unwrap();
}

/// A commit message split along the conventional grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessage {
    /// The raw first line.
    pub header: String,
    /// Commit type (feat, fix, etc.), if the header matched.
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject, if the header matched and it is non-empty.
    pub subject: Option<String>,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (trailers, breaking change notes).
    pub footer: Option<String>,
    /// Whether the body is separated from the header by a blank line.
    pub body_leading_blank: bool,
    /// Whether the footer is separated from what precedes it by a blank line.
    pub footer_leading_blank: bool,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Self {
        let mut lines = message.lines();
        let header = lines.next().unwrap_or("").to_string();
        let rest: Vec<&str> = lines.collect();

        let (commit_type, scope, subject) = match HEADER_REGEX.captures(&header) {
            Some(captures) => (
                non_empty(captures.name("type").map(|m| m.as_str())),
                non_empty(captures.name("scope").map(|m| m.as_str())),
                non_empty(captures.name("subject").map(|m| m.as_str())),
            ),
            None => (None, None, None),
        };

        let footer_start = rest
            .iter()
            .enumerate()
            .position(|(idx, line)| {
                TRAILER_REGEX.is_match(line) && (idx == 0 || rest[idx - 1].trim().is_empty())
            })
            .unwrap_or(rest.len());

        let body = join_trimmed(&rest[..footer_start]);
        let footer = join_trimmed(&rest[footer_start..]);

        let body_leading_blank = rest.first().map(|l| l.trim().is_empty()).unwrap_or(true);
        let footer_leading_blank = footer_start > 0 && rest[footer_start - 1].trim().is_empty();

        Self {
            header,
            commit_type,
            scope,
            subject,
            body,
            footer,
            body_leading_blank,
            footer_leading_blank,
        }
    }

    /// Get the header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Join lines, dropping blank lines at both ends.
fn join_trimmed(lines: &[&str]) -> Option<String> {
    let start = lines.iter().position(|l| !l.trim().is_empty())?;
    let end = lines.iter().rposition(|l| !l.trim().is_empty())?;
    Some(lines[start..=end].join("\n"))
}

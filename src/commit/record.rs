// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit records collected from history.

/// Length of the abbreviated SHA shown in reports and logs.
pub const SHORT_SHA_LEN: usize = 8;

/// A commit as seen by the validator: its identity and its full message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    sha: String,
    message: String,
}

impl CommitRecord {
    /// Create a record from a commit id and its subject plus body.
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
        }
    }

    /// Full commit id.
    pub fn sha(&self) -> &str {
        &self.sha
    }

    /// The first eight characters of the commit id.
    pub fn short_sha(&self) -> &str {
        short_sha(&self.sha)
    }

    /// Subject line plus any body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Abbreviate a commit id, tolerating ids shorter than [`SHORT_SHA_LEN`].
pub fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(SHORT_SHA_LEN) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sha_is_derived() {
        let record = CommitRecord::new(
            "0123456789abcdef0123456789abcdef01234567",
            "feat: add login",
        );
        assert_eq!(record.short_sha(), "01234567");
        assert_eq!(record.sha().len(), 40);
    }

    #[test]
    fn test_short_sha_of_short_ref() {
        assert_eq!(short_sha("HEAD"), "HEAD");
        assert_eq!(short_sha(""), "");
    }

    #[test]
    fn test_subject() {
        let record = CommitRecord::new("abc", "fix: crash\n\nDetails here");
        assert_eq!(record.subject(), "fix: crash");
        assert_eq!(record.message(), "fix: crash\n\nDetails here");
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit collection.

use crate::commit::CommitRecord;
use crate::error::Result;
use crate::git::History;

use super::range::Range;

/// Turns a resolved range into commit records.
pub struct CommitCollector<'a, H: History + ?Sized> {
    history: &'a H,
}

impl<'a, H: History + ?Sized> CommitCollector<'a, H> {
    pub fn new(history: &'a H) -> Self {
        Self { history }
    }

    /// Commits after `range.from` up to and including `range.to`, newest first.
    ///
    /// Git stores messages with a trailing newline; it is dropped here so the
    /// message is exactly subject plus body. An empty range is not an error.
    pub fn collect(&self, range: &Range) -> Result<Vec<CommitRecord>> {
        let commits: Vec<CommitRecord> = self
            .history
            .log(&range.from, &range.to)?
            .into_iter()
            .map(|c| CommitRecord::new(c.sha(), c.message().trim_end()))
            .collect();

        if commits.is_empty() {
            tracing::warn!("No commits found in range. Nothing to validate.");
        } else {
            tracing::info!("Found {} commit(s) to validate.", commits.len());
        }

        Ok(commits)
    }
}

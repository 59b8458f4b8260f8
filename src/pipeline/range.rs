// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit range resolution.

use serde::{Deserialize, Serialize};

use crate::commit::short_sha;
use crate::error::{RangeError, Result};
use crate::git::History;

/// Revision treated as the current position.
pub const HEAD: &str = "HEAD";

/// Boundaries of the commits to inspect: `from` exclusive, `to` inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub from: String,
    pub to: String,
    pub base_branch: String,
}

/// Which step of the fallback chain produced `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSource {
    Explicit,
    MergeBase,
    Parent,
    Root,
}

/// Resolves range boundaries against a [`History`].
pub struct RangeResolver<'a, H: History + ?Sized> {
    history: &'a H,
    remote: &'a str,
}

impl<'a, H: History + ?Sized> RangeResolver<'a, H> {
    /// Create a resolver comparing against branches of `remote`.
    pub fn new(history: &'a H, remote: &'a str) -> Self {
        Self { history, remote }
    }

    /// Resolve the range.
    ///
    /// Without an explicit start, tries in order: the merge-base of HEAD and
    /// the remote base branch, HEAD's parent, then the root commit. A failed
    /// step only moves on to the next one; the call fails when all three do.
    pub fn resolve(
        &self,
        explicit_from: Option<&str>,
        explicit_to: Option<&str>,
        base_branch: &str,
    ) -> Result<(Range, RangeSource)> {
        let to = explicit_to.unwrap_or(HEAD).to_string();

        let (from, source) = match explicit_from {
            Some(from) => (from.to_string(), RangeSource::Explicit),
            None => self.fallback_from(base_branch)?,
        };

        tracing::info!("Range: {}..{} ({:?})", short_sha(&from), to, source);

        Ok((
            Range {
                from,
                to,
                base_branch: base_branch.to_string(),
            },
            source,
        ))
    }

    fn fallback_from(&self, base_branch: &str) -> Result<(String, RangeSource)> {
        let base_ref = if self.remote.is_empty() {
            base_branch.to_string()
        } else {
            format!("{}/{}", self.remote, base_branch)
        };
        let mut attempts = Vec::new();

        match self.history.merge_base(HEAD, &base_ref) {
            Ok(sha) => {
                tracing::info!("Merge-base with {}: {}", base_ref, short_sha(&sha));
                return Ok((sha, RangeSource::MergeBase));
            }
            Err(e) => attempts.push(format!("merge-base with {}: {}", base_ref, e)),
        }

        match self.history.parent(HEAD) {
            Ok(sha) => {
                tracing::warn!("Could not find merge-base with {}. Falling back to HEAD~1.", base_ref);
                return Ok((sha, RangeSource::Parent));
            }
            Err(e) => attempts.push(format!("HEAD~1: {}", e)),
        }

        match self.history.root_commit(HEAD) {
            Ok(sha) => {
                tracing::warn!("Falling back to root commit {}.", short_sha(&sha));
                Ok((sha, RangeSource::Root))
            }
            Err(e) => {
                attempts.push(format!("root commit: {}", e));
                Err(RangeError::Unresolved { attempts }.into())
            }
        }
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! The validation pipeline only sees history through the [`History`] trait.
//! [`Repository`] implements it on top of libgit2.

mod repo;

pub use repo::Repository;

use crate::commit::CommitRecord;
use crate::error::Result;

/// Read-only queries against version-control history.
pub trait History {
    /// Nearest common ancestor of two revisions.
    fn merge_base(&self, left: &str, right: &str) -> Result<String>;

    /// First parent of a revision.
    fn parent(&self, reference: &str) -> Result<String>;

    /// A parentless commit reachable from a revision.
    fn root_commit(&self, reference: &str) -> Result<String>;

    /// Commits reachable from `to` but not from `from`, newest first, with
    /// their messages exactly as stored.
    fn log(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>>;
}

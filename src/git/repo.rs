// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::commit::CommitRecord;
use crate::error::{GitError, QaError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;

use super::History;

/// A libgit2 repository, read through [`History`].
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            QaError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path, searching parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                QaError::Git(GitError::NotARepository)
            } else {
                QaError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            QaError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            QaError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    fn revwalk_from(&self, reference: &str) -> Result<git2::Revwalk<'_>> {
        let tip = self.get_commit(reference)?;
        let mut revwalk = self.inner.revwalk().map_err(|e| walk_failed("revwalk", e))?;
        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(|e| walk_failed("revwalk.set_sorting", e))?;
        revwalk
            .push(tip.id())
            .map_err(|e| walk_failed("revwalk.push", e))?;
        Ok(revwalk)
    }

    fn find_commit(&self, oid: Oid) -> Result<git2::Commit<'_>> {
        self.inner.find_commit(oid).map_err(|e| {
            QaError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", oid, e.message()),
            })
        })
    }
}

impl History for Repository {
    fn merge_base(&self, left: &str, right: &str) -> Result<String> {
        let left_commit = self.get_commit(left)?;
        let right_commit = self.get_commit(right)?;

        let base = self
            .inner
            .merge_base(left_commit.id(), right_commit.id())
            .map_err(|e| {
                QaError::Git(GitError::NoMergeBase {
                    left: left.to_string(),
                    right: right.to_string(),
                    message: e.message().to_string(),
                })
            })?;

        Ok(base.to_string())
    }

    fn parent(&self, reference: &str) -> Result<String> {
        let commit = self.get_commit(reference)?;
        let parent = commit.parent_id(0).map_err(|_| {
            QaError::Git(GitError::NoParent {
                reference: reference.to_string(),
            })
        })?;
        Ok(parent.to_string())
    }

    fn root_commit(&self, reference: &str) -> Result<String> {
        for oid in self.revwalk_from(reference)? {
            let oid = oid.map_err(|e| walk_failed("revwalk", e))?;
            if self.find_commit(oid)?.parent_count() == 0 {
                return Ok(oid.to_string());
            }
        }

        Err(QaError::Git(GitError::NoRootCommit {
            reference: reference.to_string(),
        }))
    }

    fn log(&self, from: &str, to: &str) -> Result<Vec<CommitRecord>> {
        let boundary = self.get_commit(from)?;
        let mut revwalk = self.revwalk_from(to)?;
        revwalk
            .hide(boundary.id())
            .map_err(|e| walk_failed("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid.map_err(|e| walk_failed("revwalk", e))?;
            let commit = self.find_commit(oid)?;
            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
            commits.push(CommitRecord::new(oid.to_string(), message));
        }

        Ok(commits)
    }
}

fn walk_failed(command: &str, err: git2::Error) -> QaError {
    QaError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: err.message().to_string(),
    })
}

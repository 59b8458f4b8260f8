// Author: Eshan Roy
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use assert_cmd::Command;
use git2::{Oid, Repository, Signature, Time};
use serde_json::Value;
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch repository plus an isolated home and output directory.
pub struct TestEnv {
    _tmp: TempDir,
    pub repo_dir: PathBuf,
    pub home: PathBuf,
    pub output_dir: PathBuf,
    repo: Repository,
    clock: Cell<i64>,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let repo_dir = tmp.path().join("repo");
        let home = tmp.path().join("home");
        let output_dir = tmp.path().join("out");
        fs::create_dir_all(&home).expect("create isolated home");

        let repo = Repository::init(&repo_dir).expect("init repository");

        Self {
            _tmp: tmp,
            repo_dir,
            home,
            output_dir,
            repo,
            clock: Cell::new(1_700_000_000),
        }
    }

    /// The binary, run inside the scratch repository with a clean environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("validate-commits").expect("binary built");
        cmd.current_dir(&self.repo_dir)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("QA_OUTPUT_DIR", &self.output_dir)
            .env_remove("GITHUB_OUTPUT")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("BASE_BRANCH")
            .env_remove("BASE_REMOTE")
            .env_remove("DEBUG")
            .env_remove("RUST_LOG")
            .env_remove("GIT_DIR");
        cmd
    }

    /// Commit on top of HEAD and return the new SHA.
    pub fn commit(&self, message: &str) -> String {
        let time = self.clock.get() + 60;
        self.clock.set(time);
        let sig = Signature::new("Test User", "test@example.com", &Time::new(time, 0))
            .expect("signature");

        let tree_id = self.repo.index().expect("index").write_tree().expect("tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(
                Some("HEAD"),
                &sig,
                &sig,
                &format!("{}\n", message),
                &tree,
                &parents,
            )
            .expect("commit")
            .to_string()
    }

    /// Point `refs/remotes/origin/<branch>` at a commit.
    pub fn set_origin_branch(&self, branch: &str, sha: &str) {
        let oid = Oid::from_str(sha).expect("valid oid");
        self.repo
            .reference(
                &format!("refs/remotes/origin/{}", branch),
                oid,
                true,
                "test",
            )
            .expect("create remote ref");
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join("qa-validate-commits-output.json")
    }

    pub fn report(&self) -> Value {
        read_json(&self.report_path())
    }
}

pub fn read_json(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("report written");
    serde_json::from_str(&raw).expect("valid json report")
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the build's git SHA and commit date for `--version` and debug logs.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Outside a git checkout vergen emits defaults instead of failing.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}

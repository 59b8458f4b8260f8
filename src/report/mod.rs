// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Report module.
//!
//! Builds the aggregate [`Report`] and hands it to its sinks: the JSON file
//! and the CI step output file.

mod builder;
mod sink;

pub use builder::Report;
pub use sink::{append_github_output, output_block, step_outputs, write_json};

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module.
//!
//! Two kinds of configuration live here: the rule configuration loaded from
//! commitlint.toml, and the runtime [`Settings`] assembled from arguments
//! and environment at startup.

mod case;
mod loader;
mod schema;
mod settings;

pub use case::Case;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config, render_config};
pub use schema::*;
pub use settings::{Settings, DEFAULT_BASE_BRANCH, DEFAULT_REMOTE, REPORT_FILE_NAME};

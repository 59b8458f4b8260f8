// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module.
//!
//! Commit records as collected from history, and the conventional
//! structure parsed out of their messages.

mod message;
mod record;

pub use message::CommitMessage;
pub use record::{short_sha, CommitRecord, SHORT_SHA_LEN};

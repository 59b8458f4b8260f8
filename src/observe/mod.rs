// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Observers notified as each commit is validated.
//!
//! Observers only report. They never influence results or the report.

mod annotations;
mod terminal;

pub use annotations::{escape_data, escape_property, AnnotationObserver};
pub use terminal::ConsoleObserver;

use crate::pipeline::Range;
use crate::rules::ValidationResult;

/// Follows a validation run as it happens.
pub trait ValidationObserver {
    /// Called once the range is resolved, before any commit is validated.
    fn on_range(&mut self, _range: &Range) {}

    /// Receives each validation result right after it is built.
    fn on_result(&mut self, result: &ValidationResult);
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! GitHub Actions workflow annotations.

use std::io::Write;

use crate::rules::ValidationResult;

use super::ValidationObserver;

/// Title shown on every annotation.
const TITLE: &str = "Invalid Commit";

/// Emits one `::warning` workflow command per error of an invalid commit.
///
/// Annotations are advisory: a write failure is logged and otherwise ignored.
pub struct AnnotationObserver<W: Write> {
    out: W,
}

impl AnnotationObserver<std::io::Stdout> {
    /// Annotate on stdout, where the Actions runner reads workflow commands.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> AnnotationObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the observer, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ValidationObserver for AnnotationObserver<W> {
    fn on_result(&mut self, result: &ValidationResult) {
        if result.valid {
            return;
        }

        for error in &result.errors {
            let text = format!("{}: {} - {}", result.short_sha, result.message, error);
            if let Err(e) = writeln!(
                self.out,
                "::warning title={}::{}",
                escape_property(TITLE),
                escape_data(&text)
            ) {
                tracing::warn!("Failed to write annotation: {}", e);
                return;
            }
        }
    }
}

/// Escape a workflow command message.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value.
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

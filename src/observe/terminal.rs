// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Human-readable progress output.

use console::style;

use crate::commit::short_sha;
use crate::pipeline::Range;
use crate::rules::ValidationResult;

use super::ValidationObserver;

/// Prints the range, then invalid commits and their errors, to stdout.
///
/// Valid commits are only logged at debug level.
#[derive(Debug, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationObserver for ConsoleObserver {
    fn on_range(&mut self, range: &Range) {
        println!(
            "{} Range: {}..{}",
            style("ℹ").blue(),
            short_sha(&range.from),
            range.to
        );
    }

    fn on_result(&mut self, result: &ValidationResult) {
        if result.valid {
            tracing::debug!("valid [{}] {}", result.short_sha, result.subject());
            for warning in &result.warnings {
                println!(
                    "  {} {} {}",
                    style("⚠").yellow().bold(),
                    style(&result.short_sha).cyan(),
                    warning
                );
            }
            return;
        }

        println!(
            "{} {} {}",
            style("✗").red().bold(),
            style(&result.short_sha).cyan(),
            result.subject()
        );
        for error in &result.errors {
            println!("  {} {}", style("→").dim(), style(error).red());
        }
        for warning in &result.warnings {
            println!("  {} {}", style("⚠").yellow().bold(), warning);
        }
    }
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The validation pipeline.
//!
//! Resolve a range, collect its commits, validate each one in order and
//! build the report:
//!
//! ```text
//! RangeResolver -> CommitCollector -> ValidationOrchestrator -> Report
//! ```
//!
//! Writing the report anywhere is left to the caller.

mod collector;
mod orchestrator;
mod range;

pub use collector::CommitCollector;
pub use orchestrator::ValidationOrchestrator;
pub use range::{Range, RangeResolver, RangeSource, HEAD};

use crate::config::Settings;
use crate::error::Result;
use crate::git::History;
use crate::observe::ValidationObserver;
use crate::report::Report;
use crate::rules::RuleEngine;

/// Run the whole pipeline for one range.
///
/// Fails only when the range cannot be resolved or history cannot be read.
/// Non-conforming messages end up in the report.
pub fn run<H, E>(
    settings: &Settings,
    history: &H,
    engine: &E,
    rule_config: &E::Config,
    mut observers: Vec<&mut dyn ValidationObserver>,
) -> Result<Report>
where
    H: History + ?Sized,
    E: RuleEngine,
{
    let (range, _source) = RangeResolver::new(history, &settings.remote).resolve(
        settings.from.as_deref(),
        settings.to.as_deref(),
        &settings.base_branch,
    )?;

    for observer in observers.iter_mut() {
        observer.on_range(&range);
    }

    let commits = CommitCollector::new(history).collect(&range)?;

    let mut orchestrator = ValidationOrchestrator::new(engine);
    for observer in observers {
        orchestrator = orchestrator.with_observer(observer);
    }
    let results = orchestrator.validate(&commits, rule_config);

    Ok(Report::build(range, results))
}

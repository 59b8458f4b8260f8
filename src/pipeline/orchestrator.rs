// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation orchestration.

use crate::commit::CommitRecord;
use crate::observe::ValidationObserver;
use crate::rules::{RuleEngine, ValidationOutcome, ValidationResult};

/// Drives a rule engine over commits, one at a time and in order.
pub struct ValidationOrchestrator<'a, E: RuleEngine> {
    engine: &'a E,
    observers: Vec<&'a mut dyn ValidationObserver>,
}

impl<'a, E: RuleEngine> ValidationOrchestrator<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self {
            engine,
            observers: Vec::new(),
        }
    }

    /// Notify `observer` after each result is built.
    pub fn with_observer(mut self, observer: &'a mut dyn ValidationObserver) -> Self {
        self.observers.push(observer);
        self
    }

    /// Validate every commit.
    ///
    /// `results[i]` always belongs to `commits[i]`. An invalid message does
    /// not stop the loop, and neither does an engine error: the latter is
    /// recorded as an invalid result naming the failure.
    pub fn validate(&mut self, commits: &[CommitRecord], config: &E::Config) -> Vec<ValidationResult> {
        let mut results = Vec::with_capacity(commits.len());

        for commit in commits {
            let outcome = match self.engine.evaluate(commit.message(), config) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Rule engine failed on {}: {}", commit.short_sha(), e);
                    ValidationOutcome {
                        valid: false,
                        errors: vec![format!("rule engine failed: {}", e)],
                        warnings: Vec::new(),
                    }
                }
            };

            let result = ValidationResult::new(commit, outcome);
            for observer in self.observers.iter_mut() {
                observer.on_result(&result);
            }
            results.push(result);
        }

        results
    }
}

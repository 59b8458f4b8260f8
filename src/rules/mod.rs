// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! [`RuleEngine`] is the seam the validation pipeline depends on;
//! [`ConventionalEngine`] is the default grammar behind it.

mod builtin;
mod engine;
mod ignore;
mod validator;

pub use builtin::*;
pub use engine::{ConventionalEngine, RuleEngine};
pub use ignore::is_ignored;
pub use validator::{ValidationIssue, ValidationOutcome, ValidationResult};

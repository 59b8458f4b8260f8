// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;
use std::io::Write;

use crate::config::{render_config, LintConfig, Settings};
use crate::error::{Result, ResultExt};
use crate::git::Repository;
use crate::observe::{AnnotationObserver, ConsoleObserver, ValidationObserver};
use crate::pipeline;
use crate::report::{append_github_output, step_outputs, write_json};
use crate::rules::ConventionalEngine;

use super::args::Cli;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load()?
    };

    if cli.print_config {
        let rendered = render_config(&config)?;
        std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to print configuration")?;
        return Ok(());
    }

    let settings = cli.settings();
    tracing::debug!("Running with settings: {:?}", settings);

    run_validate(&settings, &config)
}

/// Validate the range and publish the report.
fn run_validate(settings: &Settings, config: &LintConfig) -> Result<()> {
    let repo = Repository::open_current()?;
    let engine = ConventionalEngine::new();

    let mut console_observer = ConsoleObserver::new();
    let mut annotation_observer = AnnotationObserver::stdout();
    let mut observers: Vec<&mut dyn ValidationObserver> = Vec::new();
    observers.push(&mut console_observer);
    if settings.annotations {
        observers.push(&mut annotation_observer);
    }

    let report = pipeline::run(settings, &repo, &engine, config, observers)?;
    let output_file = write_json(&report, &settings.output_dir)?;

    match &settings.github_output {
        Some(path) => {
            if let Err(e) = append_github_output(path, &step_outputs(&report, &output_file)) {
                tracing::warn!("{}", e);
            }
        }
        None => tracing::debug!("GITHUB_OUTPUT not set, skipping step outputs"),
    }

    if report.commits_valid() {
        println!("{} {}", style("✓").green().bold(), report.summary());
    } else {
        println!("{} {}", style("⚠").yellow().bold(), report.summary());
        println!("  Enforcement is left to the calling workflow.");
    }
    println!("  Report: {}", output_file.display());

    Ok(())
}

// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Report persistence and CI step outputs.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::REPORT_FILE_NAME;
use crate::error::{QaError, ReportError, Result};

use super::builder::Report;

/// Delimiter for multi-line values in the GitHub output file.
const OUTPUT_DELIMITER: &str = "__GHA_EOF__";

/// Write the report as pretty-printed JSON into `output_dir`.
///
/// Creates the directory when missing and returns the file path.
pub fn write_json(report: &Report, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(REPORT_FILE_NAME);

    let json = serde_json::to_string_pretty(report).map_err(|e| {
        QaError::Report(ReportError::SerializeFailed {
            message: e.to_string(),
        })
    })?;

    fs::create_dir_all(output_dir)
        .and_then(|_| fs::write(&path, json))
        .map_err(|e| {
            QaError::Report(ReportError::WriteFailed {
                path: path.clone(),
                message: e.to_string(),
            })
        })?;

    tracing::debug!("JSON written to: {}", path.display());
    Ok(path)
}

/// Key/value pairs exported as step outputs, in emission order.
pub fn step_outputs(report: &Report, output_file: &Path) -> Vec<(&'static str, String)> {
    vec![
        ("commits_valid", report.commits_valid().to_string()),
        ("total_count", report.total_count().to_string()),
        ("invalid_count", report.invalid_count().to_string()),
        ("output_file", output_file.display().to_string()),
    ]
}

/// Render one `KEY<<DELIM` block.
pub fn output_block(key: &str, value: &str) -> String {
    format!(
        "{key}<<{delim}\n{value}\n{delim}\n",
        key = key,
        value = value,
        delim = OUTPUT_DELIMITER
    )
}

/// Append every step output to the CI output file.
pub fn append_github_output(path: &Path, outputs: &[(&str, String)]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| output_failed(path, e))?;

    for (key, value) in outputs {
        file.write_all(output_block(key, value).as_bytes())
            .map_err(|e| output_failed(path, e))?;
        tracing::debug!("GITHUB_OUTPUT: {}={}", key, value);
    }

    Ok(())
}

fn output_failed(path: &Path, err: std::io::Error) -> QaError {
    QaError::Report(ReportError::OutputFailed {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Range;
    use tempfile::TempDir;

    fn empty_report() -> Report {
        Report::build(
            Range {
                from: "f".repeat(40),
                to: "HEAD".to_string(),
                base_branch: "main".to_string(),
            },
            Vec::new(),
        )
    }

    #[test]
    fn test_write_json_creates_directory() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("nested").join("out");

        let path = write_json(&empty_report(), &output_dir).unwrap();
        assert_eq!(path, output_dir.join("qa-validate-commits-output.json"));

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\n  \"commits_valid\": true,"));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["total_count"], 0);
        assert_eq!(value["results"], serde_json::json!([]));
    }

    #[test]
    fn test_write_json_unwritable_directory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        let result = write_json(&empty_report(), &blocker.join("sub"));
        assert!(matches!(
            result,
            Err(QaError::Report(ReportError::WriteFailed { .. }))
        ));
    }

    #[test]
    fn test_output_block() {
        assert_eq!(
            output_block("total_count", "3"),
            "total_count<<__GHA_EOF__\n3\n__GHA_EOF__\n"
        );
    }

    #[test]
    fn test_append_github_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("github_output");
        fs::write(&path, "existing<<X\nkeep\nX\n").unwrap();

        let outputs = step_outputs(&empty_report(), Path::new("/tmp/report.json"));
        append_github_output(&path, &outputs).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "existing<<X\nkeep\nX\n\
             commits_valid<<__GHA_EOF__\ntrue\n__GHA_EOF__\n\
             total_count<<__GHA_EOF__\n0\n__GHA_EOF__\n\
             invalid_count<<__GHA_EOF__\n0\n__GHA_EOF__\n\
             output_file<<__GHA_EOF__\n/tmp/report.json\n__GHA_EOF__\n"
        );
    }
}

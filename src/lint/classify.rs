//! Interpreting a finished golangci-lint run

use crate::types::{Error, Issue, LintReport, Result};

/// golangci-lint's exit code for "no files to analyze"
///
/// See `pkg/exitcodes/exitcodes.go` in golangci-lint.
pub const NO_GO_FILES_EXIT_CODE: i32 = 5;

/// Captured result of one tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Captured stdout
    pub stdout: Vec<u8>,
    /// Captured stderr
    pub stderr: Vec<u8>,
}

impl ToolOutput {
    /// Capture the relevant parts of a finished process
    pub fn from_output(output: std::process::Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }

    fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    fn describe_exit(&self) -> String {
        match self.exit_code {
            Some(code) => format!("golangci-lint exited with status {}", code),
            None => "golangci-lint was terminated by a signal".to_string(),
        }
    }
}

/// Turn a finished run into the issues it reported.
///
/// A successful exit means nothing was found. Exiting with
/// [`NO_GO_FILES_EXIT_CODE`] and no output is also a clean run, since not
/// every directory holds Go files. Any other failure without stdout is fatal
/// and reported as [`Error::ToolFailed`] carrying stderr.
pub fn classify(output: &ToolOutput) -> Result<Vec<Issue>> {
    if output.success() {
        return Ok(Vec::new());
    }

    if output.stdout.is_empty() {
        // golangci-lint reports critical errors on stderr rather than stdout
        if output.exit_code == Some(NO_GO_FILES_EXIT_CODE) {
            return Ok(Vec::new());
        }
        return Err(Error::ToolFailed(failure_message(output)));
    }

    let report: LintReport = serde_json::from_slice(&output.stdout)?;
    log_run_report(&report);
    Ok(report.into_issues())
}

fn failure_message(output: &ToolOutput) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim().is_empty() {
        output.describe_exit()
    } else {
        stderr.into_owned()
    }
}

fn log_run_report(report: &LintReport) {
    let Some(run) = &report.report else {
        return;
    };
    for warning in run.warnings.iter().flatten() {
        log::warn!("golangci-lint [{}]: {}", warning.tag, warning.text);
    }
    if let Some(error) = run.error.as_deref().filter(|e| !e.is_empty()) {
        log::warn!("golangci-lint reported an error: {}", error);
    }
}

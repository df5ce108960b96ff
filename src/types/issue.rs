//! golangci-lint JSON report types

use serde::{Deserialize, Deserializer};

/// Top-level JSON object golangci-lint writes to stdout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LintReport {
    /// Reported issues; `null` and a missing key both mean no issues
    #[serde(default)]
    pub issues: Option<Vec<Issue>>,

    /// Run metadata
    #[serde(default)]
    pub report: Option<RunReport>,
}

impl LintReport {
    /// Consume the report, yielding its issues in output order
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues.unwrap_or_default()
    }
}

/// The `Report` section of the JSON output
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunReport {
    /// Non-fatal warnings emitted during the run
    #[serde(default)]
    pub warnings: Option<Vec<ReportWarning>>,

    /// Run-level error, if any
    #[serde(default)]
    pub error: Option<String>,
}

/// A single warning from the `Report.Warnings` array
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportWarning {
    /// Subsystem that emitted the warning
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tag: String,
    /// Warning text
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

/// A single finding reported by golangci-lint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Issue {
    /// Name of the linter that produced the issue
    #[serde(default, deserialize_with = "null_as_empty")]
    pub from_linter: String,

    /// Issue description
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,

    /// Severity string as configured in golangci-lint; often empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub severity: String,

    /// Source position
    pub pos: IssuePosition,
}

/// Source position of an issue (1-based line and column)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IssuePosition {
    /// File path, absolute or relative to the tool's base directory
    #[serde(deserialize_with = "null_as_empty")]
    pub filename: String,
    /// 1-based line
    #[serde(default)]
    pub line: i64,
    /// 1-based column
    #[serde(default)]
    pub column: i64,
}

/// golangci-lint serializes unset strings as `null` in some versions
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

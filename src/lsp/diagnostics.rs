//! Convert golangci-lint issues to LSP diagnostics

use crate::config::ServerOptions;
use crate::types::{Error, Issue, Result, Severity};
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Range};

use super::utils::to_position;

/// Convert the outcome of a lint run into the diagnostics to publish.
///
/// A failed run becomes a single error diagnostic so the editor always
/// shows something.
pub fn lint_result_to_diagnostics(
    result: Result<Vec<Issue>>,
    options: &ServerOptions,
) -> Vec<Diagnostic> {
    match result {
        Ok(issues) => issues
            .iter()
            .map(|issue| issue_to_diagnostic(issue, options))
            .collect(),
        Err(err) => vec![failure_diagnostic(&err)],
    }
}

/// Convert an Issue to an LSP Diagnostic
pub fn issue_to_diagnostic(issue: &Issue, options: &ServerOptions) -> Diagnostic {
    let position = to_position(issue.pos.line, issue.pos.column);
    let severity = Severity::from_issue(&issue.severity, options.default_severity);

    Diagnostic {
        range: Range {
            start: position,
            end: position,
        },
        severity: Some(severity_to_lsp(severity)),
        source: Some(issue.from_linter.clone()),
        message: format_message(issue, options.no_linter_name),
        ..Default::default()
    }
}

/// Diagnostic reporting a run that produced no usable report
pub fn failure_diagnostic(err: &Error) -> Diagnostic {
    Diagnostic {
        severity: Some(DiagnosticSeverity::ERROR),
        message: err.to_string(),
        ..Default::default()
    }
}

/// Convert Severity to LSP DiagnosticSeverity
fn severity_to_lsp(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Information => DiagnosticSeverity::INFORMATION,
        Severity::Hint => DiagnosticSeverity::HINT,
    }
}

fn format_message(issue: &Issue, no_linter_name: bool) -> String {
    if no_linter_name {
        issue.text.clone()
    } else {
        format!("{}: {}", issue.from_linter, issue.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IssuePosition;
    use tower_lsp::lsp_types::Position;

    fn create_test_issue(line: i64, column: i64, severity: &str) -> Issue {
        Issue {
            from_linter: "errcheck".to_string(),
            text: "Error return value is not checked".to_string(),
            severity: severity.to_string(),
            pos: IssuePosition {
                filename: "main.go".to_string(),
                line,
                column,
            },
        }
    }

    #[test]
    fn test_severity_conversion() {
        assert_eq!(severity_to_lsp(Severity::Error), DiagnosticSeverity::ERROR);
        assert_eq!(
            severity_to_lsp(Severity::Warning),
            DiagnosticSeverity::WARNING
        );
        assert_eq!(
            severity_to_lsp(Severity::Information),
            DiagnosticSeverity::INFORMATION
        );
        assert_eq!(severity_to_lsp(Severity::Hint), DiagnosticSeverity::HINT);
    }

    #[test]
    fn test_diagnostic_position_is_zero_based() {
        let issue = create_test_issue(3, 5, "");
        let diagnostic = issue_to_diagnostic(&issue, &ServerOptions::default());

        assert_eq!(diagnostic.range.start, Position::new(2, 4));
        assert_eq!(diagnostic.range.end, Position::new(2, 4));
        assert_eq!(diagnostic.source, Some("errcheck".to_string()));
    }

    #[test]
    fn test_diagnostic_default_severity() {
        let issue = create_test_issue(1, 1, "");
        let options = ServerOptions {
            default_severity: Severity::Information,
            ..Default::default()
        };
        let diagnostic = issue_to_diagnostic(&issue, &options);
        assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::INFORMATION));
    }

    #[test]
    fn test_diagnostic_issue_severity_overrides_default() {
        let issue = create_test_issue(1, 1, "error");
        let diagnostic = issue_to_diagnostic(&issue, &ServerOptions::default());
        assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::ERROR));
    }

    #[test]
    fn test_message_formatting() {
        let issue = create_test_issue(1, 1, "");
        let diagnostic = issue_to_diagnostic(&issue, &ServerOptions::default());
        insta::assert_snapshot!(diagnostic.message, @"errcheck: Error return value is not checked");
    }

    #[test]
    fn test_message_without_linter_name_keeps_source() {
        let issue = create_test_issue(1, 1, "");
        let options = ServerOptions {
            no_linter_name: true,
            ..Default::default()
        };
        let diagnostic = issue_to_diagnostic(&issue, &options);
        insta::assert_snapshot!(diagnostic.message, @"Error return value is not checked");
        assert_eq!(diagnostic.source, Some("errcheck".to_string()));
    }

    #[test]
    fn test_failure_diagnostic() {
        let diagnostics = lint_result_to_diagnostics(
            Err(Error::ToolFailed("panic: x".to_string())),
            &ServerOptions::default(),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Some(DiagnosticSeverity::ERROR));
        assert_eq!(diagnostics[0].message, "panic: x");
        assert_eq!(diagnostics[0].range.start, Position::new(0, 0));
    }

    #[test]
    fn test_empty_result_clears() {
        let diagnostics = lint_result_to_diagnostics(Ok(Vec::new()), &ServerOptions::default());
        assert!(diagnostics.is_empty());
    }
}

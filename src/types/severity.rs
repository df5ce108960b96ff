//! Issue severity levels

use std::fmt;
use std::str::FromStr;

/// Severity level attached to a published diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Error level
    Error,
    /// Warning level
    #[default]
    Warning,
    /// Information level
    Information,
    /// Hint level
    Hint,
}

impl Severity {
    /// Resolve the severity string golangci-lint attached to an issue.
    ///
    /// An empty string means the issue carried no severity and `default`
    /// applies. Unrecognized values are treated as warnings.
    pub fn from_issue(raw: &str, default: Severity) -> Self {
        if raw.is_empty() {
            return default;
        }
        raw.parse().unwrap_or(Severity::Warning)
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "err" | "error" => Ok(Severity::Error),
            "warn" | "warning" => Ok(Severity::Warning),
            "info" | "information" => Ok(Severity::Information),
            "hint" => Ok(Severity::Hint),
            other => Err(format!(
                "unknown severity '{}' (expected err, warn, info or hint)",
                other
            )),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Information => write!(f, "information"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("Err".parse(), Ok(Severity::Error));
        assert_eq!("error".parse(), Ok(Severity::Error));
        assert_eq!("Warn".parse(), Ok(Severity::Warning));
        assert_eq!("WARNING".parse(), Ok(Severity::Warning));
        assert_eq!("info".parse(), Ok(Severity::Information));
        assert_eq!("Information".parse(), Ok(Severity::Information));
        assert_eq!("hint".parse(), Ok(Severity::Hint));
    }

    #[test]
    fn test_parse_unknown_is_error() {
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_from_issue_uses_default_when_empty() {
        assert_eq!(Severity::from_issue("", Severity::Hint), Severity::Hint);
        assert_eq!(Severity::from_issue("error", Severity::Hint), Severity::Error);
    }

    #[test]
    fn test_from_issue_unknown_is_warning() {
        assert_eq!(
            Severity::from_issue("critical", Severity::Error),
            Severity::Warning
        );
    }
}

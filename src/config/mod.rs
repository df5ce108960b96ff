//! Server and golangci-lint invocation configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::{Error, Result, Severity};

/// Command used when the client does not supply `initializationOptions.command`
pub const DEFAULT_COMMAND: [&str; 4] = [
    "golangci-lint",
    "run",
    "--out-format=json",
    "--issues-exit-code=1",
];

/// Options resolved once at startup and passed by value into the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerOptions {
    /// Omit the linter name from diagnostic messages
    pub no_linter_name: bool,
    /// Severity for issues that carry none
    pub default_severity: Severity,
}

/// Client-supplied `initializationOptions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializationOptions {
    /// golangci-lint invocation, program first
    #[serde(default)]
    pub command: Vec<String>,
}

impl InitializationOptions {
    /// Decode the raw `initializationOptions` value; absent or `null` yields defaults
    pub fn from_value(value: Option<serde_json::Value>) -> Result<Self> {
        match value {
            None | Some(serde_json::Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| Error::InvalidInitializationOptions(e.to_string())),
        }
    }

    /// The configured command, or [`DEFAULT_COMMAND`] when none was given
    pub fn command_or_default(self) -> Vec<String> {
        if self.command.is_empty() {
            DEFAULT_COMMAND.iter().map(|s| s.to_string()).collect()
        } else {
            self.command
        }
    }
}

/// Value of golangci-lint's `--path-mode` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathMode {
    /// Paths relative to the tool's base directory
    #[default]
    Default,
    /// `--path-mode=abs`
    Abs,
}

impl PathMode {
    fn parse(value: &str) -> Self {
        if value == "abs" {
            PathMode::Abs
        } else {
            PathMode::Default
        }
    }
}

/// Path-related flags parsed from the golangci-lint command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathConfig {
    /// `--path-mode`
    pub path_mode: PathMode,
    /// Directory containing the file named by `--config`
    pub config_dir: Option<PathBuf>,
    /// `--no-config`
    pub no_config: bool,
}

impl PathConfig {
    /// Scan `command` left to right; later flags overwrite earlier ones.
    pub fn from_command<S: AsRef<str>>(command: &[S]) -> Self {
        let mut config = PathConfig::default();

        for (i, arg) in command.iter().enumerate() {
            let arg = arg.as_ref();
            let next = command.get(i + 1).map(AsRef::as_ref);

            if let Some(value) = flag_value(arg, "--path-mode", next) {
                config.path_mode = PathMode::parse(value);
            }

            if let Some(value) =
                flag_value(arg, "--config", next).or_else(|| flag_value(arg, "-c", next))
            {
                config.config_dir = Some(containing_dir(value));
            }

            if arg == "--no-config" {
                config.no_config = true;
            }
        }

        config
    }

    /// Directory that relative issue paths are resolved against.
    ///
    /// `cmd_dir` is the working directory the tool was started in. `None`
    /// means paths are expected to be absolute already.
    pub fn base_dir(&self, cmd_dir: &Path, root_dir: Option<&Path>) -> Option<PathBuf> {
        if self.path_mode == PathMode::Abs {
            return None;
        }

        if self.no_config {
            return Some(cmd_dir.to_path_buf());
        }

        if let Some(config_dir) = &self.config_dir {
            return Some(cmd_dir.join(config_dir));
        }

        Some(root_dir.unwrap_or(cmd_dir).to_path_buf())
    }
}

/// Match `--flag=value` or `--flag value`
fn flag_value<'a>(arg: &'a str, flag: &str, next: Option<&'a str>) -> Option<&'a str> {
    match arg.strip_prefix(flag)? {
        "" => next,
        rest => rest.strip_prefix('='),
    }
}

fn containing_dir(file: &str) -> PathBuf {
    let path = Path::new(file);
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None if path.as_os_str().is_empty() => PathBuf::from("."),
        None => path.to_path_buf(),
    }
}

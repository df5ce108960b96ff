//! Building and running the golangci-lint command for a document

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use super::classify::ToolOutput;
use crate::config::DEFAULT_COMMAND;
use crate::types::{Error, Result};

/// A fully resolved golangci-lint invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute
    pub program: String,
    /// Configured arguments followed by the document's directory
    pub args: Vec<OsString>,
    /// Working directory for the process
    pub cwd: PathBuf,
}

impl Invocation {
    /// Build the invocation that lints the directory containing `document`.
    ///
    /// The tool runs in `root_dir` when the document lives under it, and in
    /// the document's own directory otherwise.
    pub fn new(command: &[String], document: &Path, root_dir: Option<&Path>) -> Self {
        let mut parts = command.iter();
        let program = parts
            .next()
            .cloned()
            .unwrap_or_else(|| DEFAULT_COMMAND[0].to_string());

        let dir = document_dir(document);
        let mut args: Vec<OsString> = parts.map(OsString::from).collect();
        args.push(dir.clone().into_os_string());

        let cwd = match root_dir {
            Some(root) if has_prefix(document, root) => root.to_path_buf(),
            _ => dir,
        };

        Self { program, args, cwd }
    }

    /// Run the command to completion, capturing stdout and stderr.
    ///
    /// There is no timeout; a hung tool blocks the caller until it exits.
    pub async fn run(&self) -> Result<ToolOutput> {
        log::debug!(
            "running {} {:?} in {}",
            self.program,
            self.args,
            self.cwd.display()
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(ToolOutput::from_output(output))
    }
}

fn document_dir(document: &Path) -> PathBuf {
    match document.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Plain string prefix test, not component-aware
fn has_prefix(path: &Path, prefix: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .starts_with(prefix.as_os_str().as_encoded_bytes())
}

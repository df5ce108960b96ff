//! Running golangci-lint for a single document
//!
//! One run lints the document's whole directory; [`Linter::lint`] narrows the
//! result down to the issues that belong to the document itself.

pub mod classify;
pub mod invoker;
pub mod paths;

pub use classify::{NO_GO_FILES_EXIT_CODE, ToolOutput, classify};
pub use invoker::Invocation;
pub use paths::{PathResolver, clean_path};

use std::path::{Path, PathBuf};

use crate::config::PathConfig;
use crate::types::{Error, Issue, Result};

/// Per-connection golangci-lint settings
#[derive(Debug, Clone)]
pub struct Linter {
    command: Vec<String>,
    root_dir: Option<PathBuf>,
    path_config: PathConfig,
}

impl Linter {
    /// Create a linter for `command`, deriving its path flags once
    pub fn new(command: Vec<String>, root_dir: Option<PathBuf>) -> Self {
        let path_config = PathConfig::from_command(&command);
        Self {
            command,
            root_dir,
            path_config,
        }
    }

    /// The configured command
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// The workspace root, if the client sent one
    pub fn root_dir(&self) -> Option<&Path> {
        self.root_dir.as_deref()
    }

    /// Path flags parsed from the command
    pub fn path_config(&self) -> &PathConfig {
        &self.path_config
    }

    /// The invocation that would lint `document`
    pub fn invocation(&self, document: &Path) -> Invocation {
        Invocation::new(&self.command, document, self.root_dir())
    }

    /// Lint `document` and return the issues reported for it, in tool order
    pub async fn lint(&self, document: &Path) -> Result<Vec<Issue>> {
        let invocation = self.invocation(document);
        let output = invocation.run().await?;
        let issues = classify(&output)?;

        let base_dir = self.path_config.base_dir(&invocation.cwd, self.root_dir());
        let resolver =
            PathResolver::new(document, base_dir).map_err(|source| Error::TargetPath {
                path: document.display().to_string(),
                source,
            })?;

        let total = issues.len();
        let matched: Vec<Issue> = issues
            .into_iter()
            .filter(|issue| resolver.matches(&issue.pos.filename))
            .collect();

        log::debug!(
            "{}: {} of {} issues matched",
            resolver.target().display(),
            matched.len(),
            total
        );
        Ok(matched)
    }
}

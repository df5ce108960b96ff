//! # golangci-lint-langserver
//!
//! A Language Server that runs [golangci-lint](https://golangci-lint.run)
//! when a Go file is opened or saved and publishes the issues it reports as
//! LSP diagnostics.
//!
//! ## How a lint runs
//!
//! 1. The editor opens or saves a document; its URI is queued.
//! 2. A single worker runs the configured command with the document's
//!    directory appended, in the workspace root when the document lives
//!    under it.
//! 3. The JSON report on stdout is parsed. A failed run with nothing on
//!    stdout becomes one error diagnostic carrying stderr.
//! 4. Reported file names are resolved against the directory golangci-lint
//!    used as its base (which depends on `--path-mode`, `--config` and
//!    `--no-config`) and only issues for the document are kept.
//! 5. The full diagnostic list for the document is published.
//!
//! ## Configuration
//!
//! The command comes from `initializationOptions`:
//!
//! ```json
//! {
//!   "command": ["golangci-lint", "run", "--out-format=json", "--issues-exit-code=1"]
//! }
//! ```
//!
//! ## Linting without a server
//!
//! ```rust,no_run
//! use golangci_lint_langserver::lint::Linter;
//! use std::path::{Path, PathBuf};
//!
//! # async fn run() -> golangci_lint_langserver::Result<()> {
//! let linter = Linter::new(
//!     vec!["golangci-lint".into(), "run".into(), "--out-format=json".into()],
//!     Some(PathBuf::from("/src/project")),
//! );
//! for issue in linter.lint(Path::new("/src/project/main.go")).await? {
//!     println!("{}:{}: {}", issue.pos.line, issue.from_linter, issue.text);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod lint;
pub mod lsp;
pub mod types;

// Re-export main types
pub use config::{PathConfig, PathMode, ServerOptions};
pub use lint::Linter;
pub use types::{Error, Issue, Result, Severity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}

//! Error types for golangci-lint-langserver

/// Main error type for lint orchestration
///
/// The `Display` text of every variant except [`Error::InvalidUri`] doubles as
/// the message of the synthetic diagnostic published when a lint fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external tool could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was executed
        program: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The tool exited unsuccessfully without producing a report
    #[error("{0}")]
    ToolFailed(String),

    /// stdout was present but was not a golangci-lint JSON report
    #[error("failed to parse golangci-lint output: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    /// The triggering document's absolute path could not be determined
    #[error("failed to resolve document path {path}: {source}")]
    TargetPath {
        /// Path as derived from the document URI
        path: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The document URI does not name a local file
    #[error("not a file URI: {0}")]
    InvalidUri(String),

    /// The request queue no longer accepts submissions
    #[error("lint queue is closed")]
    QueueClosed,

    /// `initializationOptions` did not match the expected shape
    #[error("invalid initializationOptions: {0}")]
    InvalidInitializationOptions(String),
}

/// Result type alias for lint operations
pub type Result<T> = std::result::Result<T, Error>;

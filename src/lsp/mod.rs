//! Language Server Protocol (LSP) implementation for golangci-lint
//!
//! This module provides the LSP server:
//! - Lints on file open and save (the file as written to disk)
//! - One lint at a time per connection, in request order
//! - Full diagnostic replacement per document on every run
//!
//! # Example
//!
//! ```ignore
//! # use golangci_lint_langserver::config::ServerOptions;
//! # use golangci_lint_langserver::lsp::GolangciLintLanguageServer;
//! # use tower_lsp::{LspService, Server};
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let stdin = tokio::io::stdin();
//! let stdout = tokio::io::stdout();
//!
//! let (service, socket) = LspService::new(|client| {
//!     GolangciLintLanguageServer::new(client, ServerOptions::default())
//! });
//!
//! Server::new(stdin, stdout, socket).serve(service).await;
//! # Ok(())
//! # }
//! ```

mod backend;
pub mod diagnostics;
mod queue;
mod utils;
mod worker;

pub use backend::{GolangciLintLanguageServer, SERVER_NAME, ServerState};
pub use queue::RequestQueue;
pub use utils::{to_position, uri_to_path};
pub use worker::{DiagnosticsSink, LintWorker};

//! Lint worker: runs one queued request and publishes the result

use std::sync::Arc;

use tower_lsp::Client;
use tower_lsp::lsp_types::{Diagnostic, Url};

use super::{diagnostics, utils::uri_to_path};
use crate::config::ServerOptions;
use crate::lint::Linter;

/// Destination for `textDocument/publishDiagnostics`
#[tower_lsp::async_trait]
pub trait DiagnosticsSink: Send + Sync + 'static {
    /// Replace all diagnostics for `uri`. Fire-and-forget: failures are the
    /// sink's to log.
    async fn publish(&self, uri: Url, diagnostics: Vec<Diagnostic>);
}

#[tower_lsp::async_trait]
impl DiagnosticsSink for Client {
    async fn publish(&self, uri: Url, diagnostics: Vec<Diagnostic>) {
        self.publish_diagnostics(uri, diagnostics, None).await;
    }
}

/// Handles lint requests for one connection
pub struct LintWorker<S> {
    sink: S,
    linter: Arc<Linter>,
    options: ServerOptions,
}

impl<S: DiagnosticsSink> LintWorker<S> {
    /// Create a worker publishing to `sink`
    pub fn new(sink: S, linter: Arc<Linter>, options: ServerOptions) -> Self {
        Self {
            sink,
            linter,
            options,
        }
    }

    /// Lint the document at `uri` and publish its full diagnostic list.
    ///
    /// URIs that do not name a local file are logged and skipped.
    pub async fn handle(&self, uri: Url) {
        let path = match uri_to_path(&uri) {
            Ok(path) => path,
            Err(e) => {
                log::error!("lint error: {}", e);
                return;
            }
        };

        let result = self.linter.lint(&path).await;
        if let Err(e) = &result {
            log::debug!("lint of {} failed: {}", path.display(), e);
        }

        let diagnostics = diagnostics::lint_result_to_diagnostics(result, &self.options);
        log::debug!("publishing {} diagnostics for {}", diagnostics.len(), uri);
        self.sink.publish(uri, diagnostics).await;
    }
}

//! LSP backend implementation
//!
//! This module provides the main Language Server implementation.

use super::queue::RequestQueue;
use super::worker::LintWorker;
use crate::config::{InitializationOptions, ServerOptions};
use crate::lint::Linter;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tower_lsp::jsonrpc::{Error, Result};
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

/// Server name reported in `initialize`
pub const SERVER_NAME: &str = "golangci-lint-langserver";

/// Lifecycle of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for `initialize`
    Uninitialized,
    /// Accepting document events
    Initialized,
    /// `shutdown` received, queue closing
    ShuttingDown,
    /// Queue closed; document events are ignored
    Closed,
}

/// State captured by `initialize`, read-only afterwards
struct Connection {
    root_uri: Option<Url>,
    linter: Arc<Linter>,
    queue: RequestQueue<Url>,
}

/// The golangci-lint Language Server
#[derive(Clone)]
pub struct GolangciLintLanguageServer {
    client: Client,
    options: ServerOptions,
    state: Arc<Mutex<ServerState>>,
    connection: Arc<OnceLock<Connection>>,
}

impl GolangciLintLanguageServer {
    /// Create a new language server instance
    pub fn new(client: Client, options: ServerOptions) -> Self {
        Self {
            client,
            options,
            state: Arc::new(Mutex::new(ServerState::Uninitialized)),
            connection: Arc::new(OnceLock::new()),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ServerState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Workspace root URI captured during `initialize`
    pub fn root_uri(&self) -> Option<Url> {
        self.connection.get().and_then(|c| c.root_uri.clone())
    }

    /// Linter configured during `initialize`
    pub fn linter(&self) -> Option<Arc<Linter>> {
        self.connection.get().map(|c| Arc::clone(&c.linter))
    }

    fn set_state(&self, state: ServerState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Queue a lint of `uri`; returns once the worker has room for it
    async fn enqueue(&self, uri: Url) {
        let state = self.state();
        if state != ServerState::Initialized {
            log::warn!("ignoring lint request for {} in state {:?}", uri, state);
            return;
        }
        let Some(connection) = self.connection.get() else {
            return;
        };

        let label = uri.to_string();
        if let Err(e) = connection.queue.submit(uri).await {
            log::error!("failed to queue lint for {}: {}", label, e);
        }
    }
}

/// Workspace root from `rootUri`, the first workspace folder, or the deprecated `rootPath`
fn root_uri_from_params(params: &InitializeParams) -> Option<Url> {
    if let Some(uri) = &params.root_uri {
        return Some(uri.clone());
    }
    if let Some(folder) = params.workspace_folders.as_ref().and_then(|f| f.first()) {
        return Some(folder.uri.clone());
    }
    #[allow(deprecated)]
    let root_path = params.root_path.as_ref();
    root_path.and_then(|path| Url::from_directory_path(PathBuf::from(path)).ok())
}

#[tower_lsp::async_trait]
impl LanguageServer for GolangciLintLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if self.state() != ServerState::Uninitialized {
            return Err(Error::invalid_request());
        }

        let init_options = InitializationOptions::from_value(params.initialization_options.clone())
            .map_err(|e| Error::invalid_params(e.to_string()))?;

        let root_uri = root_uri_from_params(&params);
        let root_dir = root_uri.as_ref().and_then(|uri| uri.to_file_path().ok());
        let linter = Arc::new(Linter::new(init_options.command_or_default(), root_dir));

        log::info!(
            "initializing with command {:?}, root {:?}, path config {:?}",
            linter.command(),
            linter.root_dir(),
            linter.path_config()
        );

        let worker = Arc::new(LintWorker::new(
            self.client.clone(),
            Arc::clone(&linter),
            self.options,
        ));
        let queue = RequestQueue::start(move |uri: Url| {
            let worker = Arc::clone(&worker);
            async move { worker.handle(uri).await }
        });

        let connection = Connection {
            root_uri,
            linter,
            queue,
        };
        if let Err(rejected) = self.connection.set(connection) {
            rejected.queue.close();
            return Err(Error::invalid_request());
        }
        self.set_state(ServerState::Initialized);

        self.client
            .log_message(MessageType::INFO, "golangci-lint-langserver initializing")
            .await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::NONE),
                        save: Some(TextDocumentSyncSaveOptions::Supported(true)),
                        ..Default::default()
                    },
                )),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "golangci-lint-langserver initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.set_state(ServerState::ShuttingDown);
        if let Some(connection) = self.connection.get() {
            connection.queue.close();
        }
        self.set_state(ServerState::Closed);

        self.client
            .log_message(MessageType::INFO, "golangci-lint-langserver shutting down")
            .await;
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.enqueue(params.text_document.uri).await;
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        self.enqueue(params.text_document.uri).await;
    }

    async fn did_change(&self, _: DidChangeTextDocumentParams) {}

    async fn did_close(&self, _: DidCloseTextDocumentParams) {}

    async fn did_change_configuration(&self, _: DidChangeConfigurationParams) {}
}

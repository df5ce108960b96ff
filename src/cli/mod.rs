//! CLI entry point: logging setup and the stdio language server

mod args;

use anyhow::Context;
use args::Args;
use golangci_lint_langserver::lsp::GolangciLintLanguageServer;
use tower_lsp::{LspService, Server};

/// Parse args, set up logging and serve LSP over stdio until the client disconnects
pub async fn run() -> anyhow::Result<()> {
    let args = Args::parse_env();
    init_logging(args.debug)?;

    let options = args.server_options();
    log::info!("golangci-lint-langserver: connections opened");

    // Create stdio transport
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(move |client| GolangciLintLanguageServer::new(client, options));
    Server::new(stdin, stdout, socket).serve(service).await;

    log::info!("golangci-lint-langserver: connections closed");
    Ok(())
}

/// Log to stderr (stdout is used for LSP communication); `RUST_LOG` overrides the level
fn init_logging(debug: bool) -> anyhow::Result<()> {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .try_init()
        .context("failed to initialize logging")
}

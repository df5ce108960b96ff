//! golangci-lint Language Server Protocol (LSP) server
//!
//! This binary provides LSP support for golangci-lint, enabling
//! diagnostics on open and save in editors like VS Code, Neovim, and others.

#[cfg(feature = "cli")]
mod cli;

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}

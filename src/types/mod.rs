//! Core type definitions for golangci-lint-langserver

mod error;
mod issue;
mod severity;

pub use error::*;
pub use issue::*;
pub use severity::*;

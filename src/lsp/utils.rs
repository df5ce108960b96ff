//! Utility functions for LSP implementation

use std::path::PathBuf;
use tower_lsp::lsp_types::{Position, Url};

use crate::types::{Error, Result};

/// Convert a file:// URI to a PathBuf
pub fn uri_to_path(uri: &Url) -> Result<PathBuf> {
    uri.to_file_path()
        .map_err(|_| Error::InvalidUri(uri.to_string()))
}

/// Convert 1-based line/column to LSP Position (0-based), clamping at zero
pub fn to_position(line: i64, column: i64) -> Position {
    Position {
        line: to_zero_based(line),
        character: to_zero_based(column),
    }
}

fn to_zero_based(value: i64) -> u32 {
    u32::try_from(value.saturating_sub(1).max(0)).unwrap_or(u32::MAX)
}

//! CLI argument definitions for golangci-lint-langserver

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use golangci_lint_langserver::{ServerOptions, Severity};
use std::ffi::OsString;

/// Long flags that older editor configurations pass with a single dash
const LEGACY_FLAGS: [&str; 3] = ["debug", "nolintername", "severity"];

#[derive(Parser, Debug)]
#[command(name = "golangci-lint-langserver")]
#[command(about = "A language server that publishes golangci-lint issues", long_about = None)]
#[command(version)]
pub(crate) struct Args {
    /// Output debug log
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub(crate) debug: bool,

    /// Don't show a linter name in message
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub(crate) nolintername: bool,

    /// Default severity to use: err(or), warn(ing), info(rmation) or hint
    #[arg(long, default_value = "warn")]
    pub(crate) severity: Severity,
}

impl Args {
    /// Parse the process arguments, accepting single-dash long flags
    pub(crate) fn parse_env() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    pub(crate) fn server_options(&self) -> ServerOptions {
        ServerOptions {
            no_linter_name: self.nolintername,
            default_severity: self.severity,
        }
    }
}

/// Rewrite `-debug`, `-severity=err` and friends to their `--` form
pub(crate) fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("--{}", rest))
            } else {
                arg
            }
        })
        .collect()
}

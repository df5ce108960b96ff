//! Matching issue paths reported by golangci-lint back to the linted document
//!
//! golangci-lint lints a whole directory and reports file names either as
//! absolute paths or relative to a base directory that depends on how it was
//! configured. [`PathResolver`] decides which reported issues belong to the
//! document that triggered the run.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and resolve `..` against
/// preceding components. `..` never climbs above the root.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Make `path` absolute against the process working directory, then clean it
pub fn absolute_clean(path: &Path) -> io::Result<PathBuf> {
    std::path::absolute(path).map(|p| clean_path(&p))
}

/// Decides whether a reported issue path refers to one target document
#[derive(Debug, Clone)]
pub struct PathResolver {
    target: PathBuf,
    base_dir: Option<PathBuf>,
}

impl PathResolver {
    /// Build a resolver for `target`, resolving relative issue paths against
    /// `base_dir` (or the process working directory when `None`).
    pub fn new(target: &Path, base_dir: Option<PathBuf>) -> io::Result<Self> {
        Ok(Self {
            target: absolute_clean(target)?,
            base_dir,
        })
    }

    /// The cleaned absolute target path
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Whether the issue path `reported` belongs to the target document
    pub fn matches(&self, reported: &str) -> bool {
        let reported_path = Path::new(reported);

        if reported_path.is_absolute() {
            return clean_path(reported_path) == self.target;
        }

        let candidate = match &self.base_dir {
            Some(base) => base.join(reported_path),
            None => reported_path.to_path_buf(),
        };
        let candidate = match absolute_clean(&candidate) {
            Ok(candidate) => candidate,
            Err(e) => {
                log::debug!("skipping issue path {}: {}", reported, e);
                return false;
            }
        };

        if candidate == self.target {
            return true;
        }

        self.matches_by_suffix(reported_path, reported)
    }

    /// Recovers issues reported relative to a directory that could not be
    /// inferred (for example a nested module root). Textual, not
    /// component-aware: `a/main.go` also matches `/x/ba/main.go`.
    fn matches_by_suffix(&self, reported_path: &Path, reported: &str) -> bool {
        if reported_path.file_name() != self.target.file_name() {
            return false;
        }
        self.target.to_string_lossy().ends_with(reported)
    }
}

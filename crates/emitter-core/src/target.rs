//! Output destination handling

use std::path::{Path, PathBuf};

/// The caller-supplied path the payload is written to.
///
/// Unlike most path wrappers this does no normalization: the path is kept
/// exactly as given so messages echo it back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputTarget {
    path: PathBuf,
}

impl OutputTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for OutputTarget {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<&str> for OutputTarget {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for OutputTarget {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for OutputTarget {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for OutputTarget {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

//! Document types

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A JSON document supplied by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Document stored in a file
    Path(PathBuf),
    /// Document content held in memory
    Inline(String),
}

impl Document {
    /// Document backed by a file
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }

    /// Document backed by a string
    pub fn inline(content: impl Into<String>) -> Self {
        Self::Inline(content.into())
    }

    /// Read the full document content
    pub fn read(&self) -> io::Result<String> {
        match self {
            Self::Path(path) => fs::read_to_string(path),
            Self::Inline(content) => Ok(content.clone()),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Inline(_) => write!(f, "<inline>"),
        }
    }
}

//! In-memory source files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::scanner::FunctionScanner;
use crate::error::FnlocError;
use crate::Result;

/// A source file read fully into memory and split into lines.
///
/// Lines are split on `\n` only, so line `i` of [`SourceFile::lines`] is line
/// `i + 1` in an editor. The content is never modified after reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceFile {
    /// Read a file from disk.
    ///
    /// Fails with [`FnlocError::FileRead`] if the file cannot be opened or is
    /// not valid UTF-8.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| FnlocError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_text(path, &text))
    }

    /// Build a source file from text already in memory.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterate over the functions defined in this file, in file order.
    ///
    /// Each call starts a fresh scan from the first line.
    pub fn functions(&self) -> FunctionScanner<'_> {
        FunctionScanner::new(self)
    }
}

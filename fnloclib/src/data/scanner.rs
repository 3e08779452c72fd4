//! Per-file function discovery.
//!
//! [`FunctionScanner`] pairs each signature with its body: it finds the
//! opening brace, then the brace that closes it, and emits a
//! [`FunctionRecord`] spanning from the signature line to the closing line.
//! Matching then resumes on the line after the body, so functions nested
//! inside another function's body are not reported on their own.
//!
//! Signatures whose body cannot be located (no opening brace before end of
//! file, or braces that never balance) produce no record; scanning resumes on
//! the line after the signature.

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::source::file::SourceFile;

use super::lexer::{find_matching_close, find_opening_brace};
use super::signature::Signatures;

/// A function located in a source file.
///
/// Line numbers are 1-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Function name as written in the signature
    pub name: String,
    /// File the function was found in
    pub file_path: PathBuf,
    /// Line of the signature
    pub start_line: usize,
    /// Line of the closing brace
    pub end_line: usize,
    /// `end_line - start_line + 1`
    pub line_count: usize,
}

impl FunctionRecord {
    /// Create a record from 1-based, inclusive line numbers.
    ///
    /// `end_line` must not be before `start_line`.
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<PathBuf>,
        start_line: usize,
        end_line: usize,
    ) -> Self {
        debug_assert!(end_line >= start_line);
        Self {
            name: name.into(),
            file_path: file_path.into(),
            start_line,
            end_line,
            line_count: end_line - start_line + 1,
        }
    }

    /// Line range as `start-end`.
    pub fn range(&self) -> String {
        format!("{}-{}", self.start_line, self.end_line)
    }
}

/// Iterator over the functions of one [`SourceFile`], in file order.
///
/// Created by [`SourceFile::functions`].
#[derive(Debug, Clone)]
pub struct FunctionScanner<'a> {
    path: &'a Path,
    lines: &'a [String],
    signatures: Signatures<'a, String>,
}

impl<'a> FunctionScanner<'a> {
    pub fn new(file: &'a SourceFile) -> Self {
        Self {
            path: file.path(),
            lines: file.lines(),
            signatures: Signatures::new(file.lines()),
        }
    }
}

impl Iterator for FunctionScanner<'_> {
    type Item = FunctionRecord;

    fn next(&mut self) -> Option<FunctionRecord> {
        while let Some((line_no, signature)) = self.signatures.next() {
            let end = find_opening_brace(self.lines, line_no)
                .and_then(|open| find_matching_close(self.lines, open));

            match end {
                Some(end_line) => {
                    self.signatures.resume_at(end_line + 1);
                    return Some(FunctionRecord::new(
                        signature.name,
                        self.path,
                        line_no + 1,
                        end_line + 1,
                    ));
                }
                None => debug!(
                    path = %self.path.display(),
                    line = line_no + 1,
                    name = signature.name,
                    "no function body found, skipping signature"
                ),
            }
        }
        None
    }
}

impl FusedIterator for FunctionScanner<'_> {}

/// Scan source text that is already in memory.
pub fn scan_source(path: impl Into<PathBuf>, text: &str) -> Vec<FunctionRecord> {
    SourceFile::from_text(path, text).functions().collect()
}

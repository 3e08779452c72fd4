//! File filtering and discovery with glob pattern support.
//!
//! This module finds the source files to scan under a root directory,
//! honouring a file extension and optional include/exclude glob patterns.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::FnlocError;
use crate::Result;

/// Extension scanned when none is configured.
pub const DEFAULT_EXTENSION: &str = "rs";

/// Configuration for file filtering.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// File extension to scan, without the leading dot
    pub extension: String,
    /// Glob patterns to include (if empty, include every file with the extension)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Create a new filter config that accepts every `.rs` file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan files with a different extension. A leading dot is ignored.
    pub fn extension(mut self, ext: &str) -> Self {
        self.extension = ext.trim_start_matches('.').to_string();
        self
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check if a path matches the filter criteria.
    ///
    /// A path matches if:
    /// 1. It has the configured extension
    /// 2. It matches at least one include pattern (or include is empty)
    /// 3. It doesn't match any exclude pattern
    pub fn matches(&self, path: &Path) -> bool {
        if path
            .extension()
            .is_none_or(|ext| ext != self.extension.as_str())
        {
            return false;
        }

        let path_str = path.to_string_lossy();

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(&path_str))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| FnlocError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Check if a directory should be skipped during traversal.
fn should_skip_dir(name: &str) -> bool {
    // Skip hidden directories and target/
    name.starts_with('.') || name == "target"
}

/// Discover source files under `root`.
///
/// Walks the directory tree and returns every file that matches the filter,
/// sorted so that repeated runs enumerate files in the same order. A root that
/// is itself a file is returned on its own if it matches.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(FnlocError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        if filter.matches(root) {
            files.push(root.to_path_buf());
        }
        return Ok(files);
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !should_skip_dir(name);
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if path.is_file() && filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    Ok(files)
}

//! High-level scanning API.
//!
//! This module provides the main entry points for finding functions in a
//! source tree or in a single file.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::FnlocError;
use crate::source::file::SourceFile;
use crate::source::filter::{discover_files, FilterConfig};
use crate::Result;

use super::scanner::FunctionRecord;

/// Options for scanning a source tree.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// File filter configuration
    pub file_filter: FilterConfig,
    /// Number of worker threads (`None` = rayon's default, `Some(1)` = sequential)
    pub jobs: Option<usize>,
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Limit the number of worker threads.
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }
}

/// A file that was discovered but could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of scanning a source tree.
///
/// `functions` is in discovery order: files in sorted path order, then
/// functions in file order. Filtering and sorting happen in the query stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Number of files discovered, including skipped ones
    pub file_count: usize,
    /// Every function found
    pub functions: Vec<FunctionRecord>,
    /// Files that could not be read
    pub skipped: Vec<SkippedFile>,
}

impl ScanResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Find every function under `root`.
///
/// Files are scanned in parallel, but results are collected in the sorted
/// discovery order, so the outcome is the same for any number of workers.
/// Unreadable files are logged, listed in [`ScanResult::skipped`], and do not
/// stop the scan.
///
/// # Example
///
/// ```rust
/// use fnloclib::{scan_directory, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("lib.rs"), "fn one() {\n    1\n}\n").unwrap();
///
/// let result = scan_directory(dir.path(), &ScanOptions::new()).unwrap();
/// assert_eq!(result.functions.len(), 1);
/// assert_eq!(result.functions[0].line_count, 3);
/// ```
pub fn scan_directory(root: impl AsRef<Path>, options: &ScanOptions) -> Result<ScanResult> {
    let files = discover_files(root, &options.file_filter)?;

    // Indexed collect keeps `outcomes[i]` aligned with `files[i]` regardless
    // of which worker finished first.
    let outcomes: Vec<Result<Vec<FunctionRecord>>> = match options.jobs {
        Some(1) => files.iter().map(scan_file).collect(),
        Some(jobs) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|e| FnlocError::WorkerPool(e.to_string()))?;
            pool.install(|| files.par_iter().map(scan_file).collect())
        }
        None => files.par_iter().map(scan_file).collect(),
    };

    let mut result = ScanResult::new();
    result.file_count = files.len();

    for (path, outcome) in files.into_iter().zip(outcomes) {
        match outcome {
            Ok(functions) => {
                debug!(path = %path.display(), functions = functions.len(), "scanned file");
                result.functions.extend(functions);
            }
            Err(e) => {
                warn!("{e}");
                result.skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(result)
}

/// Find every function in a single file.
pub fn scan_file(path: impl AsRef<Path>) -> Result<Vec<FunctionRecord>> {
    let file = SourceFile::read(path)?;
    Ok(file.functions().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_source_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_project(root: &Path) {
        create_source_file(
            &root.join("src/main.rs"),
            r#"fn main() {
    let greeting = "{ hello }";
    println!("{}", greeting);
}
"#,
        );
        create_source_file(
            &root.join("src/lib.rs"),
            r#"pub fn short() {}

pub fn longer() {
    let x = 1;
    let y = 2;
    x + y
}
"#,
        );
        create_source_file(
            &root.join("src/util/mod.rs"),
            r#"pub(crate) fn helper() {
    // }
}
"#,
        );
    }

    fn names(result: &ScanResult) -> Vec<&str> {
        result.functions.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_scan_directory_discovery_order() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let result = scan_directory(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(result.file_count, 3);
        assert!(result.skipped.is_empty());
        // lib.rs < main.rs < util/mod.rs
        assert_eq!(names(&result), vec!["short", "longer", "main", "helper"]);
    }

    #[test]
    fn test_scan_directory_same_result_for_any_job_count() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let sequential = scan_directory(temp.path(), &ScanOptions::new().jobs(1)).unwrap();
        let pooled = scan_directory(temp.path(), &ScanOptions::new().jobs(4)).unwrap();
        let default = scan_directory(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(sequential, pooled);
        assert_eq!(sequential, default);
    }

    #[test]
    fn test_scan_directory_skips_unreadable_file() {
        let temp = tempdir().unwrap();
        create_project(temp.path());
        fs::write(temp.path().join("src/bad.rs"), [0xff, 0xfe, 0x00]).unwrap();

        let result = scan_directory(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(result.file_count, 4);
        assert_eq!(result.skipped.len(), 1);
        assert!(result.skipped[0].path.ends_with("src/bad.rs"));
        assert!(result.skipped[0].reason.contains("failed to read file"));
        assert_eq!(result.functions.len(), 4);
    }

    #[test]
    fn test_scan_directory_missing_root() {
        let result = scan_directory("/nonexistent/src", &ScanOptions::new());

        assert!(matches!(result, Err(FnlocError::PathNotFound(_))));
    }

    #[test]
    fn test_scan_directory_with_filter() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let filter = FilterConfig::new().exclude("**/util/**").unwrap();
        let result = scan_directory(temp.path(), &ScanOptions::new().filter(filter)).unwrap();

        assert_eq!(result.file_count, 2);
        assert!(!names(&result).contains(&"helper"));
    }

    #[test]
    fn test_scan_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("one.rs");
        create_source_file(&path, "fn one() {\n    1\n}\n");

        let functions = scan_file(&path).unwrap();

        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0].file_path, path);
        assert_eq!((functions[0].start_line, functions[0].end_line), (1, 3));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let first = scan_directory(temp.path(), &ScanOptions::new()).unwrap();
        let second = scan_directory(temp.path(), &ScanOptions::new()).unwrap();

        assert_eq!(first, second);
    }
}

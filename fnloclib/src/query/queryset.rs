//! Query set: scan results ready for table rendering.
//!
//! A query set sits between the raw scan result and the final table output.
//! It holds the functions that passed the length threshold, longest first.
//!
//! The data pipeline is:
//! 1. Raw Data (ScanResult)
//! 2. QuerySet (filtered, sorted)
//! 3. FunctionTable (formatted strings for display)

use serde::{Deserialize, Serialize};

use crate::data::counter::{ScanResult, SkippedFile};
use crate::data::scanner::FunctionRecord;

/// Functions selected for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionQuerySet {
    /// Exclusive threshold: only functions with more lines than this are kept
    pub min_lines: usize,
    /// Number of files analyzed
    pub file_count: usize,
    /// Kept functions, longest first
    pub functions: Vec<FunctionRecord>,
    /// Files that could not be read
    pub skipped: Vec<SkippedFile>,
}

impl FunctionQuerySet {
    /// Create a QuerySet from a ScanResult.
    pub fn from_result(result: &ScanResult, min_lines: usize) -> Self {
        FunctionQuerySet {
            min_lines,
            file_count: result.file_count,
            functions: select_longest(result.functions.clone(), min_lines),
            skipped: result.skipped.clone(),
        }
    }
}

/// Keep functions longer than `min_lines` lines and order them longest first.
///
/// The sort is stable: functions of equal length keep their input order.
/// A threshold of 0 keeps every function.
pub fn select_longest(mut functions: Vec<FunctionRecord>, min_lines: usize) -> Vec<FunctionRecord> {
    functions.retain(|f| f.line_count > min_lines);
    functions.sort_by(|a, b| b.line_count.cmp(&a.line_count));
    functions
}

//! # fnloclib
//!
//! Find function definitions in Rust source files and measure how many lines
//! each one spans.
//!
//! ## Overview
//!
//! The scanner does not parse Rust. It recognizes function headers line by
//! line and then matches braces to find where each body ends, skipping braces
//! that appear inside string literals and comments. This is fast, needs no
//! compiler front end, and is accurate for ordinary code.
//!
//! The library is organised as a pipeline:
//!
//! - **source**: discover files and read them into memory
//! - **data**: lex, match signatures, and collect [`FunctionRecord`]s
//! - **query**: apply a minimum length and order longest first
//! - **output**: build a presentation-ready [`FunctionTable`]
//!
//! ## Example
//!
//! ```rust
//! use fnloclib::{scan_source, FunctionQuerySet, ScanResult};
//!
//! let text = "\
//! fn short() {}
//!
//! fn longer() {
//!     let braces = \"{ }\";
//!     braces.len()
//! }
//! ";
//!
//! let functions = scan_source("src/lib.rs", text);
//! assert_eq!(functions.len(), 2);
//! assert_eq!(functions[1].name, "longer");
//! assert_eq!((functions[1].start_line, functions[1].end_line), (3, 6));
//!
//! let result = ScanResult { file_count: 1, functions, skipped: Vec::new() };
//! let longest = FunctionQuerySet::from_result(&result, 1);
//! assert_eq!(longest.functions.len(), 1);
//! assert_eq!(longest.functions[0].line_count, 4);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    parse_signature, scan_directory, scan_file, scan_source, FunctionRecord, FunctionScanner,
    ScanOptions, ScanResult, Signature, SkippedFile, Visibility,
};
pub use error::FnlocError;
pub use output::{FunctionTable, TableRow};
pub use query::FunctionQuerySet;
pub use source::{discover_files, FilterConfig, SourceFile};

/// Result type for fnloclib operations
pub type Result<T> = std::result::Result<T, FnlocError>;

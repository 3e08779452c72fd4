//! Data collection: find functions and measure them.
//!
//! This module handles the second stage of the pipeline - scanning source
//! files for function definitions. It provides:
//!
//! - **Lexing**: brace matching that skips strings and comments (`lexer`)
//! - **Signatures**: line-anchored recognition of `fn` headers (`signature`)
//! - **Scanning**: per-file function iterator and records (`scanner`)
//! - **Counting**: multi-file API (`scan_directory`, `scan_file`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use fnloclib::data::{scan_directory, ScanOptions};
//!
//! let result = scan_directory("src", &ScanOptions::new())?;
//! println!("Found {} functions", result.functions.len());
//! ```

pub mod counter;
pub mod lexer;
pub mod scanner;
pub mod signature;

pub use counter::{scan_directory, scan_file, ScanOptions, ScanResult, SkippedFile};
pub use lexer::{find_matching_close, find_opening_brace, LexState};
pub use scanner::{scan_source, FunctionRecord, FunctionScanner};
pub use signature::{parse_signature, Signature, Signatures, Visibility};

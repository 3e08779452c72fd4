//! Source discovery: find and read files to analyze.
//!
//! This module handles the first stage of the pipeline - discovering what
//! files to scan. It provides:
//!
//! - **File filtering**: extension plus include/exclude glob patterns
//! - **Source files**: a file read into memory and split into lines
//!
//! ## Example
//!
//! ```rust,ignore
//! use fnloclib::source::{discover_files, FilterConfig};
//!
//! let filter = FilterConfig::new().exclude("**/generated/**")?;
//! let files = discover_files("src", &filter)?;
//! ```

pub mod file;
pub mod filter;

pub use file::SourceFile;
pub use filter::{discover_files, FilterConfig, DEFAULT_EXTENSION};

//! Query processing: filter and sort scan results.
//!
//! This module handles the third stage of the pipeline - turning the raw
//! scan result into the list of functions to report:
//!
//! - **Threshold**: keep functions longer than `min_lines`
//! - **Ordering**: longest first, ties in discovery order
//!
//! ## Example
//!
//! ```rust,ignore
//! use fnloclib::query::FunctionQuerySet;
//!
//! let queryset = FunctionQuerySet::from_result(&result, 20);
//! ```

pub mod queryset;

pub use queryset::{select_longest, FunctionQuerySet};

//! Output formatting: present data as tables.
//!
//! This module handles the fourth and final stage of the pipeline -
//! formatting query results for display. It provides:
//!
//! - **FunctionTable**: Table-ready data structure with headers and rows
//! - **TableRow**: Individual row with label and formatted values
//!
//! FunctionTable is a pure presentation layer - it only formats data into
//! strings. Filtering and sorting happen in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use fnloclib::output::FunctionTable;
//!
//! let table = FunctionTable::from_queryset(&queryset);
//! // table.headers: ["Function", "Path", "Range", "Lines"]
//! // table.rows: [TableRow { label: "parse", values: ["src/lib.rs", "10-42", "33"] }]
//! ```

pub mod table;

pub use table::{FunctionTable, TableRow, HEADERS};

//! Table-ready data structures for function listings.
//!
//! `FunctionTable` is a presentation-ready structure that a renderer can
//! lay out directly or serialize to JSON. It only formats data; filtering and
//! sorting already happened in the query stage.

use serde::{Deserialize, Serialize};

use crate::query::queryset::FunctionQuerySet;

/// Column headers, in display order.
pub const HEADERS: [&str; 4] = ["Function", "Path", "Range", "Lines"];

/// A single row in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Function name
    pub label: String,
    /// File path, `start-end` range and line count, as display strings
    pub values: Vec<String>,
}

/// Table-ready function listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTable {
    /// Column headers: [label_header, path, range, lines]
    pub headers: Vec<String>,
    /// Data rows, in query set order
    pub rows: Vec<TableRow>,
}

impl FunctionTable {
    /// Create a FunctionTable from a FunctionQuerySet.
    pub fn from_queryset(qs: &FunctionQuerySet) -> Self {
        let rows = qs
            .functions
            .iter()
            .map(|f| TableRow {
                label: f.name.clone(),
                values: vec![
                    f.file_path.display().to_string(),
                    f.range(),
                    f.line_count.to_string(),
                ],
            })
            .collect();

        FunctionTable {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

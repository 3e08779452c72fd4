//! Rendering for CLI output.

use console::Style;
use fnloclib::{FunctionQuerySet, FunctionTable};

/// Column widths: function name, path, range, line count.
const NAME_WIDTH: usize = 30;
const PATH_WIDTH: usize = 60;
const RANGE_WIDTH: usize = 15;
const LINES_WIDTH: usize = 6;

/// Width of the rule under the header.
const SEPARATOR_WIDTH: usize = 120;

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "json" => OutputMode::Json,
            _ => OutputMode::Table,
        }
    }
}

/// Lay out one line of the table. Name, path and range are left-aligned, the
/// count is right-aligned; long values are not truncated.
fn format_line(name: &str, path: &str, range: &str, lines: &str) -> String {
    format!(
        "{:<nw$} | {:<pw$} | {:<rw$} | {:>lw$}",
        name,
        path,
        range,
        lines,
        nw = NAME_WIDTH,
        pw = PATH_WIDTH,
        rw = RANGE_WIDTH,
        lw = LINES_WIDTH,
    )
}

/// Render a function table as fixed-width text.
///
/// The header is bold when stdout is a terminal.
pub fn render_table(table: &FunctionTable) -> String {
    let header_style = Style::new().bold();
    let header = match table.headers.as_slice() {
        [name, path, range, lines] => format_line(name, path, range, lines),
        other => other.join(" | "),
    };

    let mut out = String::new();
    out.push_str(&header_style.apply_to(header).to_string());
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');

    for row in &table.rows {
        let value = |i: usize| row.values.get(i).map(String::as_str).unwrap_or("");
        out.push_str(&format_line(&row.label, value(0), value(1), value(2)));
        out.push('\n');
    }

    out
}

/// Render the query set as pretty-printed JSON.
pub fn render_json(qs: &FunctionQuerySet) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(qs)?;
    json.push('\n');
    Ok(json)
}

/// Render the query set in the requested mode.
pub fn render(qs: &FunctionQuerySet, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Table => Ok(render_table(&FunctionTable::from_queryset(qs))),
        OutputMode::Json => Ok(render_json(qs)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnloclib::{FunctionRecord, ScanResult};

    fn queryset() -> FunctionQuerySet {
        let result = ScanResult {
            file_count: 1,
            functions: vec![
                FunctionRecord::new("add", "src/math.rs", 10, 12),
                FunctionRecord::new("scale", "src/math.rs", 14, 19),
            ],
            skipped: Vec::new(),
        };
        FunctionQuerySet::from_result(&result, 0)
    }

    #[test]
    fn test_render_table_layout() {
        let out = render_table(&FunctionTable::from_queryset(&queryset()));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Function"));
        assert_eq!(lines[1], "-".repeat(120));
        assert_eq!(
            lines[2],
            format!("{:<30} | {:<60} | {:<15} | {:>6}", "scale", "src/math.rs", "14-19", 6)
        );
        assert!(lines[3].starts_with("add "));
        assert!(lines[3].ends_with("|      3"));
    }

    #[test]
    fn test_render_empty_table() {
        let qs = FunctionQuerySet::from_result(&ScanResult::new(), 0);
        let out = render_table(&FunctionTable::from_queryset(&qs));

        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn test_render_json() {
        let out = render(&queryset(), OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["file_count"], 1);
        assert_eq!(value["functions"][0]["name"], "scale");
        assert_eq!(value["functions"][1]["line_count"], 3);
    }

    #[test]
    fn test_output_mode_from_arg() {
        assert_eq!(OutputMode::from_arg("json"), OutputMode::Json);
        assert_eq!(OutputMode::from_arg("table"), OutputMode::Table);
    }
}

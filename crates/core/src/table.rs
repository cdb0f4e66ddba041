//! Pipe table rendering into a booktabs `tabular` block.

use crate::cursor::Line;
use crate::error::{MdBeamerError, ParseDiagnostics, ParseWarning, SourceLocation};
use crate::escape::{EscapeMode, escape_with};

/// True for a pipe row that is a header separator (`|---|:---:|`): every cell
/// is a run of at least three dashes with optional alignment colons.
pub fn is_separator_row(line: &str) -> bool {
    if !line.contains('|') {
        return false;
    }
    let cells = split_cells(line);
    !cells.is_empty() && cells.iter().all(|cell| is_separator_cell(cell))
}

fn is_separator_cell(cell: &str) -> bool {
    let dashes = cell.strip_prefix(':').unwrap_or(cell);
    let dashes = dashes.strip_suffix(':').unwrap_or(dashes);
    dashes.len() >= 3 && dashes.bytes().all(|b| b == b'-')
}

/// True for a pipe row that carries cells.
pub fn is_table_row(line: &str) -> bool {
    line.contains('|') && !line.contains("---")
}

/// Split a pipe row into trimmed cells, dropping the empty cells outside the
/// outer pipes.
pub fn split_cells(row: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = row.trim().split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

/// Render `rows` as a `tabular` block; `rows[0]` is the header.
///
/// Data rows render with whatever cells they carry. A row whose count differs
/// from the header is recorded in `diagnostics` but never padded or truncated.
pub fn render_table(
    rows: &[Line<'_>],
    mode: EscapeMode,
    diagnostics: &mut ParseDiagnostics,
) -> Result<String, MdBeamerError> {
    let mut rows = rows.iter().filter(|row| !is_separator_row(row.text));
    let header = rows.next().ok_or(MdBeamerError::MalformedTableBlock)?;

    let header_cells = escape_cells(header.text, mode);
    let columns = header_cells.len();

    let mut out = vec![
        format!(r"\begin{{tabular}}{{{}}}", "l".repeat(columns)),
        r"\toprule".to_string(),
        join_row(&header_cells),
        r"\midrule".to_string(),
    ];

    let mut data_rows = 0usize;
    for row in rows {
        if row.text.trim().is_empty() {
            continue;
        }
        let cells = escape_cells(row.text, mode);
        if cells.len() != columns {
            log::warn!(
                "table row at line {} has {} cells, header has {}",
                row.number,
                cells.len(),
                columns
            );
            diagnostics.add_warning(ParseWarning::RaggedTableRow {
                location: SourceLocation::line_start(row.number),
                expected: columns,
                found: cells.len(),
            });
        }
        out.push(join_row(&cells));
        data_rows += 1;
    }

    out.push(r"\bottomrule".to_string());
    out.push(r"\end{tabular}".to_string());

    log::debug!("rendered table: {} columns, {} data rows", columns, data_rows);
    Ok(out.join("\n"))
}

fn escape_cells(row: &str, mode: EscapeMode) -> Vec<String> {
    split_cells(row)
        .into_iter()
        .map(|cell| escape_with(cell, mode))
        .collect()
}

fn join_row(cells: &[String]) -> String {
    format!(r"{} \\", cells.join(" & "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines<'a>(rows: &[&'a str]) -> Vec<Line<'a>> {
        rows.iter()
            .enumerate()
            .map(|(i, text)| Line {
                number: i + 1,
                text: *text,
            })
            .collect()
    }

    #[test]
    fn splits_cells_between_outer_pipes() {
        assert_eq!(split_cells("| A | B |"), vec!["A", "B"]);
        assert_eq!(split_cells("A | B"), vec!["A", "B"]);
        assert_eq!(split_cells("| a |  | c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn separator_rows_are_recognized_by_shape() {
        assert!(is_separator_row("|---|---|"));
        assert!(is_separator_row("| :--- | ---: | :---: |"));
        assert!(is_separator_row("---|---"));
        assert!(!is_separator_row("| Q1 | --- |"));
        assert!(!is_separator_row("| 2024 --- Q2 | x |"));
        assert!(!is_separator_row("|-|-|"));
        assert!(!is_separator_row("---"));
        assert!(!is_separator_row("||"));
    }

    #[test]
    fn renders_header_and_rows() {
        let mut diagnostics = ParseDiagnostics::new();
        let rows = lines(&["| A | B |", "| 1 | 2 |"]);
        let out = render_table(&rows, EscapeMode::Strict, &mut diagnostics).unwrap();
        assert_eq!(
            out,
            "\\begin{tabular}{ll}\n\\toprule\nA & B \\\\\n\\midrule\n1 & 2 \\\\\n\\bottomrule\n\\end{tabular}"
        );
        assert!(!diagnostics.has_warnings());
    }

    #[test]
    fn skips_separator_rows() {
        let mut diagnostics = ParseDiagnostics::new();
        let rows = lines(&["| A |", "|---|", "| 1 |"]);
        let out = render_table(&rows, EscapeMode::Strict, &mut diagnostics).unwrap();
        assert!(!out.contains("---"));
        assert!(out.contains("1 \\\\"));
    }

    #[test]
    fn escapes_cells() {
        let mut diagnostics = ParseDiagnostics::new();
        let rows = lines(&["| Cost $ | Share % |", "| 5 & 6 | 10_0 |"]);
        let out = render_table(&rows, EscapeMode::Strict, &mut diagnostics).unwrap();
        assert!(out.contains(r"Cost \$ & Share \% \\"));
        assert!(out.contains(r"5 \& 6 & 10\_0 \\"));
    }

    #[test]
    fn ragged_rows_render_and_warn() {
        let mut diagnostics = ParseDiagnostics::new();
        let rows = lines(&["| A | B |", "| 1 | 2 | 3 |"]);
        let out = render_table(&rows, EscapeMode::Strict, &mut diagnostics).unwrap();
        assert!(out.starts_with("\\begin{tabular}{ll}"));
        assert!(out.contains("1 & 2 & 3 \\\\"));
        assert_eq!(
            diagnostics.warnings,
            vec![ParseWarning::RaggedTableRow {
                location: SourceLocation::line_start(2),
                expected: 2,
                found: 3,
            }]
        );
    }

    #[test]
    fn empty_buffer_is_malformed() {
        let mut diagnostics = ParseDiagnostics::new();
        let err = render_table(&[], EscapeMode::Strict, &mut diagnostics).unwrap_err();
        assert!(matches!(err, MdBeamerError::MalformedTableBlock));
    }
}

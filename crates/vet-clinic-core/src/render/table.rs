//! Generic table view.

use super::RenderText;

/// A value that can be shown as one table row.
pub trait TableRow {
    /// Cells in column order.
    fn cells(&self) -> Vec<String>;
}

/// Headers plus rows of cells, in source order.
///
/// Every row has exactly one cell per header: short rows are padded with
/// empty cells, long rows are cut.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    heads: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn new<H, R>(heads: &[H], rows: &[R]) -> Self
    where
        H: AsRef<str>,
        R: TableRow,
    {
        let heads: Vec<String> = heads.iter().map(|h| h.as_ref().to_string()).collect();
        let width = heads.len();
        let rows = rows
            .iter()
            .map(|row| {
                let mut cells = row.cells();
                cells.resize(width, String::new());
                cells
            })
            .collect();

        Self { heads, rows }
    }

    pub fn heads(&self) -> &[String] {
        &self.heads
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn header_count(&self) -> usize {
        self.heads.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column widths in characters.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.heads.iter().map(|h| cell_text(h).chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell_text(cell).chars().count());
            }
        }
        widths
    }
}

impl RenderText for TableView {
    /// Header line, a rule, then one line per row.
    fn render_text(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        out.push_str(&format_line(&self.heads, &widths));
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format_line(row, &widths));
            out.push('\n');
        }

        out
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let text = cell_text(cell);
            let fill = width.saturating_sub(text.chars().count());
            format!("{}{}", text, " ".repeat(fill))
        })
        .collect();
    padded.join(" | ").trim_end().to_string()
}

/// Cells are single-line.
fn cell_text(cell: &str) -> String {
    cell.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, &'static str);

    impl TableRow for Pair {
        fn cells(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_rows_padded_to_header_width() {
        let table = TableView::new(&["A", "B", "Ops"], &[Pair("1", "2")]);
        assert_eq!(table.header_count(), 3);
        assert_eq!(table.rows()[0], vec!["1", "2", ""]);
    }

    #[test]
    fn test_rows_cut_to_header_width() {
        let table = TableView::new(&["A"], &[Pair("1", "2")]);
        assert_eq!(table.rows()[0], vec!["1"]);
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let table = TableView::new(&["Rut", "Nombre"], &[Pair("1-9", "Ana"), Pair("22-2", "Bo")]);
        let text = table.render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Rut  | Nombre");
        assert_eq!(lines[1], "-----+-------");
        assert_eq!(lines[2], "1-9  | Ana");
        assert_eq!(lines[3], "22-2 | Bo");
    }

    #[test]
    fn test_multiline_cells_flattened() {
        let table = TableView::new(&["A"], &[Pair("line\nbreak", "")]);
        assert_eq!(table.render_text().lines().count(), 3);
    }

    #[test]
    fn test_empty_table_renders_header() {
        let table = TableView::new::<_, Pair>(&["A", "B"], &[]);
        assert!(table.is_empty());
        assert_eq!(table.render_text().lines().count(), 2);
    }
}

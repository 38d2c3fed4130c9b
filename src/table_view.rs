// Plain-text table rendering for the terminal
use crate::report::{format_thousands, Cell, Table};

const MAX_MARK: char = '*';

/// Render the table with aligned columns. Numeric cells holding their
/// column's maximum are marked with `*`.
pub fn render(table: &Table) -> String {
    let columns = table.columns();
    if columns.is_empty() {
        return String::new();
    }

    let records = table.records();
    let maxima: Vec<Vec<usize>> = columns.iter().map(|c| table.column_max(c)).collect();

    // rows of rendered cells, plus whether each cell is right-aligned
    let mut grid: Vec<Vec<(String, bool)>> = Vec::with_capacity(records.len());
    for (row_index, record) in records.iter().enumerate() {
        let cells = columns
            .iter()
            .enumerate()
            .map(|(col_index, column)| match record.get(column) {
                Some(Cell::Text(s)) => (s.to_string(), false),
                Some(cell) => {
                    let mut text = cell.to_string();
                    if table.len() > 1 && maxima[col_index].contains(&row_index) {
                        text.push(MAX_MARK);
                    }
                    (text, true)
                }
                None => (String::new(), false),
            })
            .collect();
        grid.push(cells);
    }

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            grid.iter()
                .map(|row| row[i].0.chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| pad(column, width, false))
        .collect();
    out.push_str(header.join(" | ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    for row in &grid {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|((text, right), &width)| pad(text, width, *right))
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    }
    out
}

/// Two summary lines: file count and word total
pub fn render_summary(table: &Table) -> String {
    format!(
        "Files processed: {}\nTotal words: {}\n",
        table.len(),
        format_thousands(table.total_words())
    )
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = width.saturating_sub(text.chars().count());
    if right {
        format!("{}{}", " ".repeat(fill), text)
    } else {
        format!("{}{}", text, " ".repeat(fill))
    }
}

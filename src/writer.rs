//! Plain-text rendering of a row matrix

/// Render rows as a left-aligned grid, with a rule under the header row.
///
/// ```
/// use royalbit_sheets::writer::render_grid;
///
/// let rows = vec![
///     vec!["ID".to_string(), "Name".to_string()],
///     vec!["1".to_string(), "Ann".to_string()],
/// ];
/// assert_eq!(render_grid(&rows), "ID | Name\n---+-----\n1  | Ann\n");
/// ```
pub fn render_grid(rows: &[Vec<String>]) -> String {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; width];
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (index, row) in rows.iter().enumerate() {
        let line = widths
            .iter()
            .enumerate()
            .map(|(col, w)| {
                let cell = row.get(col).map_or("", String::as_str);
                format!("{:<w$}", cell, w = *w)
            })
            .collect::<Vec<_>>()
            .join(" | ");
        out.push_str(line.trim_end());
        out.push('\n');

        if index == 0 && rows.len() > 1 {
            let rule = widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-");
            out.push_str(&rule);
            out.push('\n');
        }
    }
    out
}

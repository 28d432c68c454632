//! Raw matrix cleaning: summary rows, blank rows, transpose, blank columns

use crate::config::SheetOptions;
use crate::error::SheetResult;
use tracing::debug;

/// Runs the cleaning pipeline and returns the surviving columns, header cell first.
pub(crate) fn clean_columns(
    matrix: Vec<Vec<String>>,
    options: &SheetOptions,
) -> SheetResult<Vec<Vec<String>>> {
    let summary = options.summary_regex()?;
    let input_rows = matrix.len();

    let rows: Vec<Vec<String>> = matrix
        .into_iter()
        .filter(|row| !row.iter().any(|cell| summary.is_match(cell)))
        .collect();
    let summary_rows = input_rows - rows.len();

    let before_blank = rows.len();
    let rows: Vec<Vec<String>> = if options.skip_blank_rows {
        rows.into_iter().filter(|row| !is_blank(row)).collect()
    } else {
        rows
    };
    let blank_rows = before_blank - rows.len();

    let columns = transpose(rows);
    let width = columns.len();
    let columns: Vec<Vec<String>> = if options.skip_blank_columns {
        columns.into_iter().filter(|column| !is_blank(column)).collect()
    } else {
        columns
    };

    debug!(
        summary_rows,
        blank_rows,
        blank_columns = width - columns.len(),
        columns = columns.len(),
        "cleaned worksheet matrix"
    );
    Ok(columns)
}

/// True when every cell is empty after trimming (vacuously true for no cells).
pub(crate) fn is_blank(cells: &[String]) -> bool {
    cells.iter().all(|cell| cell.trim().is_empty())
}

/// Rows to columns. Short rows are padded with empty cells to the widest row.
pub(crate) fn transpose(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut columns: Vec<Vec<String>> = (0..width)
        .map(|_| Vec::with_capacity(rows.len()))
        .collect();

    for row in rows {
        let padding = width - row.len();
        let cells = row
            .into_iter()
            .chain(std::iter::repeat_with(String::new).take(padding));
        for (column, cell) in columns.iter_mut().zip(cells) {
            column.push(cell);
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn matrix(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_transpose_pads_short_rows() {
        let columns = transpose(matrix(&[&["ID", "Name", "Age"], &["1", "Ann"], &["2"]]));
        assert_eq!(
            columns,
            matrix(&[&["ID", "1", "2"], &["Name", "Ann", ""], &["Age", "", ""]])
        );
    }

    #[test]
    fn test_transpose_empty() {
        assert!(transpose(Vec::new()).is_empty());
    }

    #[test]
    fn test_is_blank_trims() {
        assert!(is_blank(&["  ".to_string(), "\t".to_string()]));
        assert!(!is_blank(&["  ".to_string(), "x".to_string()]));
        assert!(is_blank(&[]));
    }

    #[test]
    fn test_pipeline_order() {
        let columns = clean_columns(
            matrix(&[
                &["ID", "", "Name"],
                &["1", " ", "Ann"],
                &["", "", "  "],
                &["Total", "", "1"],
                &["2", "", "Bob"],
            ]),
            &SheetOptions::default(),
        )
        .unwrap();

        assert_eq!(columns, matrix(&[&["ID", "1", "2"], &["Name", "Ann", "Bob"]]));
    }

    #[test]
    fn test_blank_filters_can_be_disabled() {
        let options = SheetOptions {
            skip_blank_rows: false,
            skip_blank_columns: false,
            ..SheetOptions::default()
        };
        let columns = clean_columns(matrix(&[&["ID", ""], &["", ""]]), &options).unwrap();
        assert_eq!(columns, matrix(&[&["ID", ""], &["", ""]]));
    }
}

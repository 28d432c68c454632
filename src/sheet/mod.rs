//! Column-oriented worksheet keyed by header name

mod algebra;
mod clean;
mod column;

pub use column::Column;

use crate::config::{DuplicateHeaders, SheetOptions};
use crate::error::{SheetError, SheetResult};
use crate::source::RowSource;
use crate::writer::render_grid;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use tracing::{debug, warn};

/// A table of text cells stored as one value sequence per header.
///
/// Every column holds the same number of cells. The shape is fixed once built; cell values can
/// still be written through a [`Column`] view, which changes this worksheet in place.
///
/// Columns sit behind a `RefCell`, so a worksheet cannot be shared across threads. Callers hold
/// any number of [`Column`] views at once, and each write is visible through all of them.
#[derive(Debug, Clone)]
pub struct Worksheet {
    table: IndexMap<String, RefCell<Vec<String>>>,
    options: SheetOptions,
}

impl Worksheet {
    /// Build from a raw matrix (header row first) with the default cleaning options.
    pub fn new<M, R, C>(matrix: M) -> SheetResult<Self>
    where
        M: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self::with_options(matrix, &SheetOptions::default())
    }

    /// Build from a raw matrix: drop summary rows and blank rows, transpose, drop blank columns,
    /// then key each column by its first cell.
    pub fn with_options<M, R, C>(matrix: M, options: &SheetOptions) -> SheetResult<Self>
    where
        M: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let matrix: Vec<Vec<String>> = matrix
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let mut table = IndexMap::new();
        for column in clean::clean_columns(matrix, options)? {
            let mut cells = column.into_iter();
            // Columns from the pipeline always carry at least their header cell
            let header = cells.next().unwrap_or_default();
            let values: Vec<String> = cells.collect();

            if table.contains_key(&header) {
                match options.duplicate_headers {
                    DuplicateHeaders::Reject => return Err(SheetError::DuplicateHeader(header)),
                    DuplicateHeaders::Overwrite => {
                        warn!(header = %header, "duplicate header, later column wins");
                    }
                }
            }
            table.insert(header, RefCell::new(values));
        }

        let sheet = Self {
            table,
            options: options.clone(),
        };
        debug!(
            columns = sheet.column_count(),
            rows = sheet.row_count(),
            "built worksheet"
        );
        Ok(sheet)
    }

    /// Build from columns that are already keyed by header. No cleaning is applied.
    pub fn from_columns(columns: IndexMap<String, Vec<String>>) -> SheetResult<Self> {
        let expected = columns.values().next().map_or(0, Vec::len);
        if let Some((column, values)) = columns.iter().find(|(_, values)| values.len() != expected)
        {
            return Err(SheetError::RaggedColumns {
                column: column.clone(),
                len: values.len(),
                expected,
            });
        }

        Ok(Self {
            table: columns
                .into_iter()
                .map(|(header, values)| (header, RefCell::new(values)))
                .collect(),
            options: SheetOptions::default(),
        })
    }

    /// Build from any row source (a spreadsheet backend) via [`Worksheet::new`].
    pub fn from_worksheet<S: RowSource + ?Sized>(source: &S) -> SheetResult<Self> {
        Self::new(source.rows()?)
    }

    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    /// Header names in column order
    pub fn headers(&self) -> Vec<String> {
        self.table.keys().cloned().collect()
    }

    /// Number of data rows (header row excluded)
    pub fn row_count(&self) -> usize {
        self.table
            .values()
            .next()
            .map_or(0, |cells| cells.borrow().len())
    }

    pub fn column_count(&self) -> usize {
        self.table.len()
    }

    /// True when there are no data rows
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Row 0 is the header row; row `i` is the `i`-th data row.
    pub fn row(&self, index: usize) -> SheetResult<Vec<String>> {
        if index == 0 {
            return Ok(self.headers());
        }
        let rows = self.row_count();
        if index > rows {
            return Err(SheetError::RowOutOfRange { index, rows });
        }
        Ok(self.data_row(index - 1))
    }

    /// Full matrix, header row first. Empty when the worksheet has no columns.
    pub fn rows(&self) -> Vec<Vec<String>> {
        if self.table.is_empty() {
            return Vec::new();
        }
        std::iter::once(self.headers())
            .chain(self.data_rows())
            .collect()
    }

    /// Lazy row-major walk over every cell, header row first
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            sheet: self,
            row: 0,
            col: 0,
        }
    }

    /// View over the named column, or `None` when no such header exists
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        Column::new(self, name).ok()
    }

    /// Views over every column, in header order
    pub fn columns(&self) -> Vec<Column<'_>> {
        self.table
            .keys()
            .filter_map(|header| self.column(header))
            .collect()
    }

    /// Owned copy of the keyed storage, suitable for [`Worksheet::from_columns`]
    pub fn to_map(&self) -> IndexMap<String, Vec<String>> {
        self.table
            .iter()
            .map(|(header, cells)| (header.clone(), cells.borrow().clone()))
            .collect()
    }

    pub(crate) fn storage(&self, name: &str) -> Option<(&str, &RefCell<Vec<String>>)> {
        self.table
            .get_key_value(name)
            .map(|(header, cells)| (header.as_str(), cells))
    }

    /// Zero-based data row. Callers check the bound.
    pub(crate) fn data_row(&self, index: usize) -> Vec<String> {
        self.table
            .values()
            .map(|cells| cells.borrow().get(index).cloned().unwrap_or_default())
            .collect()
    }

    pub(crate) fn data_rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        (0..self.row_count()).map(|index| self.data_row(index))
    }
}

/// Headers and cells compared in column order.
impl PartialEq for Worksheet {
    fn eq(&self, other: &Self) -> bool {
        self.table.len() == other.table.len()
            && self
                .table
                .iter()
                .zip(other.table.iter())
                .all(|((left_header, left), (right_header, right))| {
                    left_header == right_header && *left.borrow() == *right.borrow()
                })
    }
}

impl fmt::Display for Worksheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grid(&self.rows()))
    }
}

/// Row-major cell iterator returned by [`Worksheet::cells`].
///
/// Each step reads the worksheet's current storage, so writes made between steps show up.
pub struct Cells<'a> {
    sheet: &'a Worksheet,
    row: usize,
    col: usize,
}

impl Iterator for Cells<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let width = self.sheet.table.len();
        if width == 0 || self.row > self.sheet.row_count() {
            return None;
        }

        let (header, cells) = self.sheet.table.get_index(self.col)?;
        let cell = if self.row == 0 {
            header.clone()
        } else {
            cells.borrow().get(self.row - 1)?.clone()
        };

        self.col += 1;
        if self.col == width {
            self.col = 0;
            self.row += 1;
        }
        Some(cell)
    }
}

impl<'a> IntoIterator for &'a Worksheet {
    type Item = String;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Cells<'a> {
        self.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn people() -> Worksheet {
        Worksheet::new(vec![
            vec!["ID", "Name"],
            vec!["1", "Ann"],
            vec!["2", "Bob"],
            vec!["subtotal", "2"],
        ])
        .unwrap()
    }

    #[test]
    fn test_subtotal_row_dropped() {
        let sheet = people();
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.row(1).unwrap(), vec!["1", "Ann"]);
        assert_eq!(sheet.row(2).unwrap(), vec!["2", "Bob"]);
    }

    #[test]
    fn test_row_zero_is_headers() {
        assert_eq!(people().row(0).unwrap(), vec!["ID", "Name"]);
    }

    #[test]
    fn test_row_out_of_range() {
        let err = people().row(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Index);
    }

    #[test]
    fn test_empty_matrix() {
        let sheet = Worksheet::new(Vec::<Vec<String>>::new()).unwrap();
        assert_eq!(sheet.column_count(), 0);
        assert!(sheet.rows().is_empty());
        assert_eq!(sheet.cells().count(), 0);
        assert!(sheet.row(0).unwrap().is_empty());
        assert!(sheet.row(1).is_err());
    }

    #[test]
    fn test_header_only_matrix() {
        let sheet = Worksheet::new(vec![vec!["ID", "Name"]]).unwrap();
        assert_eq!(sheet.column_count(), 2);
        assert!(sheet.is_empty());
        assert_eq!(sheet.rows(), vec![vec!["ID", "Name"]]);
    }

    #[test]
    fn test_duplicate_header_overwrites_in_place() {
        let sheet = Worksheet::new(vec![
            vec!["ID", "Name", "ID"],
            vec!["1", "Ann", "one"],
        ])
        .unwrap();
        assert_eq!(sheet.headers(), vec!["ID", "Name"]);
        assert_eq!(sheet.row(1).unwrap(), vec!["one", "Ann"]);
    }

    #[test]
    fn test_duplicate_header_rejected() {
        let options = SheetOptions {
            duplicate_headers: DuplicateHeaders::Reject,
            ..SheetOptions::default()
        };
        let err = Worksheet::with_options(vec![vec!["ID", "ID"], vec!["1", "2"]], &options)
            .unwrap_err();
        assert!(matches!(err, SheetError::DuplicateHeader(ref h) if h == "ID"));
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_from_columns_rejects_ragged() {
        let mut columns = IndexMap::new();
        columns.insert("ID".to_string(), vec!["1".to_string(), "2".to_string()]);
        columns.insert("Name".to_string(), vec!["Ann".to_string()]);

        let err = Worksheet::from_columns(columns).unwrap_err();
        assert!(matches!(err, SheetError::RaggedColumns { len: 1, expected: 2, .. }));
    }

    #[test]
    fn test_from_columns_skips_cleaning() {
        let mut columns = IndexMap::new();
        columns.insert("ID".to_string(), vec!["total".to_string(), " ".to_string()]);
        let sheet = Worksheet::from_columns(columns).unwrap();
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.row(1).unwrap(), vec!["total"]);
    }

    #[test]
    fn test_equality_respects_column_order() {
        let left = Worksheet::new(vec![vec!["A", "B"], vec!["1", "2"]]).unwrap();
        let right = Worksheet::new(vec![vec!["B", "A"], vec!["2", "1"]]).unwrap();
        assert_ne!(left, right);
        assert_eq!(left, left.clone());
    }

    #[test]
    fn test_clone_is_independent() {
        let sheet = people();
        let copy = sheet.clone();
        sheet.column("Name").unwrap().set(0, "Amy").unwrap();
        assert_eq!(copy.row(1).unwrap(), vec!["1", "Ann"]);
        assert_eq!(sheet.row(1).unwrap(), vec!["1", "Amy"]);
    }

    #[test]
    fn test_cells_row_major() {
        let cells: Vec<String> = people().cells().collect();
        assert_eq!(cells, vec!["ID", "Name", "1", "Ann", "2", "Bob"]);
    }

    #[test]
    fn test_cells_see_writes_between_steps() {
        let sheet = people();
        let mut cells = sheet.cells();
        assert_eq!(cells.next().as_deref(), Some("ID"));
        sheet.column("ID").unwrap().set(1, "20").unwrap();
        assert_eq!(cells.nth(3).as_deref(), Some("20"));
    }

    #[test]
    fn test_missing_column_is_none() {
        assert!(people().column("Age").is_none());
    }
}

//! Column views over worksheet storage

use super::Worksheet;
use crate::error::{SheetError, SheetResult};
use std::cell::RefCell;
use std::fmt;

/// A borrowed view of one worksheet column.
///
/// The view does not copy: [`Column::set`] writes straight into the worksheet, and every other
/// view of the same header sees the change.
#[derive(Clone, Copy)]
pub struct Column<'a> {
    sheet: &'a Worksheet,
    header: &'a str,
    cells: &'a RefCell<Vec<String>>,
}

impl<'a> Column<'a> {
    /// View the column named `header`. Fails when the worksheet has no such column.
    pub fn new(sheet: &'a Worksheet, header: &str) -> SheetResult<Self> {
        let (header, cells) = sheet
            .storage(header)
            .ok_or_else(|| SheetError::MissingColumn(header.to_string()))?;
        Ok(Self {
            sheet,
            header,
            cells,
        })
    }

    pub fn header(&self) -> &'a str {
        self.header
    }

    pub fn sheet(&self) -> &'a Worksheet {
        self.sheet
    }

    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at zero-based data index
    pub fn get(&self, index: usize) -> SheetResult<String> {
        self.cells
            .borrow()
            .get(index)
            .cloned()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Overwrite the cell at zero-based data index
    pub fn set(&self, index: usize, value: impl Into<String>) -> SheetResult<()> {
        let mut cells = self.cells.borrow_mut();
        let len = cells.len();
        let cell = cells.get_mut(index).ok_or(SheetError::CellOutOfRange {
            column: self.header.to_string(),
            index,
            len,
        })?;
        *cell = value.into();
        Ok(())
    }

    /// Snapshot of the current values
    pub fn values(&self) -> Vec<String> {
        self.cells.borrow().clone()
    }

    /// Lazy walk over the values, reading current storage at each step
    pub fn iter(&self) -> impl Iterator<Item = String> + 'a {
        let cells = self.cells;
        (0..).map_while(move |index| cells.borrow().get(index).cloned())
    }

    /// First data index whose cell equals `value`
    pub fn position(&self, value: &str) -> Option<usize> {
        self.cells.borrow().iter().position(|cell| cell == value)
    }

    /// Sum of every cell read as a base-10 integer. Any other cell is an error.
    pub fn sum(&self) -> SheetResult<i64> {
        self.cells.borrow().iter().try_fold(0i64, |total, cell| {
            let value = parse_integer(cell).map_err(|source| SheetError::NotAnInteger {
                column: self.header.to_string(),
                value: cell.clone(),
                source,
            })?;
            total
                .checked_add(value)
                .ok_or_else(|| SheetError::Overflow(self.header.to_string()))
        })
    }

    /// Number of cells that read as integers
    pub fn integer_count(&self) -> usize {
        self.cells
            .borrow()
            .iter()
            .filter(|cell| parse_integer(cell).is_ok())
            .count()
    }

    /// [`Column::sum`] over [`Column::integer_count`].
    ///
    /// Fails whenever `sum` does, so the tolerant count only matters for the empty column,
    /// which averages to NaN.
    pub fn average(&self) -> SheetResult<f64> {
        let sum = self.sum()?;
        Ok(sum as f64 / self.integer_count() as f64)
    }

    /// Full worksheet row whose cell in this column equals `key`; first match wins.
    pub fn find_row(&self, key: &str) -> Option<Vec<String>> {
        self.position(key).map(|index| self.sheet.data_row(index))
    }

    fn out_of_range(&self, index: usize) -> SheetError {
        SheetError::CellOutOfRange {
            column: self.header.to_string(),
            index,
            len: self.len(),
        }
    }
}

impl fmt::Debug for Column<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("cells", &*self.cells.borrow())
            .finish()
    }
}

fn parse_integer(cell: &str) -> Result<i64, std::num::ParseIntError> {
    cell.trim().parse::<i64>()
}

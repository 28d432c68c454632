//! Inbound seam for spreadsheet backends
//!
//! Anything that can hand over a matrix of text cells (header row first) can feed a
//! [`crate::Worksheet`] through [`crate::Worksheet::from_worksheet`]. Backends report their own
//! failures as [`crate::SheetError::Source`].

use crate::error::SheetResult;
use crate::sheet::Worksheet;

pub trait RowSource {
    /// Full row matrix, header row first
    fn rows(&self) -> SheetResult<Vec<Vec<String>>>;
}

impl RowSource for [Vec<String>] {
    fn rows(&self) -> SheetResult<Vec<Vec<String>>> {
        Ok(self.to_vec())
    }
}

impl RowSource for Vec<Vec<String>> {
    fn rows(&self) -> SheetResult<Vec<Vec<String>>> {
        Ok(self.clone())
    }
}

impl RowSource for Vec<Vec<&str>> {
    fn rows(&self) -> SheetResult<Vec<Vec<String>>> {
        Ok(self
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect())
    }
}

impl RowSource for Worksheet {
    fn rows(&self) -> SheetResult<Vec<Vec<String>>> {
        Ok(Worksheet::rows(self))
    }
}

//! Row-level difference and union between worksheets with identical headers

use super::Worksheet;
use crate::error::{SheetError, SheetResult};
use std::collections::HashMap;
use std::ops::{Add, Sub};
use tracing::debug;

impl Worksheet {
    /// Data rows of `self` minus data rows of `other`, under `self`'s header row.
    ///
    /// Each row of `other` cancels at most one equal row of `self`; survivors keep their order.
    pub fn difference(&self, other: &Worksheet) -> SheetResult<Worksheet> {
        self.check_headers(other)?;

        let mut pending: HashMap<Vec<String>, usize> = HashMap::new();
        for row in other.data_rows() {
            *pending.entry(row).or_default() += 1;
        }

        let mut matrix = vec![self.headers()];
        for row in self.data_rows() {
            match pending.get_mut(&row) {
                Some(count) if *count > 0 => *count -= 1,
                _ => matrix.push(row),
            }
        }

        debug!(
            left = self.row_count(),
            right = other.row_count(),
            kept = matrix.len() - 1,
            "worksheet difference"
        );
        Worksheet::with_options(matrix, &self.options)
    }

    /// All rows of `self` followed by the data rows of `other`.
    ///
    /// This is concatenation: rows present in both worksheets appear twice.
    pub fn union(&self, other: &Worksheet) -> SheetResult<Worksheet> {
        self.check_headers(other)?;

        let mut matrix = self.rows();
        matrix.extend(other.rows().into_iter().skip(1));

        debug!(
            left = self.row_count(),
            right = other.row_count(),
            "worksheet union"
        );
        Worksheet::with_options(matrix, &self.options)
    }

    fn check_headers(&self, other: &Worksheet) -> SheetResult<()> {
        if self.table.keys().eq(other.table.keys()) {
            Ok(())
        } else {
            Err(SheetError::HeadersDiffer {
                left: self.headers(),
                right: other.headers(),
            })
        }
    }
}

impl Sub<&Worksheet> for &Worksheet {
    type Output = SheetResult<Worksheet>;

    fn sub(self, other: &Worksheet) -> Self::Output {
        self.difference(other)
    }
}

impl Add<&Worksheet> for &Worksheet {
    type Output = SheetResult<Worksheet>;

    fn add(self, other: &Worksheet) -> Self::Output {
        self.union(other)
    }
}

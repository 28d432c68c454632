//! Name-based field access
//!
//! `sheet.get_field("ID", &[])` is the column headed `ID`; `column.get_field("20", &[])` is the
//! row whose cell in that column reads `20`. Fields take no arguments, so any supplied argument
//! is rejected.

use crate::error::{SheetError, SheetResult};
use crate::sheet::{Column, Worksheet};

pub trait FieldAccess {
    type Field<'a>
    where
        Self: 'a;

    /// Look up `name`. `Ok(None)` is a soft miss.
    fn get_field<'a>(&'a self, name: &str, args: &[&str]) -> SheetResult<Option<Self::Field<'a>>>;
}

fn reject_arguments(name: &str, args: &[&str]) -> SheetResult<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(SheetError::UnexpectedArguments {
            name: name.to_string(),
            count: args.len(),
        })
    }
}

impl FieldAccess for Worksheet {
    type Field<'a> = Column<'a>;

    fn get_field<'a>(&'a self, name: &str, args: &[&str]) -> SheetResult<Option<Column<'a>>> {
        reject_arguments(name, args)?;
        Ok(self.column(name))
    }
}

impl FieldAccess for Column<'_> {
    type Field<'a> = Vec<String> where Self: 'a;

    fn get_field<'a>(&'a self, name: &str, args: &[&str]) -> SheetResult<Option<Vec<String>>> {
        reject_arguments(name, args)?;
        Ok(self.find_row(name))
    }
}

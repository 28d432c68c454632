//! Sheets - column-oriented worksheet tables
//!
//! This library turns a matrix of text cells (header row first, as a spreadsheet hands it
//! over) into a table keyed by header name, and back.
//!
//! # Features
//!
//! - Cleaning on load: `total`/`subtotal` rows, blank rows and blank columns are dropped
//! - Row access by index (row 0 is the header row) and lazy row-major cell iteration
//! - Column views that write through to the worksheet
//! - Integer `sum`/`average` over a column
//! - Row-level `difference` (`-`) and `union` (`+`) between worksheets with equal headers
//! - Name-based lookups: column by header, row by key cell
//! - Construction options loadable from YAML
//!
//! # Example
//!
//! ```
//! use royalbit_sheets::{FieldAccess, Worksheet};
//!
//! let sheet = Worksheet::new(vec![
//!     vec!["ID", "Name"],
//!     vec!["1", "Ann"],
//!     vec!["2", "Bob"],
//!     vec!["subtotal", "2"],
//! ])?;
//! assert_eq!(sheet.row_count(), 2);
//!
//! let id = sheet.get_field("ID", &[])?.expect("ID column");
//! assert_eq!(id.sum()?, 3);
//! assert_eq!(id.get_field("2", &[])?, Some(vec!["2".to_string(), "Bob".to_string()]));
//!
//! id.set(1, "20")?;
//! assert_eq!(sheet.row(2)?, vec!["20", "Bob"]);
//! # Ok::<(), royalbit_sheets::SheetError>(())
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod sheet;
pub mod source;
pub mod writer;

// Re-export commonly used types
pub use config::{DuplicateHeaders, SheetOptions};
pub use error::{ErrorKind, SheetError, SheetResult};
pub use fields::FieldAccess;
pub use sheet::{Cells, Column, Worksheet};
pub use source::RowSource;

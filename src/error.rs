use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

/// Broad class of a [`SheetError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The API was called with incompatible operands or arguments
    Usage,
    /// A cell could not be read as an integer
    Parse,
    /// A row or cell index is outside the table
    Index,
    /// Options could not be loaded or compiled
    Config,
    /// A row source failed to produce its matrix
    Source,
}

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Sheet headers differ: {left:?} vs {right:?}")]
    HeadersDiffer {
        left: Vec<String>,
        right: Vec<String>,
    },

    #[error("Function {name} does not accept any arguments (got {count})")]
    UnexpectedArguments { name: String, count: usize },

    #[error("Expected an existing column and sheet, no column named '{0}'")]
    MissingColumn(String),

    #[error("Column '{column}' has {len} rows, expected {expected} rows")]
    RaggedColumns {
        column: String,
        len: usize,
        expected: usize,
    },

    #[error("Duplicate header '{0}'")]
    DuplicateHeader(String),

    #[error("Cell '{value}' in column '{column}' is not an integer: {source}")]
    NotAnInteger {
        column: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Integer overflow while summing column '{0}'")]
    Overflow(String),

    #[error("Row index {index} out of range ({rows} data rows)")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("Cell index {index} out of range in column '{column}' ({len} cells)")]
    CellOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    #[error("Invalid summary pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Row source error: {0}")]
    Source(String),
}

impl SheetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SheetError::HeadersDiffer { .. }
            | SheetError::UnexpectedArguments { .. }
            | SheetError::MissingColumn(_)
            | SheetError::RaggedColumns { .. }
            | SheetError::DuplicateHeader(_) => ErrorKind::Usage,
            SheetError::NotAnInteger { .. } | SheetError::Overflow(_) => ErrorKind::Parse,
            SheetError::RowOutOfRange { .. } | SheetError::CellOutOfRange { .. } => {
                ErrorKind::Index
            }
            SheetError::Pattern(_) | SheetError::Io(_) | SheetError::Yaml(_) => ErrorKind::Config,
            SheetError::Source(_) => ErrorKind::Source,
        }
    }
}

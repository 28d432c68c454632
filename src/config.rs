//! Worksheet construction options
//!
//! Options can be built in code or loaded from a YAML file:
//!
//! ```yaml
//! summary_pattern: "(?i)^(grand )?(sub)?total$"
//! skip_blank_rows: true
//! skip_blank_columns: false
//! duplicate_headers: reject
//! ```
//!
//! Missing keys fall back to the defaults, which describe the standard cleaning pipeline.

use crate::error::SheetResult;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Matches `total` and `subtotal` cells, ignoring case, whole cell only.
pub const DEFAULT_SUMMARY_PATTERN: &str = "(?i)^(sub)?total$";

/// What to do when two columns share a header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateHeaders {
    /// The later column's values replace the earlier ones; the header keeps its first position
    #[default]
    Overwrite,
    /// Construction fails with [`crate::SheetError::DuplicateHeader`]
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetOptions {
    /// Rows with any cell matching this regex are dropped
    pub summary_pattern: String,
    /// Drop rows whose cells are all blank after trimming
    pub skip_blank_rows: bool,
    /// Drop columns whose cells (header included) are all blank after trimming
    pub skip_blank_columns: bool,
    pub duplicate_headers: DuplicateHeaders,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            summary_pattern: DEFAULT_SUMMARY_PATTERN.to_string(),
            skip_blank_rows: true,
            skip_blank_columns: true,
            duplicate_headers: DuplicateHeaders::Overwrite,
        }
    }
}

impl SheetOptions {
    /// Parse options from YAML text
    pub fn from_yaml_str(content: &str) -> SheetResult<Self> {
        let options: SheetOptions = serde_yaml::from_str(content)?;
        options.summary_regex()?;
        Ok(options)
    }

    /// Load options from a YAML file
    pub fn from_path(path: &Path) -> SheetResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Compile the summary pattern
    pub fn summary_regex(&self) -> SheetResult<Regex> {
        Ok(Regex::new(&self.summary_pattern)?)
    }
}

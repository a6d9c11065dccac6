use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Options for CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Directory used by [`crate::output::csv::export_csv_to_dir`].
    pub out_dir: PathBuf,
    /// Cell text written for null values.
    pub null_marker: String,
    /// Separator placed between list elements inside one cell.
    pub list_separator: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            null_marker: "null".to_string(),
            list_separator: ",".to_string(),
        }
    }
}

impl ExportOptions {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load options from a TOML file; omitted keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ImportError, Result};
use crate::import::{has_extension, ImportFormat};
use crate::models::WorkoutPackage;

/// Package file layout: a list of `[[packages]]` tables
#[derive(Debug, Deserialize)]
struct PackageFile {
    #[serde(default)]
    packages: Vec<WorkoutPackage>,
}

/// TOML importer using the same `[[packages]]` tables as the config file
pub struct TomlImporter;

impl TomlImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_packages(&self, content: &str) -> Result<Vec<WorkoutPackage>> {
        let file: PackageFile = toml::from_str(content).map_err(ImportError::from)?;
        Ok(file.packages)
    }
}

impl Default for TomlImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormat for TomlImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, &["toml"])
    }

    fn import_file(&self, file_path: &Path) -> Result<Vec<WorkoutPackage>> {
        let content = fs::read_to_string(file_path)?;
        self.parse_packages(&content)
    }

    fn get_format_name(&self) -> &'static str {
        "TOML"
    }
}

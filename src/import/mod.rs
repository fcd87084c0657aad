use std::path::Path;
use tracing::info;

use crate::error::{ImportError, Result};
use crate::models::WorkoutPackage;

pub mod csv;
pub mod toml;

/// Trait for reading workout packages from different file formats
pub trait ImportFormat {
    /// Check if this importer can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Read every package in the file
    fn import_file(&self, file_path: &Path) -> Result<Vec<WorkoutPackage>>;

    /// Get the format name for this importer
    fn get_format_name(&self) -> &'static str;
}

/// Picks an importer for a package file by its extension
pub struct ImportManager {
    importers: Vec<Box<dyn ImportFormat>>,
}

impl ImportManager {
    /// Create a new import manager with all available importers
    pub fn new() -> Self {
        let importers: Vec<Box<dyn ImportFormat>> = vec![
            Box::new(csv::CsvImporter::new()),
            Box::new(toml::TomlImporter::new()),
        ];

        Self { importers }
    }

    /// Import a single file, auto-detecting the format
    pub fn import_file(&self, file_path: &Path) -> Result<Vec<WorkoutPackage>> {
        let importer = self
            .importers
            .iter()
            .find(|importer| importer.can_import(file_path))
            .ok_or_else(|| ImportError::UnsupportedFile {
                path: file_path.to_path_buf(),
            })?;

        info!(
            file = %file_path.display(),
            format = importer.get_format_name(),
            "Importing packages"
        );
        let packages = importer.import_file(file_path)?;
        info!(count = packages.len(), "Imported packages");
        Ok(packages)
    }

    /// Check if this manager can import a given file
    pub fn can_import_file(&self, file_path: &Path) -> bool {
        self.importers
            .iter()
            .any(|importer| importer.can_import(file_path))
    }
}

impl Default for ImportManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive extension check shared by the importers
fn has_extension(file_path: &Path, extensions: &[&str]) -> bool {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

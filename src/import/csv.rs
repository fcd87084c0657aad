use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ImportError, Result};
use crate::import::{has_extension, ImportFormat};
use crate::models::WorkoutPackage;

/// CSV importer: one package per row, `CODE,reading,reading,...`
///
/// Rows may have different lengths. Lines starting with `#` are skipped.
pub struct CsvImporter;

impl CsvImporter {
    pub fn new() -> Self {
        Self
    }

    /// Read packages from any CSV source
    pub fn read_packages<R: Read>(&self, reader: R) -> Result<Vec<WorkoutPackage>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut packages = Vec::new();
        for record in reader.records() {
            let record = record.map_err(ImportError::from)?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let code = match record.get(0) {
                Some(code) if !code.is_empty() => code,
                _ => return Err(ImportError::MissingCode { line }.into()),
            };

            let data = record
                .iter()
                .enumerate()
                .skip(1)
                .map(|(field, value)| {
                    value.parse::<f64>().map_err(|_| ImportError::InvalidNumber {
                        line,
                        field,
                        value: value.to_string(),
                    })
                })
                .collect::<std::result::Result<Vec<f64>, ImportError>>()?;

            packages.push(WorkoutPackage::new(code, data));
        }

        Ok(packages)
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormat for CsvImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, &["csv"])
    }

    fn import_file(&self, file_path: &Path) -> Result<Vec<WorkoutPackage>> {
        let file = File::open(file_path)?;
        self.read_packages(file)
    }

    fn get_format_name(&self) -> &'static str {
        "CSV"
    }
}

use crate::models::PatternMeasurementSet;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default file name offered for the pattern download
pub const EXPORT_FILE_NAME: &str = "pattern_measurements.json";

/// MIME type of the exported document
pub const EXPORT_CONTENT_TYPE: &str = "application/json";

/// Errors that can occur while exporting pattern measurements
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Encode pattern measurements as a JSON object indented by four spaces
///
/// Values are written unrounded.
pub fn to_export_json(pattern: &PatternMeasurementSet) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    pattern.serialize(&mut ser)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes pattern exports into a target directory
#[derive(Debug, Clone)]
pub struct PatternExporter {
    directory: PathBuf,
    file_name: String,
}

impl PatternExporter {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
        }
    }

    /// Exporter writing `pattern_measurements.json` into `directory`
    pub fn with_default_name(directory: impl Into<PathBuf>) -> Self {
        Self::new(directory, EXPORT_FILE_NAME)
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    pub fn content_type(&self) -> &'static str {
        EXPORT_CONTENT_TYPE
    }

    /// Write the export, creating the directory if needed
    pub fn write(&self, pattern: &PatternMeasurementSet) -> Result<PathBuf, ExportError> {
        let json = to_export_json(pattern)?;
        ensure_dir(&self.directory)?;

        let path = self.path();
        std::fs::write(&path, json)?;
        tracing::info!("Wrote pattern measurements to {}", path.display());

        Ok(path)
    }
}

fn ensure_dir(dir: &Path) -> Result<(), ExportError> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        tracing::debug!("Creating export directory {}", dir.display());
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

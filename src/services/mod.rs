// Service exports
pub mod export;

pub use export::{to_export_json, ExportError, PatternExporter, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};

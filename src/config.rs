use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{FitPreference, SizingRequest, Variant, Weighting};
use crate::services::EXPORT_FILE_NAME;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub input: InputSettings,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Measurements for the interaction being run
#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    #[serde(default = "default_chest")]
    pub chest: f64,
    #[serde(default = "default_waist")]
    pub waist: f64,
    /// Blank asks the engine to predict it
    #[serde(default)]
    pub shoulder_width: String,
    #[serde(default)]
    pub fit: FitPreference,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            chest: default_chest(),
            waist: default_waist(),
            shoulder_width: String::new(),
            fit: FitPreference::default(),
        }
    }
}

impl InputSettings {
    pub fn to_request(&self) -> SizingRequest {
        SizingRequest::new(self.chest, self.waist)
            .with_shoulder_width(self.shoulder_width.clone())
            .with_fit(self.fit)
    }
}

fn default_chest() -> f64 { 42.0 }
fn default_waist() -> f64 { 38.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub variant: Variant,
    /// Overrides the variant's default weighting when set
    pub weighting: Option<Weighting>,
    /// TOML size chart replacing the standard one
    pub chart_path: Option<String>,
    /// Enforce the input form's chest/waist bounds
    #[serde(default)]
    pub enforce_bounds: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_export_directory")]
    pub directory: String,
    #[serde(default = "default_export_file_name")]
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            directory: default_export_directory(),
            file_name: default_export_file_name(),
        }
    }
}

fn default_export_directory() -> String { ".".to_string() }
fn default_export_file_name() -> String { EXPORT_FILE_NAME.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SIZER__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SIZER__INPUT__CHEST -> input.chest
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Weighting the engine should use for the configured variant
    pub fn effective_weighting(&self) -> Weighting {
        self.engine
            .weighting
            .unwrap_or_else(|| self.engine.variant.default_weighting())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SIZER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

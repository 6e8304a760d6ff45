//! Export options, loadable from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MATERIAL: &str = "material.000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Python-literal-like dump with trailing commas.
    Legacy,
    /// Strict JSON, one record per line.
    Json,
}

/// What to do with an object whose record cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Stop the export and leave the output truncated.
    Abort,
    /// Drop the record, log a warning and keep going.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: OutputFormat,
    pub on_fault: FaultPolicy,
    pub default_material: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Legacy,
            on_fault: FaultPolicy::Abort,
            default_material: DEFAULT_MATERIAL.to_string(),
        }
    }
}

/// Values given on the command line. Each one that is set replaces the
/// value from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub format: Option<OutputFormat>,
    pub on_fault: Option<FaultPolicy>,
    pub default_material: Option<String>,
}

impl ExportConfig {
    /// Loads `path` if given (defaults otherwise) and applies the overrides on top.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(on_fault) = overrides.on_fault {
            self.on_fault = on_fault;
        }
        if let Some(default_material) = overrides.default_material {
            self.default_material = default_material;
        }
        self
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

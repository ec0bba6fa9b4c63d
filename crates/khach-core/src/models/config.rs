//! Configuration structures for the listing pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::record::Schema;
use crate::error::{KhachError, Result};

/// Main configuration for khach.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KhachConfig {
    /// Listing extraction configuration.
    pub extraction: ExtractionConfig,

    /// Export configuration.
    pub export: ExportConfig,

    /// Raw-text store configuration.
    pub store: StoreConfig,
}

/// Listing extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Schema used when none is given on the command line.
    pub schema: Schema,
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name prefix for exported sheets; the date is appended.
    pub file_prefix: String,

    /// Add a 1-based STT column.
    pub include_position: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: "khach-hang".to_string(),
            include_position: true,
        }
    }
}

/// Raw-text store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the saved input text (default: platform data dir).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl KhachConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| KhachError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| KhachError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the store directory, falling back to the platform data dir.
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.store
            .data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("khach")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: KhachConfig =
            serde_json::from_str(r#"{"extraction": {"schema": "extended"}}"#).unwrap();
        assert_eq!(config.extraction.schema, Schema::Extended);
        assert_eq!(config.export.file_prefix, "khach-hang");
        assert!(config.export.include_position);
        assert!(config.store.data_dir.is_none());
    }

    #[test]
    fn test_invalid_schema_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"extraction": {"schema": "wide"}}"#).unwrap();

        assert!(matches!(KhachConfig::from_file(&path), Err(KhachError::Config(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = KhachConfig::default();
        config.export.file_prefix = "leads".to_string();
        config.store.data_dir = Some(dir.path().join("data"));
        config.save(&path).unwrap();

        let loaded = KhachConfig::from_file(&path).unwrap();
        assert_eq!(loaded.export.file_prefix, "leads");
        assert_eq!(loaded.data_dir(), Some(dir.path().join("data")));
    }
}

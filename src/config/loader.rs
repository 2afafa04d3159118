//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the record
//! store configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{StoreError, StoreResult};

use super::types::OfficeConfig;

/// Loads and provides access to the store configuration.
///
/// # File format
///
/// ```text
/// attachments:
///   upload_to: attachments
/// limits:
///   max_name_length: 255
/// clock: local
/// ```
///
/// # Example
///
/// ```no_run
/// use office_records::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/office.yaml")?;
/// println!("Attachments go to {}", loader.config().attachments.upload_to);
/// # Ok::<(), office_records::error::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: OfficeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| StoreError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| StoreError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, "Loaded office configuration");
        Ok(Self { config })
    }

    /// Parses configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    pub fn from_yaml(content: &str) -> StoreResult<Self> {
        let config = Self::parse(content).map_err(|message| StoreError::ConfigParseError {
            path: "<inline>".to_string(),
            message,
        })?;
        Ok(Self { config })
    }

    fn parse(content: &str) -> Result<OfficeConfig, String> {
        if content.trim().is_empty() {
            return Ok(OfficeConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> OfficeConfig {
        self.config
    }
}

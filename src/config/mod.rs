//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::DeskError;
use crate::core::query::SortConfig;

/// How commits treat questionable drafts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Commit whatever the draft holds
    #[default]
    Permissive,
    /// Reject drafts with an empty client, a non-numeric or negative amount,
    /// or a due date before the issue date
    Strict,
}

/// Settings for the scan stub
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Smallest fabricated amount (inclusive)
    pub min_amount: u32,

    /// Largest fabricated amount (inclusive)
    pub max_amount: u32,

    /// Description put on every fabricated invoice
    pub description: String,

    /// Client name prefix; the record number is appended
    pub client_prefix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_amount: 100,
            max_amount: 1099,
            description: "Service rendered".to_string(),
            client_prefix: "Client".to_string(),
        }
    }
}

/// Complete configuration for a desk session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Sort applied when a session starts
    pub default_sort: SortConfig,

    /// Days between issue date and due date for new and scanned invoices
    pub due_in_days: u64,

    pub scan: ScanConfig,

    pub validation: ValidationMode,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            default_sort: SortConfig::default(),
            due_in_days: 30,
            scan: ScanConfig::default(),
            validation: ValidationMode::default(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("loading config file {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    ///
    /// Missing keys take their defaults. The result is validated.
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, DeskError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| DeskError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for inconsistent values
    pub fn validate(&self) -> std::result::Result<(), DeskError> {
        if self.scan.min_amount > self.scan.max_amount {
            return Err(DeskError::Config(format!(
                "scan.min_amount ({}) exceeds scan.max_amount ({})",
                self.scan.min_amount, self.scan.max_amount
            )));
        }
        Ok(())
    }
}

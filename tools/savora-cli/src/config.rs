//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Simulated backend settings.
    #[serde(default)]
    pub backend: BackendConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path))
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Where the persisted state snapshot lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file path. Defaults to the platform data directory.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> PathBuf {
    data_dir().join("savora").join("storage.json")
}

/// Simulated backend behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Simulated round-trip latency in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

fn default_latency_ms() -> u64 {
    2000
}

/// Get the platform-specific data directory.
fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}

/// Generate a default savora.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Savora storefront configuration

[storage]
# Where cart, theme and user are persisted between sessions.
path = "{}"

[backend]
# Simulated round-trip latency in milliseconds. Set to 0 for instant responses.
latency_ms = 2000
"#,
        default_storage_path().display()
    )
}

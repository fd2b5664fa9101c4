//! CLI execution context.

use std::path::Path;

use anyhow::{Context as _, Result};
use savora_backend::{Latency, MockAuthService, MockOrderService};
use savora_store::Store;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands: the persisted store plus the
/// simulated backend services.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Persisted state container.
    pub store: Store,
    /// Authentication backend.
    pub auth: MockAuthService,
    /// Order backend.
    pub orders: MockOrderService,
}

impl Context {
    /// Load context from config file, opening the store and wiring the
    /// mock services.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config()?.unwrap_or_default()
        };

        let store = Store::open(&config.storage.path).with_context(|| {
            format!("Failed to open storage at {}", config.storage.path.display())
        })?;
        output.debug(&format!("Storage: {}", config.storage.path.display()));
        output.debug(&format!("Backend latency: {}ms", config.backend.latency_ms));

        // Offers are session-local; seed them from the mock backend.
        let mut store = store;
        store.set_offers(savora_backend::data::offers())?;

        let latency = Latency::from_millis(config.backend.latency_ms);
        Ok(Self {
            config,
            output,
            store,
            auth: MockAuthService::new(latency),
            orders: MockOrderService::new(latency),
        })
    }

    /// Find a config file in the current directory or its parents.
    fn find_config() -> Result<Option<CliConfig>> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let config_names = ["savora.toml", ".savora.toml"];

        let mut current: &Path = &cwd;
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Some(path) = config_path.to_str() {
                        return Ok(Some(CliConfig::load(path)?));
                    }
                }
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(None)
    }
}

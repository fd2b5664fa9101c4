//! Manage configuration.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &mut Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            if ctx.output.is_json() {
                ctx.output.json(&ctx.config);
                return Ok(());
            }
            ctx.output.header("Configuration");
            ctx.output
                .kv("Storage", &ctx.config.storage.path.display().to_string());
            ctx.output
                .kv("Latency", &format!("{} ms", ctx.config.backend.latency_ms));
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let path = "savora.toml";
            if std::path::Path::new(path).exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path);
            }
            std::fs::write(path, generate_default_config())?;
            ctx.output.success(&format!("Wrote {}", path));
            Ok(())
        }
    }
}

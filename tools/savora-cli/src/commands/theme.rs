//! Toggle the UI theme.

use anyhow::Result;

use crate::context::Context;

/// Run the theme command.
pub async fn run(ctx: &mut Context) -> Result<()> {
    let theme = ctx.store.toggle_theme()?;
    ctx.output
        .success(&format!("Theme switched to {}", theme.as_str()));
    Ok(())
}

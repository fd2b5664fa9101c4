//! Account details and favorites.

use anyhow::{bail, Result};

use super::{ProfileArgs, ProfileCommand};
use crate::context::Context;

/// Run the profile command.
pub async fn run(args: ProfileArgs, ctx: &mut Context) -> Result<()> {
    if ctx.store.state().user.is_none() {
        bail!("Not signed in. Try `savora login`.");
    }

    match args.command.unwrap_or(ProfileCommand::Show) {
        ProfileCommand::Show => show(ctx),
        ProfileCommand::Favorite { product } => {
            let product = super::find_product(&product)?;
            ctx.store.add_to_favorites(product.id)?;
            ctx.output
                .success(&format!("{} added to favorites", product.name));
            Ok(())
        }
        ProfileCommand::Unfavorite { product } => {
            let product = super::find_product(&product)?;
            ctx.store.remove_from_favorites(&product.id)?;
            ctx.output
                .success(&format!("{} removed from favorites", product.name));
            Ok(())
        }
    }
}

fn show(ctx: &Context) -> Result<()> {
    let Some(user) = &ctx.store.state().user else {
        bail!("Not signed in");
    };

    if ctx.output.is_json() {
        ctx.output.json(user);
        return Ok(());
    }

    ctx.output.header(&user.name);
    ctx.output.kv("Email", &user.email);
    if let Some(phone) = &user.phone {
        ctx.output.kv("Phone", phone);
    }

    if !user.addresses.is_empty() {
        ctx.output.header("Addresses");
        for address in &user.addresses {
            let mut line = format!("{} - {}", address.kind.display_name(), address.one_line());
            if address.is_default {
                line.push_str("  (default)");
            }
            ctx.output.list_item(&line);
        }
    }

    if !user.favorites.is_empty() {
        ctx.output.header("Favorites");
        let menu = savora_backend::data::menu();
        for id in &user.favorites {
            match menu.iter().find(|p| &p.id == id) {
                Some(product) => ctx.output.list_item(&product.name),
                None => ctx.output.list_item(id.as_str()),
            }
        }
    }

    Ok(())
}

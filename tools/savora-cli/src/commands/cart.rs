//! Show and manage the cart.

use anyhow::Result;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &mut Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show(ctx),
        CartCommand::Add { product, quantity } => {
            let product = super::find_product(&product)?;
            let name = product.name.clone();
            for _ in 0..quantity.max(1) {
                ctx.store.add_to_cart(product.clone())?;
            }
            ctx.output.success(&format!("Added {} to the cart", name));
            show(ctx)
        }
        CartCommand::Remove { product } => {
            let product = super::find_product(&product)?;
            ctx.store.remove_from_cart(&product.id)?;
            ctx.output.success(&format!("Removed {}", product.name));
            show(ctx)
        }
        CartCommand::Set { product, quantity } => {
            let product = super::find_product(&product)?;
            // Quantity 0 removes the line, like the cart page stepper.
            ctx.store.change_quantity(&product.id, quantity as i64)?;
            show(ctx)
        }
        CartCommand::Clear => {
            ctx.store.clear_cart()?;
            ctx.output.success("Cart emptied");
            Ok(())
        }
    }
}

fn show(ctx: &Context) -> Result<()> {
    let cart = &ctx.store.state().cart;

    if ctx.output.is_json() {
        ctx.output.json(cart);
        return Ok(());
    }

    ctx.output.header("Your Cart");
    if cart.is_empty() {
        ctx.output.info("The cart is empty. Try `savora menu`.");
        return Ok(());
    }

    for item in &cart.items {
        ctx.output.list_item(&format!(
            "{} x{}  {}",
            item.product.name,
            item.quantity,
            item.line_total()?
        ));
    }

    let pricing = cart.pricing()?;
    ctx.output.kv("Subtotal", &pricing.subtotal.to_string());
    if pricing.delivery_fee.amount == 0 {
        ctx.output.kv("Delivery", "FREE");
    } else {
        ctx.output.kv("Delivery", &pricing.delivery_fee.to_string());
    }
    ctx.output.kv("Total", &pricing.total.to_string());

    Ok(())
}

//! Walk through checkout and place an order.

use anyhow::{bail, Context as _, Result};
use dialoguer::Select;
use savora_backend::{data, OrderService};
use savora_commerce::checkout::{CheckoutFlow, PaymentMethod};

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command: a three-step wizard (address, delivery
/// slot, payment) ending in a simulated order placement.
pub async fn run(args: CheckoutArgs, ctx: &mut Context) -> Result<()> {
    let Some(user) = ctx.store.state().user.clone() else {
        bail!("Please sign in first: `savora login`");
    };
    if ctx.store.state().cart.is_empty() {
        bail!("The cart is empty. Add something with `savora cart add`.");
    }

    let pricing = ctx.store.state().cart.pricing()?;
    ctx.output.header("Checkout");
    ctx.output.kv("Items", &ctx.store.state().cart.item_count().to_string());
    ctx.output.kv("Payable", &pricing.total.to_string());

    let mut flow = CheckoutFlow::for_user(&user);

    // Step 1: delivery address.
    ctx.output.step(1, 3, "Delivery Address");
    if user.addresses.is_empty() {
        bail!("No saved addresses on this account");
    }
    let labels: Vec<String> = user
        .addresses
        .iter()
        .map(|a| format!("{} - {}", a.kind.display_name(), a.one_line()))
        .collect();
    let picked = Select::new()
        .with_prompt("Deliver to")
        .items(&labels)
        .default(0)
        .interact()?;
    flow.select_address(user.addresses[picked].clone());
    flow.advance()?;

    // Step 2: delivery slot. Unavailable windows stay visible but are
    // rejected on selection, so loop until a valid one is picked.
    ctx.output.step(2, 3, "Delivery Time");
    let slots = data::delivery_slots();
    let labels: Vec<String> = slots
        .iter()
        .map(|s| {
            if s.is_selectable() {
                s.window()
            } else {
                format!("{} (unavailable)", s.window())
            }
        })
        .collect();
    loop {
        let picked = Select::new()
            .with_prompt("Delivery window")
            .items(&labels)
            .default(0)
            .interact()?;
        match flow.select_slot(slots[picked].clone()) {
            Ok(()) => break,
            Err(e) => ctx.output.warn(&e.to_string()),
        }
    }
    flow.advance()?;

    // Step 3: payment method.
    ctx.output.step(3, 3, "Payment");
    let methods = PaymentMethod::all();
    let labels: Vec<&str> = methods.iter().map(|m| m.display_name()).collect();
    let picked = Select::new()
        .with_prompt("Pay with")
        .items(&labels)
        .default(0)
        .interact()?;
    flow.select_payment(methods[picked]);
    flow.advance()?;

    // Placement. The cart is only cleared once the backend confirms.
    let spinner = ctx.output.spinner("Placing your order...");
    let placed = ctx
        .orders
        .place_order(
            user.id.clone(),
            &ctx.store.state().cart,
            flow.selected_address
                .clone()
                .context("address selection lost")?,
            flow.selected_slot.clone().context("slot selection lost")?,
            flow.selected_payment.context("payment selection lost")?,
        )
        .await;
    spinner.finish_and_clear();

    let mut order = match placed {
        Ok(order) => order,
        Err(e) => {
            flow.fail_placement()?;
            bail!("Order could not be placed: {}", e);
        }
    };
    if let Some(instructions) = args.instructions {
        order.special_instructions = Some(instructions);
    }
    flow.complete()?;

    ctx.store.clear_cart()?;
    ctx.store.add_order(order.clone())?;

    ctx.output.success("Order placed!");
    ctx.output.kv("Order", order.id.as_str());
    ctx.output.kv("Total", &order.total.to_string());
    ctx.output.kv("Slot", &order.delivery_slot.window());
    ctx.output
        .info(&format!("Track it with `savora track {}`", order.id));

    Ok(())
}

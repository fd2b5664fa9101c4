//! Track an order.

use anyhow::{bail, Result};
use chrono::{Local, TimeZone};
use savora_backend::OrderService;
use savora_commerce::checkout::{stage_index, TRACKING_STAGES};
use savora_commerce::ids::OrderId;

use super::TrackArgs;
use crate::context::Context;
use crate::output::{status_badge, tracking_bar};

/// Run the track command.
pub async fn run(args: TrackArgs, ctx: &mut Context) -> Result<()> {
    let order_id = match args.order_id {
        Some(id) => OrderId::new(id),
        None => match ctx.store.state().orders.last() {
            Some(order) => order.id.clone(),
            None => bail!("No orders this session. Pass an order id, e.g. `savora track ORD...`"),
        },
    };

    let spinner = ctx.output.spinner("Fetching order status...");
    let order = ctx.orders.fetch_order(&order_id).await;
    spinner.finish_and_clear();
    let order = order?;

    // Keep the session's copy in step with what the backend reported.
    ctx.store.update_order_status(&order.id, order.status)?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.header(&format!("Order {}", order.id));
    ctx.output.kv("Status", &status_badge(order.status));
    ctx.output.kv("Progress", &tracking_bar(order.status));
    ctx.output.kv("Total", &order.total.to_string());
    ctx.output.kv("Slot", &order.delivery_slot.window());
    ctx.output.kv("Address", &order.address.one_line());
    ctx.output.kv("Payment", order.payment_method.display_name());

    ctx.output.header("Timeline");
    let reached = stage_index(order.status);
    for (idx, stage) in TRACKING_STAGES.iter().enumerate() {
        let mark = match reached {
            Some(reached) if idx <= reached => "✓",
            _ => "·",
        };
        let update = order.tracking_updates.iter().find(|u| u.status == *stage);
        match update {
            Some(update) => {
                let when = Local
                    .timestamp_opt(update.timestamp, 0)
                    .single()
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or_default();
                let mut line = format!("{} {}  {}", mark, stage.display_name(), update.description);
                if let Some(location) = &update.location {
                    line.push_str(&format!(" ({})", location));
                }
                if !when.is_empty() {
                    line.push_str(&format!(" at {}", when));
                }
                ctx.output.list_item(&line);
            }
            None => ctx
                .output
                .list_item(&format!("{} {}", mark, stage.display_name())),
        }
    }

    Ok(())
}

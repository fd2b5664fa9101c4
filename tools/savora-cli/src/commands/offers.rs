//! List and apply discount codes.

use anyhow::Result;

use super::OffersArgs;
use crate::context::Context;

/// Run the offers command.
pub async fn run(args: OffersArgs, ctx: &mut Context) -> Result<()> {
    if let Some(code) = args.apply {
        if ctx.store.apply_offer(&code) {
            ctx.output.success(&format!("Offer {} applied", code.to_uppercase()));
        } else {
            ctx.output.error(&format!("Unknown offer code: {}", code));
        }
        return Ok(());
    }

    let offers = &ctx.store.state().offers;
    if ctx.output.is_json() {
        ctx.output.json(offers);
        return Ok(());
    }

    ctx.output.header("Offers");
    if offers.is_empty() {
        ctx.output.info("No active offers.");
        return Ok(());
    }
    for offer in offers {
        ctx.output.list_item(&format!("{}  {}", offer.code, offer.title));
        if let Some(min) = offer.min_order_value {
            ctx.output.kv("Min order", &min.to_string());
        }
        if let Some(cap) = offer.max_discount {
            ctx.output.kv("Max discount", &cap.to_string());
        }
    }

    Ok(())
}

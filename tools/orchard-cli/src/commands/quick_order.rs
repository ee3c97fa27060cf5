//! Quick order from the contact form.

use anyhow::Result;
use orchard_commerce::checkout::{format_quick_order, mailto_uri, QUICK_ORDER_SUBJECT};
use serde_json::json;

use super::order::report;
use super::QuickOrderArgs;
use crate::context::Context;
use crate::mail::HandOff;

/// Run the quick-order command.
pub fn run(args: QuickOrderArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    args.customer.apply(store.customer_mut());

    let hand_off = HandOff::from_flags(args.send, args.print);
    let Some(client) = hand_off.client() else {
        let body = format_quick_order(store.customer());
        if ctx.output.is_json() {
            let to = &store.site().email;
            ctx.output.json(&json!({
                "to": to,
                "subject": QUICK_ORDER_SUBJECT,
                "body": body,
                "uri": mailto_uri(to, QUICK_ORDER_SUBJECT, &body),
            }));
        } else {
            ctx.output.header(QUICK_ORDER_SUBJECT);
            ctx.output.block(&body);
            ctx.output.info("");
            ctx.output
                .info("Use --send to open your mail client, or --print to show the link.");
        }
        return Ok(());
    };

    let dispatch = store.dispatch_quick_order(client.as_ref())?;
    if ctx.output.is_json() {
        if !matches!(hand_off, HandOff::Print) {
            ctx.output.json(&dispatch);
        }
        return Ok(());
    }

    ctx.output.header(QUICK_ORDER_SUBJECT);
    ctx.output.block(&dispatch.body);
    report(ctx, &hand_off, &dispatch);
    Ok(())
}

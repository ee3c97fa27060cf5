//! One-shot ordering from the command line.

use anyhow::Result;
use orchard_commerce::checkout::{mailto_uri, order_subject, Dispatch};
use orchard_commerce::Storefront;
use serde::Serialize;
use tracing::debug;

use super::OrderArgs;
use crate::context::Context;
use crate::mail::HandOff;
use crate::output::payment_badge;

/// What `--json` prints when nothing was sent.
#[derive(Serialize)]
struct OrderPreview {
    to: String,
    subject: String,
    body: String,
    uri: String,
    subtotal: i64,
}

impl OrderPreview {
    fn of(store: &Storefront) -> Self {
        let to = store.site().email.clone();
        let subject = order_subject(store.customer());
        let body = store.order_text();
        let uri = mailto_uri(&to, &subject, &body);
        Self {
            to,
            subject,
            body,
            uri,
            subtotal: store.subtotal().amount(),
        }
    }
}

/// Run the order command.
pub fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    args.customer.apply(store.customer_mut());
    if let Some(payment) = args.payment {
        store.set_payment(payment);
    }

    for line in &args.add {
        store.add_to_cart(line.id)?;
        if let Some(qty) = line.qty {
            store.update_quantity(line.id, qty);
        }
        debug!(product = %line.id, qty = ?line.qty, "Added from command line");
    }

    store.open_checkout()?;

    let hand_off = HandOff::from_flags(args.send, args.print);
    let client = hand_off.client();

    if ctx.output.is_json() {
        match client {
            Some(client) => {
                let dispatch = store.dispatch_order(client.as_ref())?;
                if !matches!(hand_off, HandOff::Print) {
                    ctx.output.json(&dispatch);
                }
            }
            None => ctx.output.json(&OrderPreview::of(&store)),
        }
        return Ok(());
    }

    ctx.output.header("Giỏ hàng");
    ctx.output.block(&store.cart_text());

    ctx.output.header("Đơn hàng");
    ctx.output.kv("Thanh toán", &payment_badge(store.payment().as_str()));
    ctx.output.block(&store.payment_text());
    ctx.output.info("");
    ctx.output.block(&store.order_text());

    match client {
        Some(client) => {
            let dispatch = store.dispatch_order(client.as_ref())?;
            report(ctx, &hand_off, &dispatch);
        }
        None => {
            ctx.output.info("");
            ctx.output
                .info("Use --send to open your mail client, or --print to show the link.");
        }
    }

    Ok(())
}

/// Tell the user where the order went.
pub fn report(ctx: &Context, hand_off: &HandOff, dispatch: &Dispatch) {
    match hand_off {
        HandOff::Send => ctx
            .output
            .success(&format!("Đã mở ứng dụng email, gửi tới {}", dispatch.to)),
        HandOff::Print => ctx.output.debug(&format!("Link sent to stdout for {}", dispatch.to)),
        HandOff::Preview => {}
    }
}

//! Seller contact details.

use anyhow::Result;
use chrono::{Datelike, Local};
use orchard_commerce::checkout::footer_line;

use crate::context::Context;

/// Run the contact command.
pub fn run(ctx: &Context) -> Result<()> {
    let site = &ctx.config.site;

    if ctx.output.is_json() {
        ctx.output.json(site);
        return Ok(());
    }

    ctx.output.header("Liên hệ & Đặt hàng");
    ctx.output.kv("Địa chỉ", &site.address);
    ctx.output.kv("Người liên hệ", &site.contact_name);
    ctx.output.kv("Số điện thoại", &site.phone);
    ctx.output.kv("Email", &site.email);

    ctx.output.info("");
    ctx.output.info("Tài khoản ngân hàng:");
    ctx.output.kv("Ngân hàng", &site.bank.bank_name);
    ctx.output.kv("Chủ TK", &site.bank.account_name);
    ctx.output.kv("Số TK", &site.bank.account_number);

    ctx.output.info("");
    ctx.output.kv("Facebook", &site.facebook);

    ctx.output.info("");
    ctx.output.info(&footer_line(site, Local::now().year()));

    Ok(())
}

//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use orchard_commerce::checkout::{CheckoutState, MailClient, PaymentMethod};
use orchard_commerce::{ProductId, StoreError, Storefront};
use tracing::debug;

use super::catalog::print_products;
use super::order::report;
use super::ShopArgs;
use crate::context::Context;
use crate::mail::{HandOff, StdoutMailClient, SystemMailClient};
use crate::output::payment_badge;

/// Menu entries. Which ones are offered depends on the dialog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Browse,
    Add,
    SetQuantity,
    Remove,
    ClearCart,
    ViewCart,
    Checkout,
    EditCustomer,
    Payment,
    Send,
    Close,
    QuickOrder,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::Browse => "Xem / tìm sản phẩm",
            Action::Add => "Thêm vào giỏ",
            Action::SetQuantity => "Đổi số lượng",
            Action::Remove => "Xóa khỏi giỏ",
            Action::ClearCart => "Xóa giỏ hàng",
            Action::ViewCart => "Xem giỏ hàng",
            Action::Checkout => "Đặt hàng",
            Action::EditCustomer => "Thông tin người nhận",
            Action::Payment => "Phương thức thanh toán",
            Action::Send => "Gửi đơn qua email",
            Action::Close => "Đóng",
            Action::QuickOrder => "Đặt hàng nhanh",
            Action::Quit => "Thoát",
        }
    }

    fn menu(state: CheckoutState) -> Vec<Action> {
        match state {
            CheckoutState::Browsing => vec![
                Action::Browse,
                Action::Add,
                Action::SetQuantity,
                Action::Remove,
                Action::ClearCart,
                Action::ViewCart,
                Action::Checkout,
                Action::QuickOrder,
                Action::Quit,
            ],
            CheckoutState::CheckoutOpen => vec![
                Action::SetQuantity,
                Action::Remove,
                Action::ClearCart,
                Action::EditCustomer,
                Action::Payment,
                Action::Send,
                Action::Close,
                Action::Quit,
            ],
        }
    }
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("shop is interactive and does not support --json");
    }

    let mut store = ctx.storefront()?;
    args.customer.apply(store.customer_mut());

    let hand_off = if args.print {
        HandOff::Print
    } else {
        HandOff::Send
    };
    let mail: Box<dyn MailClient> = match hand_off {
        HandOff::Print => Box::new(StdoutMailClient),
        _ => Box::new(SystemMailClient),
    };

    ctx.output.header(&store.site().name);
    ctx.output.info(&store.site().tagline);
    print_products(&ctx.output, &store.search(""));

    loop {
        let actions = Action::menu(store.checkout_state());
        let labels: Vec<String> = actions
            .iter()
            .map(|a| match a {
                Action::ViewCart | Action::Checkout => {
                    format!("{} ({})", a.label(), store.cart().item_count())
                }
                _ => a.label().to_string(),
            })
            .collect();

        ctx.output.info("");
        let choice = Select::new()
            .with_prompt(store.checkout_state().display_name())
            .items(&labels)
            .default(0)
            .interact()?;
        let action = actions[choice];
        debug!(?action, "Shop action");

        match action {
            Action::Browse => browse(ctx, &store)?,
            Action::Add => {
                if let Some(id) = pick_product(&store, false)? {
                    let qty = store.add_to_cart(id)?;
                    ctx.output.success(&format!("Đã thêm (số lượng {})", qty));
                }
            }
            Action::SetQuantity => {
                if let Some(id) = pick_product(&store, true)? {
                    let qty: i64 = Input::new()
                        .with_prompt("Số lượng")
                        .default(1)
                        .interact_text()?;
                    store.update_quantity(id, qty);
                    show_cart(ctx, &store);
                }
            }
            Action::Remove => {
                if let Some(id) = pick_product(&store, true)? {
                    store.remove_item(id);
                    show_cart(ctx, &store);
                }
            }
            Action::ClearCart => {
                if !store.cart().is_empty()
                    && Confirm::new()
                        .with_prompt("Xóa toàn bộ giỏ hàng?")
                        .default(false)
                        .interact()?
                {
                    store.clear_cart();
                }
                show_cart(ctx, &store);
            }
            Action::ViewCart => {
                store.view_cart();
                show_checkout(ctx, &store);
            }
            Action::Checkout => match store.open_checkout() {
                Ok(()) => show_checkout(ctx, &store),
                Err(e) => warn_or_fail(ctx, e)?,
            },
            Action::EditCustomer => {
                edit_customer(&mut store)?;
                show_checkout(ctx, &store);
            }
            Action::Payment => {
                let methods = PaymentMethod::all();
                let items: Vec<&str> = methods.iter().map(|m| m.label()).collect();
                let current = methods
                    .iter()
                    .position(|m| *m == store.payment())
                    .unwrap_or(0);
                let picked = Select::new()
                    .with_prompt("Phương thức thanh toán")
                    .items(&items)
                    .default(current)
                    .interact()?;
                store.set_payment(methods[picked]);
                show_checkout(ctx, &store);
            }
            Action::Send => match store.dispatch_order(mail.as_ref()) {
                Ok(dispatch) => report(ctx, &hand_off, &dispatch),
                Err(e) => warn_or_fail(ctx, e)?,
            },
            Action::Close => {
                store.close_checkout();
            }
            Action::QuickOrder => {
                edit_customer(&mut store)?;
                match store.dispatch_quick_order(mail.as_ref()) {
                    Ok(dispatch) => report(ctx, &hand_off, &dispatch),
                    Err(e) => warn_or_fail(ctx, e)?,
                }
            }
            Action::Quit => {
                if store.cart().is_empty()
                    || Confirm::new()
                        .with_prompt("Giỏ hàng chưa gửi. Thoát?")
                        .default(false)
                        .interact()?
                {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Empty-cart and mail errors are shown and the session continues.
fn warn_or_fail(ctx: &Context, error: StoreError) -> Result<()> {
    match error {
        StoreError::EmptyCart { .. } | StoreError::Dispatch(_) => {
            ctx.output.warn(&error.to_string());
            Ok(())
        }
        other => Err(other.into()),
    }
}

fn browse(ctx: &Context, store: &Storefront) -> Result<()> {
    let query = Input::<String>::new()
        .with_prompt("Tìm kiếm")
        .allow_empty(true)
        .interact_text()?;

    let products = store.search(&query);
    if products.is_empty() {
        ctx.output.warn(&format!("No products match '{}'", query));
    } else {
        print_products(&ctx.output, &products);
    }
    Ok(())
}

/// Let the user pick a product, from the catalog or from the cart.
fn pick_product(store: &Storefront, from_cart: bool) -> Result<Option<ProductId>> {
    let choices: Vec<(ProductId, String)> = if from_cart {
        store
            .cart()
            .lines()
            .iter()
            .map(|l| (l.product.id, format!("{} x{}", l.product.name, l.qty)))
            .collect()
    } else {
        store
            .catalog()
            .products()
            .iter()
            .map(|p| (p.id, format!("{} - {}", p.name, p.price)))
            .collect()
    };

    if choices.is_empty() {
        return Ok(None);
    }

    let labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
    let picked = Select::new()
        .with_prompt("Sản phẩm")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(picked.map(|i| choices[i].0))
}

fn edit_customer(store: &mut Storefront) -> Result<()> {
    let customer = store.customer_mut();
    customer.name = prompt_field("Họ và tên", &customer.name)?;
    customer.phone = prompt_field("Số điện thoại", &customer.phone)?;
    customer.address = prompt_field("Địa chỉ giao hàng", &customer.address)?;
    customer.note = prompt_field("Ghi chú", &customer.note)?;
    Ok(())
}

fn prompt_field(prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn show_cart(ctx: &Context, store: &Storefront) {
    ctx.output.header("Giỏ hàng");
    ctx.output.block(&store.cart_text());
}

fn show_checkout(ctx: &Context, store: &Storefront) {
    show_cart(ctx, store);

    let customer = store.customer();
    ctx.output.header("Thông tin người nhận");
    ctx.output.kv("Họ và tên", &customer.name);
    ctx.output.kv("Số điện thoại", &customer.phone);
    ctx.output.kv("Địa chỉ", &customer.address);
    ctx.output.kv("Ghi chú", &customer.note);

    ctx.output.info("");
    ctx.output.kv("Thanh toán", &payment_badge(store.payment().as_str()));
    ctx.output.block(&store.payment_text());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_cart_offered_in_both_states() {
        assert!(Action::menu(CheckoutState::Browsing).contains(&Action::ClearCart));
        assert!(Action::menu(CheckoutState::CheckoutOpen).contains(&Action::ClearCart));
    }

    #[test]
    fn test_cart_button_leads_to_dialog_menu() {
        let mut store = Storefront::default();
        store.view_cart();

        let menu = Action::menu(store.checkout_state());
        assert!(menu.contains(&Action::Send));
        assert!(menu.contains(&Action::SetQuantity));
        assert!(!menu.contains(&Action::Checkout));
    }

    #[test]
    fn test_send_only_inside_dialog() {
        assert!(!Action::menu(CheckoutState::Browsing).contains(&Action::Send));
    }
}

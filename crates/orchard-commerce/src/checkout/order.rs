//! Order text rendering.
//!
//! Every function here is pure: the same inputs always produce the same
//! text. Nothing reads the clock; callers that want a year pass it in.

use crate::cart::{subtotal_of, CartLine};
use crate::checkout::{CustomerInfo, PaymentMethod};
use crate::site::SiteConfig;

/// Shown in the cart dialog when there is nothing to list.
pub const EMPTY_CART_TEXT: &str = "Giỏ hàng rỗng.";

/// Subject of the quick-order email.
pub const QUICK_ORDER_SUBJECT: &str = "Đặt hàng nhanh";

const TRANSFER_HINT: &str =
    "(Quét QR hoặc chuyển khoản — gửi ảnh chuyển khoản vào email sau khi chuyển để xác nhận)";

/// Render the order summary that is mailed to the seller.
///
/// ```text
/// {shop} - Đơn hàng
/// Khách: {name}
/// SĐT: {phone}
/// Địa chỉ: {address}
/// Ghi chú: {note}
///
/// Chi tiết:
/// {product} - {qty} x {unit price} = {line total}
///
/// Tổng: {subtotal}
/// Hình thức thanh toán: {payment label}
/// ```
pub fn format_order(
    site: &SiteConfig,
    customer: &CustomerInfo,
    lines: &[CartLine],
    payment: PaymentMethod,
) -> String {
    let details = lines
        .iter()
        .map(format_order_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{shop} - Đơn hàng\n\
         Khách: {name}\n\
         SĐT: {phone}\n\
         Địa chỉ: {address}\n\
         Ghi chú: {note}\n\
         \n\
         Chi tiết:\n\
         {details}\n\
         \n\
         Tổng: {total}\n\
         Hình thức thanh toán: {payment}",
        shop = site.name,
        name = customer.name,
        phone = customer.phone,
        address = customer.address,
        note = customer.note,
        details = details,
        total = subtotal_of(lines).display(),
        payment = payment.label(),
    )
}

/// One detail line: `{product} - {qty} x {unit price} = {line total}`.
pub fn format_order_line(line: &CartLine) -> String {
    format!(
        "{} - {} x {} = {}",
        line.product.name,
        line.qty,
        line.product.price.display(),
        line.line_total().display()
    )
}

/// Subject of the cart order email.
pub fn order_subject(customer: &CustomerInfo) -> String {
    format!("Đơn hàng từ website - {}", customer.name)
}

/// Body of the quick-order email sent from the contact form, no cart.
pub fn format_quick_order(customer: &CustomerInfo) -> String {
    format!(
        "Đặt hàng nhanh - {} - {} - {} - Ghi chú: {}",
        customer.name, customer.phone, customer.address, customer.note
    )
}

/// The payment box in the checkout dialog.
///
/// Bank transfer lists the seller's account; cash on delivery shows only
/// the label.
pub fn payment_panel(site: &SiteConfig, payment: PaymentMethod) -> String {
    let mut lines = vec![format!("Thanh toán: {}", payment.label())];
    if payment == PaymentMethod::Bank {
        lines.push(site.bank.bank_name.clone());
        lines.push(format!("Chủ TK: {}", site.bank.account_name));
        lines.push(format!("Số TK: {}", site.bank.account_number));
        lines.push(TRANSFER_HINT.to_string());
    }
    lines.join("\n")
}

/// The cart listing in the checkout dialog, ending with the total.
pub fn format_cart(lines: &[CartLine]) -> String {
    let mut out: Vec<String> = if lines.is_empty() {
        vec![EMPTY_CART_TEXT.to_string()]
    } else {
        lines
            .iter()
            .map(|l| format!("{}\n{} x {}", l.product.name, l.product.price.display(), l.qty))
            .collect()
    };
    out.push(format!("Tổng: {}", subtotal_of(lines).display()));
    out.join("\n")
}

/// Footer copyright line.
pub fn footer_line(site: &SiteConfig, year: i32) -> String {
    format!("© {} {}", year, site.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    fn cart_with(items: &[u32]) -> Cart {
        let catalog = Catalog::reference();
        let mut cart = Cart::new();
        for id in items {
            cart.add(catalog.get(ProductId::new(*id)).unwrap());
        }
        cart
    }

    fn customer() -> CustomerInfo {
        CustomerInfo::default()
            .with_name("Lò Thị Mai")
            .with_phone("0912 000 111")
            .with_address("Hà Nội")
            .with_note("Giao buổi sáng")
    }

    #[test]
    fn test_format_order_template() {
        let site = SiteConfig::default();
        let cart = cart_with(&[1, 2, 2]);

        let text = format_order(&site, &customer(), cart.lines(), PaymentMethod::Bank);

        let expected = "Cam Quít Mường Khương - H'Mông Farm - Đơn hàng\n\
                        Khách: Lò Thị Mai\n\
                        SĐT: 0912 000 111\n\
                        Địa chỉ: Hà Nội\n\
                        Ghi chú: Giao buổi sáng\n\
                        \n\
                        Chi tiết:\n\
                        Cam Mường Khương - Hộp 5kg - 1 x 450.000 ₫ = 450.000 ₫\n\
                        Quít H'Mông - Túi 3kg - 2 x 280.000 ₫ = 560.000 ₫\n\
                        \n\
                        Tổng: 1.010.000 ₫\n\
                        Hình thức thanh toán: Chuyển khoản";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_format_order_cod_label() {
        let site = SiteConfig::default();
        let cart = cart_with(&[3]);

        let text = format_order(&site, &customer(), cart.lines(), PaymentMethod::Cod);

        assert!(text.ends_with("Hình thức thanh toán: COD"));
        assert!(!text.contains("Chuyển khoản"));
    }

    #[test]
    fn test_format_order_is_deterministic() {
        let site = SiteConfig::default();
        let cart = cart_with(&[1, 3, 3]);

        let first = format_order(&site, &customer(), cart.lines(), PaymentMethod::Cod);
        let second = format_order(&site, &customer(), cart.lines(), PaymentMethod::Cod);
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_order_with_blank_customer() {
        let site = SiteConfig::default();
        let cart = cart_with(&[2]);

        let text = format_order(&site, &CustomerInfo::default(), cart.lines(), PaymentMethod::Bank);

        assert!(text.contains("Khách: \n"));
        assert!(text.contains("Ghi chú: \n"));
    }

    #[test]
    fn test_quick_order() {
        assert_eq!(
            format_quick_order(&customer()),
            "Đặt hàng nhanh - Lò Thị Mai - 0912 000 111 - Hà Nội - Ghi chú: Giao buổi sáng"
        );
        assert_eq!(order_subject(&customer()), "Đơn hàng từ website - Lò Thị Mai");
    }

    #[test]
    fn test_payment_panel() {
        let site = SiteConfig::default();

        let bank = payment_panel(&site, PaymentMethod::Bank);
        assert!(bank.starts_with("Thanh toán: Chuyển khoản\n"));
        assert!(bank.contains("Số TK: 4500201234567"));
        assert!(bank.contains("Chủ TK: Giàng Seo Páo"));

        assert_eq!(payment_panel(&site, PaymentMethod::Cod), "Thanh toán: COD");
    }

    #[test]
    fn test_format_cart() {
        assert_eq!(format_cart(&[]), "Giỏ hàng rỗng.\nTổng: 0 ₫");

        let cart = cart_with(&[2, 2]);
        assert_eq!(
            format_cart(cart.lines()),
            "Quít H'Mông - Túi 3kg\n280.000 ₫ x 2\nTổng: 560.000 ₫"
        );
    }

    #[test]
    fn test_footer_line() {
        let site = SiteConfig::default();
        assert_eq!(
            footer_line(&site, 2025),
            "© 2025 Cam Quít Mường Khương - H'Mông Farm"
        );
    }
}

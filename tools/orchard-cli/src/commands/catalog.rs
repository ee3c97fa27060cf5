//! Product listing.

use anyhow::Result;
use orchard_commerce::catalog::Product;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{stock_badge, Output};

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let query = args.search.as_deref().unwrap_or("");
    let products = store.search(query);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&store.site().name);
    ctx.output.info(&store.site().tagline);

    if products.is_empty() {
        ctx.output.warn(&format!("No products match '{}'", query));
        return Ok(());
    }

    print_products(&ctx.output, &products);
    Ok(())
}

/// Print products as a table, descriptions underneath.
pub fn print_products(output: &Output, products: &[&Product]) {
    let widths = [4, 32, 14, 6];
    output.info("");
    output.table_row(&["ID", "Sản phẩm", "Giá", "Kho"], &widths);
    for product in products {
        output.table_row(
            &[
                product.id.to_string().as_str(),
                product.name.as_str(),
                product.price.display().as_str(),
                stock_badge(product.stock).as_str(),
            ],
            &widths,
        );
        if !product.short.is_empty() {
            output.table_row(&["", product.short.as_str()], &widths);
        }
    }
}

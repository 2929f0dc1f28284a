use std::path::PathBuf;

use shelfy_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use shelfy_core::snapshot::SnapshotStore;
use shelfy_core::Product;
use shelfy_store::JsonSnapshotStore;

use crate::commands::CommandResult;

/// Print the catalog snapshot as a plain listing, one product per line.
pub fn run(catalog_override: Option<PathBuf>) -> CommandResult {
    let options = LoadOptions {
        overrides: ConfigOverrides { catalog_path: catalog_override, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    };
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "show",
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let store = JsonSnapshotStore::new(&config.catalog.path);
    let catalog = match store.load() {
        Ok(Some(catalog)) => catalog,
        Ok(None) => {
            return CommandResult::failure(
                "show",
                "snapshot_missing",
                format!("no snapshot at `{}`; run `shelfy seed` first", store.path().display()),
                4,
            );
        }
        Err(error) => {
            return CommandResult::failure("show", "snapshot", error.to_string(), 4);
        }
    };

    let mut lines =
        vec![format!("catalog `{}` ({} products):", store.path().display(), catalog.len())];
    lines.extend(catalog.products().iter().map(render_product));

    CommandResult::plain(0, lines.join("\n"))
}

fn render_product(product: &Product) -> String {
    let status = if product.ordered {
        "sold out (ordered)"
    } else if product.quantity == 0 {
        "no stock"
    } else {
        "in stock"
    };
    format!(
        "- {} | price {} | category {} | quantity {} | {}",
        product.title, product.price, product.category, product.quantity, status
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_line_carries_price_category_quantity_and_stock_status() {
        let product = Product::new("Cotton Saree", 500, "Clothing", 5);

        assert_eq!(
            render_product(&product),
            "- Cotton Saree | price 500 | category Clothing | quantity 5 | in stock"
        );
    }

    #[test]
    fn ordered_products_are_marked_sold_out() {
        let mut product = Product::new("Cotton Saree", 500, "Clothing", 0);
        product.ordered = true;

        assert_eq!(
            render_product(&product),
            "- Cotton Saree | price 500 | category Clothing | quantity 0 | sold out (ordered)"
        );
    }

    #[test]
    fn zero_quantity_without_an_order_reads_as_no_stock() {
        let product = Product::new("Rice Bag", 300, "Groceries", 0);

        assert_eq!(
            render_product(&product),
            "- Rice Bag | price 300 | category Groceries | quantity 0 | no stock"
        );
    }
}

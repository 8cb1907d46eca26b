//! Catalog listing.
//!
//! # Usage
//!
//! ```bash
//! hista catalog --category apps --search office
//! ```

use hista_core::{CategoryFilter, Product};
use hista_storefront::{AppState, Catalog, Page};

/// Render the products in `filter` whose names contain `search`.
#[must_use]
pub fn render(catalog: &Catalog, filter: CategoryFilter, search: &str) -> String {
    let mut state = AppState::new();
    state.navigate(Page::from(filter));
    state.set_search(search);

    let products = state.visible_products(catalog);
    let mut out = format!("{}\n", state.page_title());
    if products.is_empty() {
        out.push_str("No products found\n");
        return out;
    }

    for product in products {
        out.push_str(&product_row(product));
        out.push('\n');
    }
    out
}

fn product_row(product: &Product) -> String {
    format!(
        "{:>4}  {:<20} {:>12}  {:<6} {}",
        product.id.as_i32(),
        product.name,
        product.unit_price().to_string(),
        product.category.to_string(),
        product.description
    )
}

/// Print the filtered catalog to stdout.
#[allow(clippy::print_stdout)]
pub fn list(catalog: &Catalog, filter: CategoryFilter, search: &str) {
    print!("{}", render(catalog, filter, search));
}

use drillbook_types::Product;
use tracing::debug;

/// `price * quantity`, less `discount` percent of it when a discount is set.
#[must_use]
pub fn discounted_subtotal(product: &Product) -> f64 {
    let gross = product.price * product.quantity;
    gross - gross * product.discount.unwrap_or(0.0) / 100.0
}

/// Sum of [`discounted_subtotal`] over all products.
///
/// Summed left to right with no rounding; an empty slice totals `0.0`.
#[must_use]
pub fn calculate_total_price(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    let total = products
        .iter()
        .fold(0.0, |total, product| total + discounted_subtotal(product));
    debug!("Totalled {} products to {}", products.len(), total);
    total
}

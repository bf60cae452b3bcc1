//! Cart line item

use serde::{Deserialize, Serialize};

use super::product::Product;

/// One cart line: a product snapshot plus purchase intent.
///
/// The snapshot is taken at add time; later catalog edits (or deletion) do
/// not reach back into existing lines. Dedup identity is the pair
/// (product id, selected variation id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variation_id: Option<String>,
}

impl CartItem {
    pub fn new(product: Product, selected_variation_id: Option<String>) -> Self {
        Self {
            product,
            quantity: 1,
            selected_variation_id,
        }
    }

    /// Whether this line matches an (id, variation) add request.
    pub fn matches(&self, product_id: &str, variation_id: Option<&str>) -> bool {
        self.product.id == product_id && self.selected_variation_id.as_deref() == variation_id
    }

    /// Effective unit price: the selected variation's discount-else-price
    /// when it resolves, the snapshot's own discount-else-price otherwise.
    /// A stale variation id (no longer in the snapshot) falls back to the
    /// base fields.
    pub fn unit_price(&self) -> f64 {
        self.selected_variation_id
            .as_deref()
            .and_then(|id| self.product.variation(id))
            .map(|v| v.effective_price())
            .unwrap_or_else(|| self.product.effective_price())
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price() * self.quantity as f64
    }
}

//! Session cart and checkout handoff.
//!
//! The cart lives only for the current session; it is never persisted and
//! never cleared implicitly, not even by checkout. Each line snapshots the
//! product at add time, so catalog edits and deletions leave existing lines
//! untouched.

use crate::config::StoreConfig;
use crate::i18n::Language;
use crate::models::{CartItem, Product};

/// Session cart.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines (the badge count).
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Add a product (optionally a specific variation) to the cart.
    ///
    /// An existing line for the same (product id, variation id) pair gains
    /// quantity; a different variation of the same product is a distinct
    /// line.
    pub fn add(&mut self, product: &Product, variation_id: Option<&str>) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(&product.id, variation_id))
        {
            item.quantity += 1;
            return;
        }
        self.items.push(CartItem::new(
            product.clone(),
            variation_id.map(str::to_string),
        ));
    }

    /// Sum of line totals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.line_total()).sum()
    }

    /// Human-readable order summary: a fixed `New Order:` header, one line
    /// per item, then the total with the language's currency label. Only the
    /// currency is localized.
    pub fn checkout_message(&self, language: Language) -> String {
        let strings = language.strings();
        let lines: Vec<String> = self
            .items
            .iter()
            .map(|item| {
                let variation_name = item
                    .selected_variation_id
                    .as_deref()
                    .and_then(|id| item.product.variation(id))
                    .map(|v| v.name.as_str());
                match variation_name {
                    Some(name) => {
                        format!("- {} ({}) (x{})", item.product.name, name, item.quantity)
                    }
                    None => format!("- {} (x{})", item.product.name, item.quantity),
                }
            })
            .collect();

        format!(
            "New Order:\n{}\n\nTotal: {:.2} {}",
            lines.join("\n"),
            self.total(),
            strings.currency
        )
    }

    /// Messaging deep link carrying the URL-encoded order summary.
    ///
    /// Opening the link is the caller's affair; this has no effect on the
    /// cart or any stored state.
    pub fn checkout_url(&self, config: &StoreConfig, language: Language) -> String {
        let message = self.checkout_message(language);
        format!(
            "https://wa.me/{}?text={}",
            config.checkout_recipient,
            urlencoding::encode(&message)
        )
    }
}

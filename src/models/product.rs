//! Product model

use serde::{Deserialize, Serialize};

use crate::config::PLACEHOLDER_IMAGE;
use crate::util;

/// One purchasable configuration of a product (e.g. size, color).
///
/// Exists only nested inside its owning product. IDs are allocated by the
/// form layer at draft time, not by the catalog; the catalog stores them as
/// given and does not re-check uniqueness within the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variation {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    /// No clamp is applied; stock may go negative.
    pub stock: i64,
}

impl Variation {
    /// New blank variation row with a fresh form-layer ID.
    pub fn draft() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            price: 0.0,
            discount_price: None,
            stock: 0,
        }
    }

    /// Effective unit price: discount when set, base otherwise.
    pub fn effective_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }
}

/// Catalog entry.
///
/// When `variations` is present it supersedes the base `price`/`stock`
/// fields for display and cart pricing. The form never produces both at
/// once, but imported documents may carry both; variations win wherever the
/// engine has to choose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    /// Advisory label; free text, never validated against a language's set.
    pub category: String,
    pub description: String,
    /// Opaque encoded image reference (data URL or plain URL).
    pub image: String,
    pub stock: i64,
    /// Unix milliseconds.
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<Variation>>,
}

impl Product {
    pub fn has_variations(&self) -> bool {
        self.variations.as_ref().is_some_and(|v| !v.is_empty())
    }

    pub fn variation(&self, variation_id: &str) -> Option<&Variation> {
        self.variations
            .as_ref()?
            .iter()
            .find(|v| v.id == variation_id)
    }

    /// Effective unit price of the base product (ignoring variations).
    pub fn effective_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }
}

/// Create-product draft, as produced by the product form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub discount_price: Option<f64>,
    pub category: String,
    pub description: String,
    /// `None` stores the placeholder reference.
    pub image: Option<String>,
    pub stock: i64,
    pub variations: Option<Vec<Variation>>,
}

impl ProductCreate {
    /// Materialize a full record with a fresh time-based ID.
    ///
    /// An empty variation list is normalized to `None` (a form with zero
    /// variation rows means "no variations", not "an empty set of them").
    pub fn into_product(self) -> Product {
        Product {
            id: util::time_id_string(),
            name: self.name,
            price: self.price,
            discount_price: self.discount_price,
            category: self.category,
            description: self.description,
            image: self
                .image
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            stock: self.stock,
            created_at: util::now_millis(),
            variations: normalize_variations(self.variations),
        }
    }
}

/// Update-product patch: `Some` overwrites the field, `None` preserves it.
///
/// `discount_price` and `variations` are double-optional so a patch can
/// distinguish "leave unchanged" from "clear".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub discount_price: Option<Option<f64>>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub stock: Option<i64>,
    pub variations: Option<Option<Vec<Variation>>>,
}

impl ProductUpdate {
    /// Merge this patch onto an existing record, field by field.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(discount_price) = self.discount_price {
            product.discount_price = discount_price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(variations) = self.variations {
            product.variations = normalize_variations(variations);
        }
    }
}

fn normalize_variations(variations: Option<Vec<Variation>>) -> Option<Vec<Variation>> {
    variations.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_create(name: &str) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            price: 100.0,
            discount_price: None,
            category: "Électronique".to_string(),
            description: "desc".to_string(),
            image: None,
            stock: 10,
            variations: None,
        }
    }

    #[test]
    fn test_create_fills_placeholder_image_and_id() {
        let product = sample_create("Phone").into_product();
        assert!(!product.id.is_empty());
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert!(product.created_at > 0);
    }

    #[test]
    fn test_create_normalizes_empty_variations() {
        let mut draft = sample_create("Shirt");
        draft.variations = Some(vec![]);
        let product = draft.into_product();
        assert!(product.variations.is_none());
        assert!(!product.has_variations());
    }

    #[test]
    fn test_patch_preserves_unset_fields() {
        let mut product = sample_create("Phone").into_product();
        let original_stock = product.stock;

        let patch = ProductUpdate {
            name: Some("Phone Pro".to_string()),
            price: Some(150.0),
            ..Default::default()
        };
        patch.apply(&mut product);

        assert_eq!(product.name, "Phone Pro");
        assert_eq!(product.price, 150.0);
        assert_eq!(product.stock, original_stock);
        assert_eq!(product.category, "Électronique");
    }

    #[test]
    fn test_patch_can_clear_discount() {
        let mut product = sample_create("Phone").into_product();
        product.discount_price = Some(80.0);

        let patch = ProductUpdate {
            discount_price: Some(None),
            ..Default::default()
        };
        patch.apply(&mut product);
        assert!(product.discount_price.is_none());
    }

    #[test]
    fn test_variation_effective_price() {
        let mut variation = Variation::draft();
        variation.price = 50.0;
        assert_eq!(variation.effective_price(), 50.0);
        variation.discount_price = Some(40.0);
        assert_eq!(variation.effective_price(), 40.0);
    }

    #[test]
    fn test_variation_lookup() {
        let mut product = sample_create("Shirt").into_product();
        let mut variation = Variation::draft();
        variation.name = "XL".to_string();
        let variation_id = variation.id.clone();
        product.variations = Some(vec![variation]);

        assert_eq!(product.variation(&variation_id).unwrap().name, "XL");
        assert!(product.variation("missing").is_none());
    }
}

//! Derived views over the catalog: pure, recomputed on demand.

use crate::models::Product;

/// Stock level below which a product counts as low-stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// One bar of the category histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Category label → product count, in first-seen order over the collection.
pub fn category_histogram(products: &[Product]) -> Vec<CategoryCount> {
    let mut bars: Vec<CategoryCount> = Vec::new();
    for product in products {
        match bars.iter_mut().find(|b| b.name == product.category) {
            Some(bar) => bar.count += 1,
            None => bars.push(CategoryCount {
                name: product.category.clone(),
                count: 1,
            }),
        }
    }
    bars
}

/// Total inventory value at base (non-discount) prices.
///
/// Products with variations contribute Σ(variation price × stock); others
/// contribute base price × stock. Discount prices never enter this figure.
pub fn total_inventory_value(products: &[Product]) -> f64 {
    products
        .iter()
        .map(|product| match &product.variations {
            Some(variations) if !variations.is_empty() => variations
                .iter()
                .map(|v| v.price * v.stock as f64)
                .sum(),
            _ => product.price * product.stock as f64,
        })
        .sum()
}

/// Count of products whose relevant stock figure is below the threshold:
/// any variation for varied products, the base stock otherwise.
pub fn low_stock_count(products: &[Product]) -> usize {
    products
        .iter()
        .filter(|product| match &product.variations {
            Some(variations) if !variations.is_empty() => {
                variations.iter().any(|v| v.stock < LOW_STOCK_THRESHOLD)
            }
            _ => product.stock < LOW_STOCK_THRESHOLD,
        })
        .count()
}

/// Displayed stock for one product: variation sum when varied, base stock
/// otherwise.
pub fn total_stock(product: &Product) -> i64 {
    match &product.variations {
        Some(variations) if !variations.is_empty() => {
            variations.iter().map(|v| v.stock).sum()
        }
        _ => product.stock,
    }
}

/// Case-insensitive substring filter over product name OR category,
/// preserving collection order.
pub fn filtered_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProductCreate, Variation};

    fn product(name: &str, category: &str, price: f64, stock: i64) -> Product {
        ProductCreate {
            name: name.to_string(),
            price,
            discount_price: None,
            category: category.to_string(),
            description: String::new(),
            image: None,
            stock,
            variations: None,
        }
        .into_product()
    }

    fn variation(price: f64, discount: Option<f64>, stock: i64) -> Variation {
        let mut v = Variation::draft();
        v.price = price;
        v.discount_price = discount;
        v.stock = stock;
        v
    }

    #[test]
    fn test_histogram_first_seen_order() {
        let products = vec![
            product("a", "Maison", 1.0, 1),
            product("b", "Beauté", 1.0, 1),
            product("c", "Maison", 1.0, 1),
        ];
        let bars = category_histogram(&products);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].name, "Maison");
        assert_eq!(bars[0].count, 2);
        assert_eq!(bars[1].name, "Beauté");
        assert_eq!(bars[1].count, 1);
    }

    #[test]
    fn test_inventory_value_ignores_discounts() {
        let mut varied = product("shirt", "Vêtements", 999.0, 999);
        varied.variations = Some(vec![
            variation(100.0, Some(1.0), 2), // discount must not count
            variation(50.0, None, 3),
        ]);
        let mut plain = product("cream", "Beauté", 20.0, 4);
        plain.discount_price = Some(1.0);

        // varied: 100×2 + 50×3 = 350 (base fields superseded); plain: 20×4 = 80
        let total = total_inventory_value(&[varied, plain]);
        assert_eq!(total, 430.0);
    }

    #[test]
    fn test_low_stock_uses_minimum_relevant_figure() {
        let mut varied_low = product("a", "c", 1.0, 100);
        varied_low.variations = Some(vec![variation(1.0, None, 50), variation(1.0, None, 4)]);

        let mut varied_ok = product("b", "c", 1.0, 0);
        varied_ok.variations = Some(vec![variation(1.0, None, 5)]);

        let plain_low = product("c", "c", 1.0, 4);
        let plain_ok = product("d", "c", 1.0, 5);

        assert_eq!(
            low_stock_count(&[varied_low, varied_ok, plain_low, plain_ok]),
            2
        );
    }

    #[test]
    fn test_total_stock_per_product() {
        let mut varied = product("a", "c", 1.0, 99);
        varied.variations = Some(vec![variation(1.0, None, 2), variation(1.0, None, 3)]);
        assert_eq!(total_stock(&varied), 5);

        let plain = product("b", "c", 1.0, 7);
        assert_eq!(total_stock(&plain), 7);
    }

    #[test]
    fn test_filter_matches_name_or_category_case_insensitive() {
        let products = vec![
            product("Red Shirt", "Clothing", 1.0, 1),
            product("Mug", "Shirts", 1.0, 1),
            product("Lamp", "Maison", 1.0, 1),
        ];
        let hits = filtered_products(&products, "shirt");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Red Shirt");
        assert_eq!(hits[1].name, "Mug");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let products = vec![product("a", "c", 1.0, 1), product("b", "c", 1.0, 1)];
        assert_eq!(filtered_products(&products, "").len(), 2);
    }
}

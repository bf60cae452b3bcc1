//! Catalog store: the product collection and its mutation rules.

use crate::audit::AuditLog;
use crate::error::{StoreError, StoreResult};
use crate::models::{AuditAction, Product, ProductCreate, ProductUpdate};

/// In-memory product collection.
///
/// IDs are unique for the lifetime of the process (time-based monotonic
/// generator; single administrator, no concurrent writers). Every mutation
/// records an audit entry naming the product.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Replace the whole collection (backup import path).
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Create a product from a draft; newest entries sit at the front.
    pub fn create(&mut self, draft: ProductCreate, log: &mut AuditLog) -> &Product {
        let product = draft.into_product();
        log.append(
            AuditAction::Create,
            format!("Created product: {}", product.name),
        );
        tracing::debug!(product_id = %product.id, name = %product.name, "product created");
        self.products.insert(0, product);
        &self.products[0]
    }

    /// Merge a patch onto the record matching `id`; unset fields persist.
    ///
    /// An unknown id is a reportable not-found, and no audit entry is
    /// written for the miss.
    pub fn update(
        &mut self,
        id: &str,
        patch: ProductUpdate,
        log: &mut AuditLog,
    ) -> StoreResult<&Product> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?;

        patch.apply(product);
        log.append(
            AuditAction::Update,
            format!("Updated product: {}", product.name),
        );
        tracing::debug!(product_id = %id, "product updated");
        Ok(product)
    }

    /// Remove the record matching `id`, returning it.
    ///
    /// Cart lines holding a snapshot of the product are deliberately left
    /// alone (snapshot semantics).
    pub fn delete(&mut self, id: &str, log: &mut AuditLog) -> StoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::ProductNotFound(id.to_string()))?;

        let product = self.products.remove(index);
        log.append(
            AuditAction::Delete,
            format!("Deleted product: {}", product.name),
        );
        tracing::debug!(product_id = %id, name = %product.name, "product deleted");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variation;

    fn draft(name: &str) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            price: 100.0,
            discount_price: None,
            category: "Vêtements".to_string(),
            description: String::new(),
            image: None,
            stock: 10,
            variations: None,
        }
    }

    #[test]
    fn test_create_prepends_and_logs() {
        let mut catalog = Catalog::default();
        let mut log = AuditLog::new();

        catalog.create(draft("Old"), &mut log);
        catalog.create(draft("New"), &mut log);

        assert_eq!(catalog.products()[0].name, "New");
        assert_eq!(catalog.products()[1].name, "Old");
        assert_eq!(log.entries()[0].details, "Created product: New");
        assert_eq!(log.entries()[0].action, AuditAction::Create);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut catalog = Catalog::default();
        let mut log = AuditLog::new();
        for i in 0..20 {
            catalog.create(draft(&format!("p{i}")), &mut log);
        }
        let mut ids: Vec<_> = catalog.products().iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_update_merges_patch() {
        let mut catalog = Catalog::default();
        let mut log = AuditLog::new();
        let id = catalog.create(draft("Shirt"), &mut log).id.clone();

        let patch = ProductUpdate {
            price: Some(120.0),
            ..Default::default()
        };
        let updated = catalog.update(&id, patch, &mut log).unwrap();

        assert_eq!(updated.price, 120.0);
        assert_eq!(updated.name, "Shirt");
        assert_eq!(log.entries()[0].action, AuditAction::Update);
    }

    #[test]
    fn test_update_unknown_id_is_not_found_and_unlogged() {
        let mut catalog = Catalog::default();
        let mut log = AuditLog::new();

        let err = catalog
            .update("missing", ProductUpdate::default(), &mut log)
            .unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(_)));
        assert!(log.is_empty());
    }

    #[test]
    fn test_update_can_attach_variations() {
        let mut catalog = Catalog::default();
        let mut log = AuditLog::new();
        let id = catalog.create(draft("Shirt"), &mut log).id.clone();

        let mut variation = Variation::draft();
        variation.name = "XL".to_string();
        variation.price = 110.0;
        let patch = ProductUpdate {
            variations: Some(Some(vec![variation])),
            ..Default::default()
        };
        let updated = catalog.update(&id, patch, &mut log).unwrap();
        assert!(updated.has_variations());

        // Clearing via an empty list normalizes back to no variations.
        let patch = ProductUpdate {
            variations: Some(Some(vec![])),
            ..Default::default()
        };
        let updated = catalog.update(&id, patch, &mut log).unwrap();
        assert!(!updated.has_variations());
    }

    #[test]
    fn test_delete_removes_and_returns() {
        let mut catalog = Catalog::default();
        let mut log = AuditLog::new();
        let id = catalog.create(draft("Shirt"), &mut log).id.clone();

        let removed = catalog.delete(&id, &mut log).unwrap();
        assert_eq!(removed.name, "Shirt");
        assert!(catalog.is_empty());
        assert_eq!(log.entries()[0].details, "Deleted product: Shirt");

        let err = catalog.delete(&id, &mut log).unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(_)));
    }
}

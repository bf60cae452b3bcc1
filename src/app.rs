//! Application controller.
//!
//! `StoreApp` owns the whole application state (catalog, audit log,
//! language, credential gate) plus the session cart and the storage
//! adapter. Every mutating operation runs to completion and then calls
//! [`StoreApp::persist`] explicitly; there are no implicit reactive flushes.
//! Single-threaded by construction: all operations take `&mut self`.

use std::path::Path;

use crate::audit::AuditLog;
use crate::auth::{self, CredentialGate};
use crate::backup::BackupDocument;
use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::{StoreConfig, DEFAULT_ADMIN_PASSWORD};
use crate::error::{StoreError, StoreResult};
use crate::i18n::Language;
use crate::models::{AuditAction, AuditEntry, Product, ProductCreate, ProductUpdate};
use crate::stats;
use crate::storage::StoreStorage;

/// The running store.
pub struct StoreApp {
    config: StoreConfig,
    storage: StoreStorage,
    catalog: Catalog,
    logs: AuditLog,
    language: Language,
    gate: CredentialGate,
    cart: Cart,
}

impl StoreApp {
    /// Open the store, loading each durable key with per-key default
    /// fallback. A store where no password was ever set gets the default
    /// credential hash installed (and persisted) on the spot.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let storage = StoreStorage::open(&config.data_path)?;
        Self::from_storage(config, storage)
    }

    fn from_storage(config: StoreConfig, storage: StoreStorage) -> StoreResult<Self> {
        let catalog = Catalog::new(storage.load_products()?);
        let logs = AuditLog::from_entries(storage.load_logs()?, config.audit_log_cap);
        let language = storage.load_language()?;
        let authenticated = storage.load_auth_flag()?;

        let gate = match storage.load_password_hash()? {
            Some(hash) => CredentialGate::new(hash, authenticated),
            None => {
                let hash = auth::hash_password(DEFAULT_ADMIN_PASSWORD)?;
                storage.save_password_hash(&hash)?;
                tracing::debug!("no credential stored, installed default password hash");
                CredentialGate::new(hash, authenticated)
            }
        };

        Ok(Self {
            config,
            storage,
            catalog,
            logs,
            language,
            gate,
            cart: Cart::default(),
        })
    }

    /// Flush the full durable state in one transaction. Called after every
    /// mutating operation; the cart is session-only and never written.
    fn persist(&self) -> StoreResult<()> {
        self.storage.save_state(
            self.catalog.products(),
            self.logs.entries(),
            self.language,
            self.gate.password_hash(),
            self.gate.is_authenticated(),
        )
    }

    // ========== Auth ==========

    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    pub fn login(&mut self, password: &str) -> StoreResult<()> {
        self.gate.login(password)?;
        self.logs
            .append(AuditAction::Import, "Admin login successful");
        self.persist()
    }

    pub fn logout(&mut self) -> StoreResult<()> {
        self.gate.logout();
        self.persist()
    }

    pub fn change_password(&mut self, old: &str, new: &str) -> StoreResult<()> {
        self.gate.change_password(old, new)?;
        self.persist()
    }

    // ========== Catalog ==========

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn create_product(&mut self, draft: ProductCreate) -> StoreResult<Product> {
        let product = self.catalog.create(draft, &mut self.logs).clone();
        self.persist()?;
        Ok(product)
    }

    pub fn update_product(&mut self, id: &str, patch: ProductUpdate) -> StoreResult<Product> {
        let product = self.catalog.update(id, patch, &mut self.logs)?.clone();
        self.persist()?;
        Ok(product)
    }

    /// Delete a product. Cart lines snapshotting it are left in place.
    pub fn delete_product(&mut self, id: &str) -> StoreResult<Product> {
        let product = self.catalog.delete(id, &mut self.logs)?;
        self.persist()?;
        Ok(product)
    }

    // ========== Audit log ==========

    pub fn logs(&self) -> &[AuditEntry] {
        self.logs.entries()
    }

    /// Empty the audit log. Confirmation is the caller's concern.
    pub fn clear_logs(&mut self) -> StoreResult<()> {
        self.logs.clear();
        self.persist()
    }

    // ========== Language ==========

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) -> StoreResult<()> {
        self.language = language;
        self.persist()
    }

    // ========== Cart ==========

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a catalog product (optionally one of its variations) to the cart.
    pub fn add_to_cart(&mut self, product_id: &str, variation_id: Option<&str>) -> StoreResult<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;
        self.cart.add(product, variation_id);
        Ok(())
    }

    /// Messaging deep link for the current cart. Does not clear the cart or
    /// touch stored state.
    pub fn checkout_url(&self) -> String {
        self.cart.checkout_url(&self.config, self.language)
    }

    // ========== Backup / restore ==========

    pub fn export(&self) -> BackupDocument {
        BackupDocument::export(
            self.catalog.products(),
            self.logs.entries(),
            self.language,
            self.gate.password_hash(),
        )
    }

    pub fn export_json(&self) -> StoreResult<String> {
        self.export().to_json()
    }

    /// Restore from a backup document. Products, logs and the credential hash
    /// each replace the current value wholesale when present; absent fields
    /// stay untouched. The exported `language` field is carried for the
    /// document's own round-trip but is never applied on import.
    /// A malformed document is rejected before anything is applied.
    pub fn import_json(&mut self, json: &str) -> StoreResult<()> {
        let document = BackupDocument::from_json(json)?;

        if let Some(products) = document.products {
            self.catalog.replace(products);
        }
        if let Some(logs) = document.logs {
            self.logs.replace(logs);
        }
        if let Some(hash) = document.admin_password_hash {
            self.gate.set_password_hash(hash);
        }

        self.logs
            .append(AuditAction::Import, "Imported data from backup");
        self.persist()
    }

    // ========== Derived views ==========

    pub fn category_histogram(&self) -> Vec<stats::CategoryCount> {
        stats::category_histogram(self.catalog.products())
    }

    pub fn total_inventory_value(&self) -> f64 {
        stats::total_inventory_value(self.catalog.products())
    }

    pub fn low_stock_count(&self) -> usize {
        stats::low_stock_count(self.catalog.products())
    }

    pub fn filtered_products(&self, query: &str) -> Vec<&Product> {
        stats::filtered_products(self.catalog.products(), query)
    }
}

impl StoreApp {
    /// Open against an on-disk database path with default config (helper for
    /// embedders that only care about the data file location).
    pub fn open_at(path: impl AsRef<Path>) -> StoreResult<Self> {
        let config = StoreConfig {
            data_path: path.as_ref().to_path_buf(),
            ..StoreConfig::default()
        };
        Self::open(config)
    }

    /// In-memory store (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_storage(StoreConfig::default(), StoreStorage::open_in_memory()?)
    }
}

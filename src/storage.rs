//! redb-based persistence adapter.
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `documents` | `&str` | JSON bytes | `products`, `logs` collections |
//! | `settings` | `&str` | `&str` | `language`, `pwd_hash`, `auth` |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap): either the whole transaction landed or none
//! of it.
//!
//! # Read fallback
//!
//! A missing or malformed stored value never fails startup: each loader
//! falls back to the empty/default value and logs the problem at `warn`.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreResult;
use crate::i18n::Language;
use crate::models::{AuditEntry, Product};

/// JSON-serialized collections: key = "products" | "logs".
const DOCUMENTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("documents");

/// Small scalar settings: key = "language" | "pwd_hash" | "auth".
const SETTINGS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("settings");

const PRODUCTS_KEY: &str = "products";
const LOGS_KEY: &str = "logs";
const LANGUAGE_KEY: &str = "language";
const PASSWORD_HASH_KEY: &str = "pwd_hash";
const AUTH_FLAG_KEY: &str = "auth";

/// Durable store for the storefront engine.
#[derive(Clone)]
pub struct StoreStorage {
    db: Arc<Database>,
}

impl StoreStorage {
    /// Open or create the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    /// Open an in-memory database (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let storage = Self { db: Arc::new(db) };
        storage.init_tables()?;
        Ok(storage)
    }

    fn init_tables(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(DOCUMENTS_TABLE)?;
            let _ = write_txn.open_table(SETTINGS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Collections ==========

    pub fn load_products(&self) -> StoreResult<Vec<Product>> {
        self.load_document(PRODUCTS_KEY)
    }

    pub fn save_products(&self, products: &[Product]) -> StoreResult<()> {
        self.save_document(PRODUCTS_KEY, products)
    }

    pub fn load_logs(&self) -> StoreResult<Vec<AuditEntry>> {
        self.load_document(LOGS_KEY)
    }

    pub fn save_logs(&self, logs: &[AuditEntry]) -> StoreResult<()> {
        self.save_document(LOGS_KEY, logs)
    }

    fn load_document<T: DeserializeOwned + Default>(&self, key: &str) -> StoreResult<T> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DOCUMENTS_TABLE)?;

        match table.get(key)? {
            Some(value) => match serde_json::from_slice(value.value()) {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    tracing::warn!(key, error = %e, "stored document malformed, using default");
                    Ok(T::default())
                }
            },
            None => Ok(T::default()),
        }
    }

    fn save_document<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DOCUMENTS_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Settings ==========

    pub fn load_language(&self) -> StoreResult<Language> {
        Ok(self
            .load_setting(LANGUAGE_KEY)?
            .map(|code| Language::from_code(&code))
            .unwrap_or_default())
    }

    pub fn save_language(&self, language: Language) -> StoreResult<()> {
        self.save_setting(LANGUAGE_KEY, language.as_str())
    }

    /// Stored credential hash, if any administrator ever set one.
    pub fn load_password_hash(&self) -> StoreResult<Option<String>> {
        self.load_setting(PASSWORD_HASH_KEY)
    }

    pub fn save_password_hash(&self, hash: &str) -> StoreResult<()> {
        self.save_setting(PASSWORD_HASH_KEY, hash)
    }

    /// Session-authenticated flag; persisted across restarts by design
    /// ("remember session" contract).
    pub fn load_auth_flag(&self) -> StoreResult<bool> {
        Ok(self
            .load_setting(AUTH_FLAG_KEY)?
            .map(|v| v == "true")
            .unwrap_or(false))
    }

    pub fn save_auth_flag(&self, authenticated: bool) -> StoreResult<()> {
        self.save_setting(AUTH_FLAG_KEY, if authenticated { "true" } else { "false" })
    }

    fn load_setting(&self, key: &str) -> StoreResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn save_setting(&self, key: &str, value: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SETTINGS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Full-state flush ==========

    /// Write every durable key in one transaction.
    ///
    /// Called after each mutating operation; keeps the five keys mutually
    /// consistent under a crash mid-flush.
    pub fn save_state(
        &self,
        products: &[Product],
        logs: &[AuditEntry],
        language: Language,
        password_hash: &str,
        authenticated: bool,
    ) -> StoreResult<()> {
        let products_bytes = serde_json::to_vec(products)?;
        let logs_bytes = serde_json::to_vec(logs)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut documents = write_txn.open_table(DOCUMENTS_TABLE)?;
            documents.insert(PRODUCTS_KEY, products_bytes.as_slice())?;
            documents.insert(LOGS_KEY, logs_bytes.as_slice())?;

            let mut settings = write_txn.open_table(SETTINGS_TABLE)?;
            settings.insert(LANGUAGE_KEY, language.as_str())?;
            settings.insert(PASSWORD_HASH_KEY, password_hash)?;
            settings.insert(AUTH_FLAG_KEY, if authenticated { "true" } else { "false" })?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Write a raw document value (for corrupt-fallback tests).
    #[cfg(test)]
    pub fn save_document_raw(&self, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(DOCUMENTS_TABLE)?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

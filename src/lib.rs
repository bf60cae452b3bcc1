//! marketstore: single-user storefront engine.
//!
//! A product catalog with optional priced/stocked variations, a session cart
//! with messaging-deep-link checkout, a capped audit log, an argon2-gated
//! admin credential, and JSON backup/restore, all persisted in an embedded
//! redb key-value store. One administrator, one process, no server.
//!
//! [`StoreApp`] is the entry point: it owns the whole state and flushes it
//! after every mutation.

pub mod app;
pub mod audit;
pub mod auth;
pub mod backup;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod stats;
pub mod storage;
pub mod util;

// Re-exports
pub use app::StoreApp;
pub use backup::BackupDocument;
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use i18n::Language;
pub use models::{AuditAction, AuditEntry, CartItem, Product, ProductCreate, ProductUpdate, Variation};

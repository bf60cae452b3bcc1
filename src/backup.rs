//! Backup document: whole-state export and restore.
//!
//! Every field is optional; a partial document overwrites only the fields it
//! carries and leaves the rest of the state untouched. Field names match the
//! export format of earlier releases, so old backups restore unchanged.
//! Beyond successful parsing no schema validation is performed: a document
//! with wrong-shaped products will be applied as-is.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::i18n::Language;
use crate::models::{AuditEntry, Product};

/// Serialized application snapshot. Never includes the session auth flag or
/// the cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<AuditEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(
        default,
        rename = "adminPasswordHash",
        skip_serializing_if = "Option::is_none"
    )]
    pub admin_password_hash: Option<String>,
}

impl BackupDocument {
    /// Full snapshot of the durable state.
    pub fn export(
        products: &[Product],
        logs: &[AuditEntry],
        language: Language,
        password_hash: &str,
    ) -> Self {
        Self {
            products: Some(products.to_vec()),
            logs: Some(logs.to_vec()),
            language: Some(language),
            admin_password_hash: Some(password_hash.to_string()),
        }
    }

    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a backup document. A malformed document is rejected wholesale;
    /// nothing is applied.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        serde_json::from_str(json).map_err(StoreError::MalformedBackup)
    }
}

/// Timestamped file name offered for the export download.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!(
        "marketstore_export_{}.json",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

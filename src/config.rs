//! Engine configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Password assumed when no administrator has ever set one.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Image reference stored when a product draft supplies none.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/200/200";

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the embedded database file.
    pub data_path: PathBuf,
    /// Phone number receiving checkout messages (wa.me deep link).
    pub checkout_recipient: String,
    /// Maximum retained audit entries.
    #[serde(default = "default_audit_log_cap")]
    pub audit_log_cap: usize,
}

fn default_audit_log_cap() -> usize {
    100
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./marketstore.redb"),
            checkout_recipient: "212600000000".to_string(),
            audit_log_cap: default_audit_log_cap(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a JSON file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> StoreResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            Ok(Self::default())
        }
    }

    /// Persist configuration to a JSON file.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

//! Audit log types

use serde::{Deserialize, Serialize};

use crate::util;

/// Audit action kind (closed enum, not free text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Import,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
            AuditAction::Import => "IMPORT",
        };
        write!(f, "{s}")
    }
}

/// One immutable record of a state-changing action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub action: AuditAction,
    pub details: String,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl AuditEntry {
    pub fn new(action: AuditAction, details: impl Into<String>) -> Self {
        Self {
            id: util::time_id_string(),
            action,
            details: details.into(),
            timestamp: util::now_millis(),
        }
    }
}

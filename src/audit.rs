//! Append-only, capacity-bounded audit log, newest first.

use crate::models::{AuditAction, AuditEntry};

/// Maximum retained entries; insertion beyond the cap evicts the oldest.
pub const AUDIT_LOG_CAP: usize = 100;

/// In-memory audit log. Entries are immutable once appended; the only
/// destructive operation is the unconditional bulk clear (caller is expected
/// to have confirmed with the user).
#[derive(Debug, Clone)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
    cap: usize,
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLog {
    pub fn new() -> Self {
        Self::with_cap(AUDIT_LOG_CAP)
    }

    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: Vec::new(),
            cap,
        }
    }

    /// Rehydrate from storage, enforcing the cap on the way in.
    pub fn from_entries(mut entries: Vec<AuditEntry>, cap: usize) -> Self {
        entries.truncate(cap);
        Self { entries, cap }
    }

    /// Insert a new entry at the head, evicting past the cap.
    pub fn append(&mut self, action: AuditAction, details: impl Into<String>) {
        self.entries.insert(0, AuditEntry::new(action, details));
        self.entries.truncate(self.cap);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the whole log (backup import path); cap still applies.
    pub fn replace(&mut self, mut entries: Vec<AuditEntry>) {
        entries.truncate(self.cap);
        self.entries = entries;
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_inserts_at_head() {
        let mut log = AuditLog::new();
        log.append(AuditAction::Create, "first");
        log.append(AuditAction::Update, "second");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].details, "second");
        assert_eq!(log.entries()[1].details, "first");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = AuditLog::new();
        for i in 0..AUDIT_LOG_CAP {
            log.append(AuditAction::Create, format!("entry {i}"));
        }
        assert_eq!(log.len(), AUDIT_LOG_CAP);

        log.append(AuditAction::Delete, "the 101st");
        assert_eq!(log.len(), AUDIT_LOG_CAP);
        assert_eq!(log.entries()[0].details, "the 101st");
        // "entry 0" (the oldest) was evicted.
        assert_eq!(
            log.entries().last().unwrap().details,
            "entry 1"
        );
    }

    #[test]
    fn test_clear_empties_unconditionally() {
        let mut log = AuditLog::new();
        log.append(AuditAction::Create, "entry");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_replace_applies_cap() {
        let mut log = AuditLog::new();
        let oversized: Vec<_> = (0..150)
            .map(|i| crate::models::AuditEntry::new(AuditAction::Import, format!("e{i}")))
            .collect();
        log.replace(oversized);
        assert_eq!(log.len(), AUDIT_LOG_CAP);
        assert_eq!(log.entries()[0].details, "e0");
    }
}

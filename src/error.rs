//! Unified error type for the storefront engine.

use thiserror::Error;

/// Errors surfaced by the storefront engine.
///
/// None of these are fatal: the application stays interactive after every
/// variant. Authentication and backup failures are reported to the user;
/// storage-layer variants are propagated from the persistence adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Wrong password")]
    WrongPassword,

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Malformed backup document: {0}")]
    MalformedBackup(#[source] serde_json::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for StoreError {
    fn from(e: argon2::password_hash::Error) -> Self {
        StoreError::PasswordHash(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

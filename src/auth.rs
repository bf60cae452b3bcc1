//! Admin credential gate.
//!
//! Holds the argon2 hash of the single administrator password and the
//! session-authenticated flag. Plaintext passwords are verified against the
//! hash and never stored or logged.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::DEFAULT_ADMIN_PASSWORD;
use crate::error::{StoreError, StoreResult};

/// Credential state: one salted hash, one session flag.
#[derive(Debug, Clone)]
pub struct CredentialGate {
    password_hash: String,
    authenticated: bool,
}

impl CredentialGate {
    pub fn new(password_hash: String, authenticated: bool) -> Self {
        Self {
            password_hash,
            authenticated,
        }
    }

    /// Gate for a store where no administrator ever set a password: hashes
    /// the documented default.
    pub fn with_default_password() -> StoreResult<Self> {
        Ok(Self {
            password_hash: hash_password(DEFAULT_ADMIN_PASSWORD)?,
            authenticated: false,
        })
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Replace the stored hash wholesale (backup import path).
    pub fn set_password_hash(&mut self, hash: String) {
        self.password_hash = hash;
    }

    /// Verify a login attempt. On match the session flag is set; on mismatch
    /// the state is unchanged and `WrongPassword` is returned.
    pub fn login(&mut self, password: &str) -> StoreResult<()> {
        if verify_password(password, &self.password_hash)? {
            self.authenticated = true;
            tracing::debug!("admin login successful");
            Ok(())
        } else {
            Err(StoreError::WrongPassword)
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    /// Rotate the password. The old password must verify against the current
    /// hash; on failure nothing changes. No strength policy is enforced.
    pub fn change_password(&mut self, old_password: &str, new_password: &str) -> StoreResult<()> {
        if !verify_password(old_password, &self.password_hash)? {
            return Err(StoreError::WrongPassword);
        }
        self.password_hash = hash_password(new_password)?;
        Ok(())
    }
}

/// Hash a password with a fresh random salt (argon2id).
pub fn hash_password(password: &str) -> StoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash.
pub fn verify_password(password: &str, hash: &str) -> StoreResult<bool> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/**
 * Password Hashing and Verification
 *
 * Passwords are hashed with bcrypt before they reach the database and are
 * never stored or logged in plaintext. A `PasswordHash` can only be created
 * here, by hashing, or by the persistence layer when it loads a stored row.
 *
 * # Security
 *
 * - Verification is constant-time (via bcrypt)
 * - A malformed stored hash verifies as `false` instead of failing the request
 */
use std::fmt;

use thiserror::Error;

/// Errors from hashing a password
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// An opaque bcrypt hash
///
/// Write-only: the inner string is visible to this crate only.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a hash loaded from storage
    pub(crate) fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Hash a password with the given bcrypt cost
pub fn hash(password: &str, cost: u32) -> Result<PasswordHash, CredentialError> {
    let hashed = bcrypt::hash(password, cost)?;
    Ok(PasswordHash(hashed))
}

/// Check a candidate password against a hash
///
/// Returns `false` for a wrong password and for a hash bcrypt cannot parse.
pub fn verify(hash: &PasswordHash, password: &str) -> bool {
    match bcrypt::verify(password, hash.as_str()) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Password verification error: {:?}", e);
            false
        }
    }
}

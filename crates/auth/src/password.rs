//! Deterministic one-way password digest and temporary-password provisioning.
//!
//! The credential store looks identities up by exact `(email, digest)`
//! equality, so the digest must be deterministic: same input, same output,
//! no per-entry salt. This is a lookup contract, not a password KDF.

use sha2::{Digest, Sha256};

use crate::secret;

/// Digest a plaintext password for storage or lookup.
///
/// Lowercase hex SHA-256. Must be applied identically at account creation
/// and at login; [`LoginService::initiate`](crate::LoginService::initiate)
/// digests the submitted password with this function before the store
/// lookup.
pub fn digest(plain: &str) -> String {
    hex::encode(Sha256::digest(plain.as_bytes()))
}

/// A freshly provisioned temporary password.
///
/// The plaintext goes to out-of-band delivery (email/SMS, outside the core);
/// only the hash may be handed to the credential store.
#[derive(Debug, Clone)]
pub struct TemporaryPassword {
    pub plain: String,
    pub hash: String,
}

impl TemporaryPassword {
    /// Generate a random temporary password of `length` characters and its
    /// storage digest.
    pub fn generate(length: usize) -> Self {
        let plain = secret::generate(length);
        let hash = digest(&plain);
        Self { plain, hash }
    }
}

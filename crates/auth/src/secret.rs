//! Random alphanumeric secrets: 2FA codes and temporary passwords.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random string of exactly `length` alphanumeric characters.
///
/// Independent values per call; no uniqueness guarantee (that is the
/// caller's responsibility). Suitable for one-time codes and temporary
/// passwords, not for session-secret-grade material.
pub fn generate(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

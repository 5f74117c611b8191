//! Bcrypt verification
//!
//! Default `PasswordVerifier` backed by the `bcrypt` crate.

use super::PasswordVerifier;

/// Verifies passwords against bcrypt hashes (2a, 2b, or 2y).
#[derive(Debug, Default)]
pub struct BcryptVerifier;

impl PasswordVerifier for BcryptVerifier {
    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

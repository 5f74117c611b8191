//! Password verification
//!
//! The hash-compare primitive the store delegates to, behind a trait so
//! embedders and tests can substitute their own implementation.

pub mod bcrypt;

pub use self::bcrypt::BcryptVerifier;

/// Compares a plaintext password against a stored salted hash.
///
/// Implementations are expected to be deliberately expensive; the store
/// runs them outside its lock.
pub trait PasswordVerifier: Send + Sync {
    /// Returns true only when `password` matches `hash`. A malformed or
    /// empty hash is a mismatch, never an error.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

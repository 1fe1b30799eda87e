// ============================
// crates/backend-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.
//!
//! Digests are hex-encoded unsalted SHA-256 of the plaintext. Every
//! credential file this service has ever written uses that form, so the
//! scheme is kept as-is. Known weakness: without a per-user salt, equal
//! passwords produce equal digests and precomputed-table attacks apply.
use sha2::{Digest, Sha256};

/// Hash a password into its stored digest form.
pub fn hash_password(plain: &str) -> String {
    format!("{:x}", Sha256::digest(plain.as_bytes()))
}

/// Verify a password against a stored digest.
pub fn verify_password(stored: &str, plain: &str) -> bool {
    hash_password(plain) == stored
}

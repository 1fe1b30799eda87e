// ============================
// crates/backend-lib/src/auth/token.rs
// ============================
//! Bearer token generation.
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};

/// Token size in bytes (32 bytes = 256 bits of entropy)
const TOKEN_BYTES: usize = 32;

/// Generate a cryptographically random session token, base64 URL-safe
/// encoded without padding. OS entropy only; tokens are unpredictable and
/// collisions are not a practical concern at this entropy.
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut buffer);
    URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_generation() {
        let token1 = generate_token();
        let token2 = generate_token();

        assert_ne!(token1, token2);

        // 32 bytes of entropy encoded in base64, about 43 chars
        assert!(token1.len() >= 42);

        // URL-safe alphabet, no padding
        assert!(token1
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}

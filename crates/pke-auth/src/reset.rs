//! Single-use recovery token generation.
//!
//! A reset token is a high-entropy secret with a fixed validity window.
//! Nothing is stored here: persistence of the pair is the credential
//! store's job, and single-use semantics are enforced by the atomic
//! `complete_reset` statement.
use pke_core::RESET_TOKEN_BYTES;
use pke_core::RESET_TOKEN_TTL;

/// Generate a fresh reset token and its expiry instant.
/// 256 bits of randomness, hex-encoded; expiry is one hour out.
pub fn generate() -> (String, std::time::SystemTime) {
    use rand::Rng;
    let ref mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::rng().fill(bytes);
    let token = hex::encode(bytes);
    let expires = std::time::SystemTime::now() + RESET_TOKEN_TTL;
    (token, expires)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn token_is_64_hex_chars() {
        let (token, _) = generate();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
    #[test]
    fn tokens_are_distinct() {
        assert_ne!(generate().0, generate().0);
    }
    #[test]
    fn expiry_is_one_hour_out() {
        let (_, expires) = generate();
        let ttl = expires
            .duration_since(std::time::SystemTime::now())
            .unwrap();
        assert!(ttl <= RESET_TOKEN_TTL);
        assert!(ttl > RESET_TOKEN_TTL - std::time::Duration::from_secs(5));
    }
}

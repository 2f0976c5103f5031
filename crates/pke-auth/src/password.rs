//! Argon2 password hashing and verification.
use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

fn salt() -> SaltString {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).expect("salt")
}

/// Hash a plaintext password into a PHC-format string with a random salt.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|h| h.to_string())
}

/// Verify a plaintext against a stored hash.
/// A mismatch is `Ok(false)`. An unparseable hash is an error: the stored
/// credential is corrupt, which callers must treat as a server fault
/// rather than a failed login.
pub fn verify(password: &str, hashword: &str) -> Result<bool, argon2::password_hash::Error> {
    let hash = PasswordHash::new(hashword)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok())
}

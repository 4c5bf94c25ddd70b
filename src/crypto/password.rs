//! Password storage — salted PBKDF2-SHA256.
//!
//! Stored form: `pbkdf2-sha256$<iterations>$<salt_b64>$<hash_b64>`.
//! Verification re-derives with the stored parameters and compares in
//! constant time, so a malformed stored value simply fails verification.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;

pub const PBKDF2_ITERATIONS: u32 = 600_000;
const HASH_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;

fn derive(password: &str, salt: &[u8], iterations: u32) -> [u8; HASH_LENGTH] {
    let mut out = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, iterations, &mut out);
    out
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    use rand::RngCore;
    let mut salt = [0u8; SALT_LENGTH];
    rand::thread_rng().fill_bytes(&mut salt);
    let hash = derive(password, &salt, PBKDF2_ITERATIONS);
    format!(
        "pbkdf2-sha256${}${}${}",
        PBKDF2_ITERATIONS,
        STANDARD_NO_PAD.encode(salt),
        STANDARD_NO_PAD.encode(hash),
    )
}

/// Check a password against a stored hash. Constant-time on the digest.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some("pbkdf2-sha256"), Some(iterations), Some(salt), Some(hash), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return false;
    };
    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    let (Ok(salt), Ok(expected)) = (STANDARD_NO_PAD.decode(salt), STANDARD_NO_PAD.decode(hash))
    else {
        return false;
    };
    if expected.len() != HASH_LENGTH {
        return false;
    }
    let actual = derive(password, &salt, iterations);
    actual.as_slice().ct_eq(&expected).into()
}

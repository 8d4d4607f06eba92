//! Password hashing with salted PBKDF2-HMAC-SHA256.
//!
//! Hashes are stored as `pbkdf2-sha256$<iterations>$<salt hex>$<hash hex>` so the
//! iteration count can be raised later without invalidating existing accounts.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::server::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const SCHEME: &str = "pbkdf2-sha256";
const ITERATIONS: u32 = 100_000;
const SALT_LEN: usize = 16;
const TEMP_PASSWORD_LEN: usize = 12;

/// Hashes a password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - Encoded hash string for storage
/// - `Err(AppError::InternalError)` - HMAC could not be keyed with the password
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_with_iterations(password, ITERATIONS)
}

/// Hashes a password with an explicit iteration count.
///
/// Tests use a low count to keep login fixtures fast.
pub(crate) fn hash_with_iterations(password: &str, iterations: u32) -> Result<String, AppError> {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill(&mut salt[..]);

    let hash = pbkdf2_sha256(password.as_bytes(), &salt, iterations)
        .ok_or_else(|| AppError::InternalError("Failed to key password HMAC".to_string()))?;

    Ok(format!(
        "{}${}${}${}",
        SCHEME,
        iterations,
        hex::encode(salt),
        hex::encode(hash)
    ))
}

/// Checks a password against a stored hash string.
///
/// Malformed hash strings never verify.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let mut parts = stored.split('$');
    let (Some(scheme), Some(iterations), Some(salt), Some(expected), None) = (
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
        parts.next(),
    ) else {
        return false;
    };

    if scheme != SCHEME {
        return false;
    }

    let (Ok(iterations), Ok(salt), Ok(expected)) = (
        iterations.parse::<u32>(),
        hex::decode(salt),
        hex::decode(expected),
    ) else {
        return false;
    };

    if iterations == 0 {
        return false;
    }

    match pbkdf2_sha256(password.as_bytes(), &salt, iterations) {
        Some(derived) => derived[..].ct_eq(&expected[..]).into(),
        None => false,
    }
}

/// Generates a random alphanumeric password for accounts created without one.
pub fn generate_temp_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TEMP_PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Single-block PBKDF2 (derived key length equals the SHA-256 output).
fn pbkdf2_sha256(password: &[u8], salt: &[u8], iterations: u32) -> Option<[u8; 32]> {
    let prf = HmacSha256::new_from_slice(password).ok()?;

    let mut mac = prf.clone();
    mac.update(salt);
    mac.update(&1u32.to_be_bytes());
    let mut u = mac.finalize().into_bytes();

    let mut result = [0u8; 32];
    result.copy_from_slice(&u);

    for _ in 1..iterations {
        let mut mac = prf.clone();
        mac.update(&u);
        u = mac.finalize().into_bytes();

        for (r, ui) in result.iter_mut().zip(u.iter()) {
            *r ^= ui;
        }
    }

    Some(result)
}

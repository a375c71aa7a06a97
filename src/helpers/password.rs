use actix_web::web;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Invalid password hashing cost {0}")]
    InvalidCost(u32),
    #[error("Password hashing failed: {0}")]
    Hash(String),
}

/// Hash a password with Argon2id and a fresh random salt.
///
/// `cost` is the Argon2 time cost (number of passes). The result is a PHC string, so the salt
/// and parameters travel with the hash and [`verify`] needs nothing else.
pub fn hash(plaintext: &str, cost: u32) -> Result<String, PasswordError> {
    let params = Params::new(Params::DEFAULT_M_COST, cost, Params::DEFAULT_P_COST, None)
        .map_err(|_| PasswordError::InvalidCost(cost))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Check a plaintext password against a stored PHC hash.
/// A stored value that does not parse counts as a mismatch.
pub fn verify(plaintext: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!("Stored password hash is malformed: {}", err);
            return false;
        }
    };

    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

/// [`hash`] on the blocking thread pool, so the memory-hard work stays off the request worker.
pub async fn spawn_hash(plaintext: String, cost: u32) -> Result<String, PasswordError> {
    web::block(move || hash(&plaintext, cost))
        .await
        .map_err(|err| PasswordError::Hash(err.to_string()))?
}

/// [`verify`] on the blocking thread pool. A failed blocking task counts as a mismatch.
pub async fn spawn_verify(plaintext: String, hash: String) -> bool {
    web::block(move || verify(&plaintext, &hash))
        .await
        .unwrap_or_else(|err| {
            tracing::error!("Password check did not complete: {}", err);
            false
        })
}
